//! Tool and work-order validation.

mod validate;

pub use validate::{validate, TOOL_CONFIRM_PROMPT, WORK_ORDER_CONFIRM_PROMPT};
