//! Terminal stand-in for the confirmation dialog.

use std::io::{self, BufRead, Write};

/// Show `message` on stderr and read one re-typed line from stdin.
///
/// Returns `None` if stdin is closed.
pub fn confirm(message: &str) -> Option<String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    ask(message, &mut input, &mut io::stderr())
}

fn ask<R: BufRead, W: Write>(message: &str, input: &mut R, output: &mut W) -> Option<String> {
    write!(output, "{} ", message).ok()?;
    output.flush().ok()?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}
