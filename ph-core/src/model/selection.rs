//! Helpers for the file selection list.

use std::path::{Path, PathBuf};

use super::SelectedFile;

/// Shown when nothing has been selected yet.
pub const NO_FILES: &str = "No Files";

/// Clean up a path delivered by a drag-and-drop event.
///
/// Drop sources wrap paths containing spaces in `{...}`.
pub fn normalize_dropped_path(raw: &str) -> PathBuf {
    let cleaned: String = raw.trim().chars().filter(|c| *c != '{' && *c != '}').collect();
    PathBuf::from(cleaned)
}

/// Render the selection the way the form's file list shows it.
pub fn selection_summary(files: &[SelectedFile]) -> String {
    if files.is_empty() {
        return NO_FILES.to_string();
    }

    files
        .iter()
        .map(|f| format!("{:<18}{}", f.bucket.label(), display_name(&f.path)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
