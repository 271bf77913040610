//! Where rendered notes end up: the console or a file.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::error::Result;

/// Used when a requested file name has nothing usable left after sanitizing.
pub const DEFAULT_FILE_NAME: &str = "notes.txt";

/// Keeps ASCII letters, digits, `-`, `_` and `.`, dropping everything else.
/// Falls back to [`DEFAULT_FILE_NAME`] for names that end up empty or all dots.
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect();

    if cleaned.chars().all(|c| c == '.') {
        DEFAULT_FILE_NAME.to_string()
    } else {
        cleaned
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Destination {
    #[default]
    Console,
    File(PathBuf),
}

impl Destination {
    /// Builds a file destination from a user-typed name. Empty input means console.
    pub fn from_user_input(name: &str) -> Self {
        if name.trim().is_empty() {
            Destination::Console
        } else {
            Destination::File(PathBuf::from(sanitize_filename(name)))
        }
    }

    /// Prints to stdout or writes the file, with a trailing newline.
    pub fn write(&self, rendered: &str) -> Result<()> {
        match self {
            Destination::Console => println!("{}", rendered),
            Destination::File(path) => {
                fs::write(path, format!("{}\n", rendered))?;
                info!(path = %path.display(), bytes = rendered.len() + 1, "wrote notes");
            }
        }
        Ok(())
    }
}
