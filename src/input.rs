use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name the cleaner looks for when no input path is given.
pub const DEFAULT_FILE_NAME: &str = "emails.csv";

const DEFAULT_FOLDER: &str = "Email Cleaner";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("could not determine the user's home directory")]
    HomeDirUnavailable,
    #[error("failed to read the email list: {0}")]
    Io(#[from] io::Error),
}

/// Resolves the default input location:
/// `<home>/Documents/Email Cleaner/emails.csv`.
pub fn default_input_path() -> Result<PathBuf, InputError> {
    let home = env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map_err(|_| InputError::HomeDirUnavailable)?;

    Ok(PathBuf::from(home)
        .join("Documents")
        .join(DEFAULT_FOLDER)
        .join(DEFAULT_FILE_NAME))
}

/// Reads candidate addresses from a comma-separated file.
///
/// Every non-empty cell across all rows is one candidate; the reader does
/// not assume one address per row. Cells are passed through verbatim (no
/// trimming), so a padded address reaches the validator unchanged and is
/// counted invalid there.
pub fn read_emails(path: &Path) -> Result<Vec<String>, InputError> {
    let content = fs::read_to_string(path)?;
    Ok(flatten_cells(&content))
}

fn flatten_cells(content: &str) -> Vec<String> {
    content
        .lines()
        .flat_map(|line| line.split(','))
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}
