use crate::error::{Result, SyncError};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const DEFAULT_TITLES_FILE: &str = "titles.txt";

/// Reads one title per line, dropping blank lines and keeping file order.
pub fn read_titles(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SyncError::InputNotFound(path.to_path_buf()),
        _ => SyncError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    Ok(parse_titles(&contents))
}

pub fn parse_titles(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
