// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env file reading.

use std::path::Path;

use crate::error::AssembleError;

/// Reads a whole env file and splits it on `\n`, dropping one `\r` before
/// each line break so CRLF files read like LF files.
///
/// A file ending in a newline yields a trailing empty line; the parser
/// drops it like any other line without `=`.
///
/// # Errors
///
/// Returns [`AssembleError::FileRead`] if the file cannot be read or is not
/// valid UTF-8.
pub fn read_lines(path: &Path) -> Result<Vec<String>, AssembleError> {
    let content = std::fs::read_to_string(path).map_err(|source| AssembleError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_owned())
        .collect())
}
