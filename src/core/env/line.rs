// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `NAME=VALUE` line parsing.
//!
//! ```text
//! "FOO=\"bar\""
//!    split at first '='      --> NoSeparator if none
//!    name empty?             --> EmptyName
//!    rule.accepts(name)?     --> InvalidName
//!    unwrap one "..." pair
//!      --> EnvVar { FOO, bar }
//! ```

use super::types::{EnvVar, NameRule};
use crate::error::LineError;

/// Parses a single line into an [`EnvVar`].
///
/// The first `=` separates name and value, so values may contain `=`.
/// A value wrapped in one pair of double quotes is unwrapped; nothing inside
/// is unescaped.
///
/// # Errors
///
/// Returns a [`LineError`] when the line has no `=`, the name is empty, or
/// the name is rejected by `rule`.
pub fn parse_line(line: &str, rule: NameRule) -> Result<EnvVar, LineError> {
    let (name, value) = line.split_once('=').ok_or(LineError::NoSeparator)?;

    if name.is_empty() {
        return Err(LineError::EmptyName);
    }
    if !rule.accepts(name) {
        return Err(LineError::InvalidName {
            name: name.to_string(),
        });
    }

    Ok(EnvVar::new(name, unquote(value)))
}

/// Removes one surrounding pair of double quotes, if present.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(value)
}
