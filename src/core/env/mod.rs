// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment assembly.
//!
//! # Architecture
//!
//! ```text
//! AssemblyConfig { inherit, files, overrides, verbose, rule }
//!        |
//!        v
//! assemble()
//!   1. inherited process env   (malformed or non-UTF-8: skip)
//!   2. env files, in order     (unreadable: fatal, malformed line: skip)
//!   3. overrides, in order     (malformed: fatal)
//!        |
//!        v
//! Environment (BTreeMap<String, String>, last writer wins)
//! ```

use std::ffi::OsString;

pub mod assemble;
pub mod container;
pub mod line;
pub mod reader;
pub mod types;


/// Captures the current process environment as raw `NAME=VALUE` entries.
///
/// Entries keep their bytes; the assembler decides what to do with ones that
/// are not UTF-8.
#[must_use]
pub fn current_env() -> Vec<OsString> {
    std::env::vars_os()
        .map(|(mut entry, value)| {
            entry.push("=");
            entry.push(value);
            entry
        })
        .collect()
}

/// Captures the current process environment for listing, without line parsing.
///
/// Non-UTF-8 names or values are converted lossily.
#[must_use]
pub fn current_environment() -> container::Environment {
    container::Environment::from_map(
        std::env::vars_os()
            .map(|(key, value)| {
                (
                    key.to_string_lossy().into_owned(),
                    value.to_string_lossy().into_owned(),
                )
            })
            .collect(),
    )
}
