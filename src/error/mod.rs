// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            RwenvError (~24 bytes)
//!                    |
//!     +--------+-----+-----+--------+
//!     |        |           |        |
//!     v        v           v        v
//!  Assemble  Launch      Config     Io
//!    Box      Box         Box       Box
//!
//! Sub-errors (unboxed internally):
//!   Line      NoSeparator, EmptyName, InvalidName  (skipped, never fatal)
//!   Assemble  FileRead, InvalidOverride
//!   Launch    ProgramNotFound, ExecFailed, SpawnFailed
//!   Config    Load
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`RwenvError`].
pub type RwenvResult<T> = std::result::Result<T, RwenvError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum RwenvError {
    /// Environment assembly failed.
    #[error("assembly error: {0}")]
    Assemble(#[from] Box<AssembleError>),

    /// Program lookup or launch failed.
    #[error("launch error: {0}")]
    Launch(#[from] Box<LaunchError>),

    /// Settings could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for RwenvError {
                fn from(err: $error) -> Self {
                    RwenvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    AssembleError => Assemble,
    LaunchError => Launch,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Line Errors ---

/// Reasons a `NAME=VALUE` line cannot be split into a variable.
///
/// These are the "malformed line" cases. Inherited entries and env file lines
/// that fail with one of these are skipped; overrides turn them into
/// [`AssembleError::InvalidOverride`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// The line has no `=` separator.
    #[error("no equal sign found")]
    NoSeparator,

    /// The line starts with `=`.
    #[error("variable name is empty")]
    EmptyName,

    /// The name does not match the strict naming rule.
    #[error("variable name '{name}' does not match [A-Z0-9_]+")]
    InvalidName { name: String },
}

// --- Assembly Errors ---

/// Fatal errors while assembling an environment.
#[derive(Debug, Error)]
pub enum AssembleError {
    /// An env file could not be read.
    #[error("failed to read env file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An override given on the command line is malformed.
    #[error("invalid override '{value}': {reason}")]
    InvalidOverride {
        value: String,
        #[source]
        reason: LineError,
    },
}

// --- Launch Errors ---

/// Errors while resolving or launching the target program.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// No command was given.
    #[error("no command given")]
    EmptyCommand,

    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ProgramNotFound { name: String },

    /// Replacing the process image failed.
    #[error("failed to exec '{}': {source}", .program.display())]
    ExecFailed {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Spawning a child process failed.
    #[error("failed to spawn '{}': {source}", .program.display())]
    SpawnFailed {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Waiting on the child failed.
    #[error("failed waiting for '{}': {source}", .program.display())]
    WaitFailed {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Settings-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings sources could not be read or merged.
    #[error("failed to load settings: {message}")]
    Load { message: String },
}

#[cfg(test)]
mod tests;
