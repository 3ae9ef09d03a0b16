// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Launcher interface, command line and program lookup.
//!
//! ```text
//! CommandLine::from_args(["make", "-j4"])
//!        |
//!        v
//! resolve_program("make") --which--> /usr/bin/make
//!        |
//!        v
//! Launcher::launch(&CommandLine, &Environment)
//!   ExecLauncher   replaces the process, returns only on failure
//!   SpawnLauncher  child + forwarded output, returns its exit code
//! ```

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::path::PathBuf;
use tracing::debug;

use crate::core::env::container::Environment;
use crate::error::LaunchError;

/// How the target program is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchMode {
    /// Replace the current process image.
    #[default]
    Exec,
    /// Run as a child and wait for it.
    Spawn,
}

impl std::fmt::Display for LaunchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exec => write!(f, "exec"),
            Self::Spawn => write!(f, "spawn"),
        }
    }
}

/// Program name plus its arguments, exactly as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    /// Builds a command line from `argv`, whose first element is the program.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::EmptyCommand`] if `argv` is empty.
    pub fn from_args<I, S>(argv: I) -> Result<Self, LaunchError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().ok_or(LaunchError::EmptyCommand)?;
        Ok(Self {
            program,
            args: argv.collect(),
        })
    }

    /// The program as typed, also used as `argv[0]`.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(' ') {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Resolves a program on the invoking process's `PATH`.
///
/// Names containing a path separator are checked directly.
///
/// # Errors
///
/// Returns [`LaunchError::ProgramNotFound`] if no executable is found.
pub fn resolve_program(program: &str) -> Result<PathBuf, LaunchError> {
    let path = which::which(program).map_err(|_| LaunchError::ProgramNotFound {
        name: program.to_string(),
    })?;
    debug!(program, path = %path.display(), "resolved");
    Ok(path)
}

/// Runs a program with an assembled environment.
///
/// The launched program sees exactly `env`; nothing is inherited implicitly.
pub trait Launcher {
    /// Returns true if a successful launch never returns to the caller.
    fn replaces_process(&self) -> bool;

    /// Launches `command` with `env`, returning the program's exit code.
    fn launch(
        &self,
        command: &CommandLine,
        env: &Environment,
    ) -> impl Future<Output = Result<i32, LaunchError>> + Send;
}
