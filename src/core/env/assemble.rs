// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment assembly from inherited variables, env files and overrides.
//!
//! ```text
//! Precedence (low → high)
//! 1. inherited process env   (-i)
//! 2. env files, in order     (-e a.env -e b.env: b wins over a)
//! 3. overrides, in order     (-o K=1 -o K=2: 2 wins)
//! ```

use bon::Builder;
use std::ffi::OsStr;
use std::path::PathBuf;
use tracing::{info, warn};

use super::container::Environment;
use super::line::parse_line;
use super::reader::read_lines;
use super::types::NameRule;
use crate::error::AssembleError;

/// Inputs for [`assemble`].
#[derive(Debug, Clone, Default, Builder)]
pub struct AssemblyConfig {
    /// Seed from the invoking process's environment.
    #[builder(default)]
    inherit: bool,
    /// Env files, lowest precedence first.
    #[builder(default)]
    files: Vec<PathBuf>,
    /// Raw `NAME=VALUE` overrides, lowest precedence first.
    #[builder(default)]
    overrides: Vec<String>,
    /// Log every variable set and every line skipped.
    #[builder(default)]
    verbose: bool,
    /// Naming rule for env file lines and overrides.
    #[builder(default)]
    rule: NameRule,
}

impl AssemblyConfig {
    #[must_use]
    pub const fn inherit(&self) -> bool {
        self.inherit
    }

    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    #[must_use]
    pub fn overrides(&self) -> &[String] {
        &self.overrides
    }

    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    #[must_use]
    pub const fn rule(&self) -> NameRule {
        self.rule
    }

    /// Returns true if no source is configured at all.
    #[must_use]
    pub fn has_no_sources(&self) -> bool {
        !self.inherit && self.files.is_empty() && self.overrides.is_empty()
    }
}

/// Assembles the environment, inheriting from the current process if asked.
///
/// # Errors
///
/// See [`assemble_with`].
pub fn assemble(config: &AssemblyConfig) -> Result<Environment, AssembleError> {
    let inherited = if config.inherit() {
        super::current_env()
    } else {
        Vec::new()
    };
    assemble_with(config, inherited)
}

/// Assembles the environment with explicitly supplied inherited entries.
///
/// `inherited` is only consulted when the config asks to inherit. Entries are
/// `NAME=VALUE` strings and always parse with the permissive rule. Entries
/// that are not valid UTF-8 are skipped rather than altered.
///
/// # Errors
///
/// Returns [`AssembleError::FileRead`] if an env file cannot be read, or
/// [`AssembleError::InvalidOverride`] if an override is malformed. Nothing is
/// returned on error, not even the partially assembled environment.
pub fn assemble_with<I, S>(
    config: &AssemblyConfig,
    inherited: I,
) -> Result<Environment, AssembleError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let verbose = config.verbose();
    let mut env = Environment::new();

    if config.inherit() {
        if verbose {
            info!("inheriting env vars");
        }
        for entry in inherited {
            let entry = entry.as_ref();
            let Some(text) = entry.to_str() else {
                if verbose {
                    warn!(entry = ?entry, "skipping non-UTF-8 inherited env var");
                }
                continue;
            };
            match parse_line(text, NameRule::Permissive) {
                Ok(var) => {
                    if verbose {
                        info!(name = var.name(), value = ?var.value(), "set env");
                    }
                    env.insert(var);
                }
                Err(e) => {
                    if verbose {
                        warn!(entry = ?text, error = %e, "incorrect inherited env var");
                    }
                }
            }
        }
    }

    for path in config.files() {
        if verbose {
            info!(file = %path.display(), "reading env file");
        }
        for line in read_lines(path)? {
            match parse_line(&line, config.rule()) {
                Ok(var) => {
                    if verbose {
                        info!(name = var.name(), value = ?var.value(), "set env");
                    }
                    env.insert(var);
                }
                Err(e) => {
                    if verbose {
                        info!(line = ?line, reason = %e, "ignoring line");
                    }
                }
            }
        }
    }

    for raw in config.overrides() {
        let var =
            parse_line(raw, config.rule()).map_err(|reason| AssembleError::InvalidOverride {
                value: raw.clone(),
                reason,
            })?;
        if verbose {
            info!(name = var.name(), value = ?var.value(), "override");
        }
        env.insert(var);
    }

    Ok(env)
}
