// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options.
//!
//! ```text
//! --config FILE     ← Additional settings files (can repeat)
//! --verbose         ← Report every var read (console level >= info)
//! --log-level N     ← Console verbosity (0-5)
//! --log-file FILE   ← Also log to FILE (trace level)
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global options.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Print var reading info.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Path to additional TOML settings file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Console level after applying `--verbose`.
    ///
    /// `--verbose` raises the level to at least info but never lowers it.
    #[must_use]
    pub fn console_level(&self) -> LogLevel {
        let level = self
            .log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or_default();
        if self.verbose {
            level.max(LogLevel::INFO)
        } else {
            level
        }
    }
}
