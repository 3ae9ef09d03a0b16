// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for rwenv using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! rwenv [global options] [source options] [launch options] [COMMAND]...
//!
//! no COMMAND  --> print the environment
//! COMMAND     --> run it with the environment
//! ```

pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use clap::{Args, Parser};
use std::path::PathBuf;

/// Run a command with an environment taken from files.
#[derive(Debug, Parser)]
#[command(
    name = "rwenv",
    author,
    version,
    about = "Run command with environment taken from file",
    long_about = "rwenv Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Builds an environment from the shell (-i), env files (-e) and\n\
                  overrides (-o), later sources winning, then replaces itself with\n\
                  COMMAND running in exactly that environment. Without COMMAND the\n\
                  environment is printed instead.",
    after_help = "EXAMPLES:\n\n\
                  \x20 rwenv                          show the current env\n\
                  \x20 rwenv -e .env                  show env built from .env\n\
                  \x20 rwenv -e .env env              run `env` with vars from .env\n\
                  \x20 rwenv -i -e .env -o DEBUG=1 make test\n\n\
                  ENV FILES:\n\n\
                  One NAME=VALUE per line. A value wrapped in double quotes is\n\
                  unwrapped. Lines without '=' are skipped; overrides without '='\n\
                  are an error."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Where variables come from
    #[command(flatten)]
    pub sources: SourceOptions,

    /// How the command is run and the env is shown
    #[command(flatten)]
    pub launch: LaunchOptions,

    /// Command to run, followed by its arguments.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

/// Environment sources, in increasing precedence.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceOptions {
    /// Inherit shell env vars.
    #[arg(short = 'i', long)]
    pub inherit: bool,

    /// Env file to take vars from. Can be specified multiple times;
    /// later files override earlier ones.
    #[arg(short = 'e', long = "env", value_name = "FILE", action = clap::ArgAction::Append)]
    pub files: Vec<PathBuf>,

    /// Additional env var in form of VAR_NAME=VALUE. Can be specified
    /// multiple times; overrides everything else.
    #[arg(short = 'o', long = "override", value_name = "NAME=VALUE", action = clap::ArgAction::Append)]
    pub overrides: Vec<String>,

    /// Only accept [A-Z0-9_]+ variable names in env files and overrides.
    #[arg(short = 's', long)]
    pub strict: bool,
}

/// Launch and listing options.
#[derive(Debug, Clone, Default, Args)]
pub struct LaunchOptions {
    /// Run COMMAND as a child process instead of replacing rwenv with it.
    #[arg(long)]
    pub spawn: bool,

    /// Clip printed values longer than N characters.
    #[arg(long, value_name = "N", conflicts_with = "no_clip")]
    pub clip: Option<usize>,

    /// Print values in full.
    #[arg(long)]
    pub no_clip: bool,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
