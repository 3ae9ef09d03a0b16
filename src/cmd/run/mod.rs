// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The rwenv command: assemble, then print or launch.
//!
//! ```text
//! Cli + Settings --> AssemblyConfig
//!        |
//!   COMMAND given?
//!    no  --> sources? assemble() : current env --> display
//!    yes --> assemble() --> Launcher (exec | spawn) --> exit code
//! ```

use std::io::ErrorKind;
use tracing::debug;

use crate::cli::Cli;
use crate::config::Settings;
use crate::core::env::assemble::{AssemblyConfig, assemble};
use crate::core::env::container::Environment;
use crate::core::env::current_environment;
use crate::core::env::types::NameRule;
use crate::core::process::exec::ExecLauncher;
use crate::core::process::launcher::{CommandLine, LaunchMode, Launcher};
use crate::core::process::spawn::SpawnLauncher;
use crate::display::write_env;
use crate::error::RwenvResult;
use crate::logging::LogGuard;

/// Builds the assembly inputs from CLI flags and settings.
///
/// `--strict` turns strict naming on; it cannot turn off `parse.strict`.
#[must_use]
pub fn assembly_config(cli: &Cli, settings: &Settings) -> AssemblyConfig {
    let rule = if cli.sources.strict {
        NameRule::Strict
    } else {
        settings.parse.name_rule()
    };

    AssemblyConfig::builder()
        .inherit(cli.sources.inherit)
        .files(cli.sources.files.clone())
        .overrides(cli.sources.overrides.clone())
        .verbose(cli.global.verbose)
        .rule(rule)
        .build()
}

/// Effective launch mode; `--spawn` wins over `launch.mode`.
#[must_use]
pub const fn launch_mode(cli: &Cli, settings: &Settings) -> LaunchMode {
    if cli.launch.spawn {
        LaunchMode::Spawn
    } else {
        settings.launch.mode
    }
}

/// Effective clip threshold for the listing; `None` disables clipping.
#[must_use]
pub const fn clip_at(cli: &Cli, settings: &Settings) -> Option<usize> {
    if cli.launch.no_clip {
        return None;
    }
    match cli.launch.clip {
        Some(0) => None,
        Some(n) => Some(n),
        None => settings.clip_at(),
    }
}

/// Environment shown when no command is given.
///
/// With no source configured this is the invoking environment, unparsed.
///
/// # Errors
///
/// Returns an error if assembly fails.
pub fn display_environment(config: &AssemblyConfig) -> RwenvResult<Environment> {
    if config.has_no_sources() {
        return Ok(current_environment());
    }
    Ok(assemble(config)?)
}

/// Main handler for rwenv.
///
/// Returns the exit code to report. In exec mode a successful launch never
/// returns.
///
/// # Errors
///
/// Returns an error if assembly fails, the program cannot be found or
/// launched, or the listing cannot be written.
pub async fn run_command(
    cli: &Cli,
    settings: &Settings,
    log_guard: &mut LogGuard,
) -> RwenvResult<i32> {
    let config = assembly_config(cli, settings);

    if cli.command.is_empty() {
        let env = display_environment(&config)?;
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = write_env(&mut stdout, env.iter(), clip_at(cli, settings))
            && e.kind() != ErrorKind::BrokenPipe
        {
            return Err(e.into());
        }
        return Ok(0);
    }

    let env = assemble(&config)?;
    let command = CommandLine::from_args(cli.command.iter().cloned())?;
    let mode = launch_mode(cli, settings);
    debug!(%mode, vars = env.len(), "launching");

    match mode {
        LaunchMode::Exec => launch_with(&ExecLauncher, &command, &env, log_guard).await,
        LaunchMode::Spawn => launch_with(&SpawnLauncher, &command, &env, log_guard).await,
    }
}

async fn launch_with<L: Launcher>(
    launcher: &L,
    command: &CommandLine,
    env: &Environment,
    log_guard: &mut LogGuard,
) -> RwenvResult<i32> {
    if launcher.replaces_process() {
        log_guard.flush();
    }
    Ok(launcher.launch(command, env).await?)
}
