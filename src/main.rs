// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Settings --> cmd::run
//!   print env | exec COMMAND | spawn COMMAND
//! ```

use std::process::ExitCode;

use rwenv::cli::{self, Cli};
use rwenv::cmd::run::run_command;
use rwenv::config::loader::ConfigLoader;
use rwenv::config::{DEFAULT_SETTINGS_FILE, ENV_PREFIX, Settings};
use rwenv::error::RwenvResult;
use rwenv::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli);
    let mut log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match load_settings(&cli) {
        Ok(settings) => run_command(&cli, &settings, &mut log_guard).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(code) => exit_code(code),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build_log_config(cli: &Cli) -> LogConfig {
    LogConfig::builder()
        .with_console_level(cli.global.console_level())
        .maybe_with_log_file(cli.global.log_file.clone())
        .build()
}

fn build_config_loader(cli: &Cli) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional(DEFAULT_SETTINGS_FILE);
    for path in &cli.global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_settings(cli: &Cli) -> RwenvResult<Settings> {
    let loader = build_config_loader(cli);
    for source in loader.sources() {
        tracing::debug!(%source, "settings source");
    }
    Ok(loader.build()?)
}

/// Narrows a child's exit code to what a process can return.
fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
