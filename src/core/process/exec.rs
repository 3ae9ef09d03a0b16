// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process image replacement.
//!
//! Unix only; elsewhere [`ExecLauncher`] behaves like
//! [`SpawnLauncher`](super::spawn::SpawnLauncher).

use std::future::Future;
#[cfg(unix)]
use std::path::Path;
use tracing::debug;

use super::launcher::{CommandLine, Launcher, resolve_program};
use crate::core::env::container::Environment;
use crate::error::LaunchError;

/// Replaces the current process with the target program.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecLauncher;

impl Launcher for ExecLauncher {
    fn replaces_process(&self) -> bool {
        cfg!(unix)
    }

    fn launch(
        &self,
        command: &CommandLine,
        env: &Environment,
    ) -> impl Future<Output = Result<i32, LaunchError>> + Send {
        async move {
            let program = resolve_program(command.program())?;
            debug!(cmd = %command, vars = env.len(), "exec");

            #[cfg(unix)]
            let result = Err(exec(&program, command, env));

            #[cfg(not(unix))]
            let result = {
                let _ = program;
                super::spawn::SpawnLauncher.launch(command, env).await
            };

            result
        }
    }
}

/// Calls `execve`; only returns if it failed.
#[cfg(unix)]
fn exec(program: &Path, command: &CommandLine, env: &Environment) -> LaunchError {
    use std::os::unix::process::CommandExt as _;

    let source = std::process::Command::new(program)
        .arg0(command.program())
        .args(command.args())
        .env_clear()
        .envs(env.iter())
        .exec();

    LaunchError::ExecFailed {
        program: program.to_path_buf(),
        source,
    }
}
