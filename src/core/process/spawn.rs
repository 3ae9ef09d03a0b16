// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Child process launch with forwarded output.
//!
//! ```text
//! spawn(program, env_clear + envs)
//!   stdin   inherited
//!   stdout  piped --copy task--> our stdout
//!   stderr  piped --copy task--> our stderr
//! wait child, then copy tasks
//!   --> exit code (128 + signal if killed, Unix)
//! ```

use std::future::Future;
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use super::launcher::{CommandLine, Launcher, resolve_program};
use crate::core::env::container::Environment;
use crate::error::LaunchError;

/// Runs the target program as a child process and waits for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnLauncher;

impl Launcher for SpawnLauncher {
    fn replaces_process(&self) -> bool {
        false
    }

    fn launch(
        &self,
        command: &CommandLine,
        env: &Environment,
    ) -> impl Future<Output = Result<i32, LaunchError>> + Send {
        async move {
            let program = resolve_program(command.program())?;
            debug!(cmd = %command, vars = env.len(), "spawn");

            let mut child = Command::new(&program)
                .args(command.args())
                .env_clear()
                .envs(env.iter())
                .stdin(Stdio::inherit())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .spawn()
                .map_err(|source| LaunchError::SpawnFailed {
                    program: program.clone(),
                    source,
                })?;

            trace!(pid = ?child.id(), "spawned");

            let stdout_handle = child
                .stdout
                .take()
                .map(|out| forward(out, tokio::io::stdout(), "stdout"));
            let stderr_handle = child
                .stderr
                .take()
                .map(|err| forward(err, tokio::io::stderr(), "stderr"));

            let status = child
                .wait()
                .await
                .map_err(|source| LaunchError::WaitFailed {
                    program: program.clone(),
                    source,
                })?;

            await_forwarders(stdout_handle, stderr_handle).await;

            let code = exit_code(status);
            trace!(exit_code = code, "completed");
            Ok(code)
        }
    }
}

/// Copies a child stream to one of our own until EOF.
fn forward<R, W>(mut reader: R, mut writer: W, stream: &'static str) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        use tokio::io::AsyncWriteExt as _;

        if let Err(e) = tokio::io::copy(&mut reader, &mut writer).await {
            warn!(stream, error = %e, "error forwarding stream");
        }
        let _ = writer.flush().await;
    })
}

/// Waits for forwarding tasks to drain.
async fn await_forwarders(
    stdout_handle: Option<JoinHandle<()>>,
    stderr_handle: Option<JoinHandle<()>>,
) {
    if let Some(handle) = stdout_handle {
        let _ = handle.await;
    }
    if let Some(handle) = stderr_handle {
        let _ = handle.await;
    }
}

/// Maps an exit status to a shell-style exit code.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt as _;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    -1
}
