// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::exec::ExecLauncher;
use super::launcher::{CommandLine, LaunchMode, Launcher, resolve_program};
use super::spawn::SpawnLauncher;
use crate::core::env::container::Environment;
use crate::error::LaunchError;

#[test]
fn test_command_line_from_args() {
    let cmd = CommandLine::from_args(["make", "-j4", "all"]).unwrap();
    assert_eq!(cmd.program(), "make");
    assert_eq!(cmd.args(), ["-j4", "all"]);

    let empty: [&str; 0] = [];
    assert!(matches!(
        CommandLine::from_args(empty),
        Err(LaunchError::EmptyCommand)
    ));
}

#[test]
fn test_command_line_display() {
    let cmd = CommandLine::from_args(["sh", "-c", "echo hi"]).unwrap();
    insta::assert_snapshot!(cmd.to_string(), @r#"sh -c "echo hi""#);
}

#[test]
fn test_launch_mode_display() {
    assert_eq!(LaunchMode::default(), LaunchMode::Exec);
    assert_eq!(LaunchMode::Spawn.to_string(), "spawn");
}

#[test]
fn test_resolve_program_not_found() {
    let err = resolve_program("rwenv-definitely-not-a-real-program").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"executable not found: 'rwenv-definitely-not-a-real-program' (not in PATH)"
    );
}

#[cfg(unix)]
#[test]
fn test_resolve_program_found() {
    let path = resolve_program("sh").expect("sh should be in PATH");
    assert!(path.is_absolute());
}

#[tokio::test]
async fn test_exec_missing_program_returns_error() {
    let cmd = CommandLine::from_args(["rwenv-definitely-not-a-real-program"]).unwrap();
    let err = ExecLauncher
        .launch(&cmd, &Environment::new())
        .await
        .unwrap_err();
    assert!(matches!(err, LaunchError::ProgramNotFound { .. }));
}

#[cfg(unix)]
#[test]
fn test_launcher_replaces_process() {
    assert!(ExecLauncher.replaces_process());
    assert!(!SpawnLauncher.replaces_process());
}

#[cfg(unix)]
#[tokio::test]
async fn test_spawn_passes_only_assembled_env() {
    let mut env = Environment::new();
    env.set("FOO", "bar");

    let cmd = CommandLine::from_args([
        "sh",
        "-c",
        r#"test "$FOO" = bar && test -z "${HOME+set}""#,
    ])
    .unwrap();

    let code = SpawnLauncher.launch(&cmd, &env).await.unwrap();
    assert_eq!(code, 0);
}

#[cfg(unix)]
#[tokio::test]
async fn test_spawn_exit_code() {
    let cmd = CommandLine::from_args(["sh", "-c", "exit 42"]).unwrap();
    let code = SpawnLauncher
        .launch(&cmd, &Environment::new())
        .await
        .unwrap();
    assert_eq!(code, 42);
}

#[cfg(unix)]
#[tokio::test]
async fn test_spawn_killed_by_signal() {
    let cmd = CommandLine::from_args(["sh", "-c", "kill -9 $$"]).unwrap();
    let code = SpawnLauncher
        .launch(&cmd, &Environment::new())
        .await
        .unwrap();
    assert_eq!(code, 128 + 9);
}
