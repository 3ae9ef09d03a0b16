// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::Cli;
use crate::logging::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_no_args() {
    let cli = Cli::try_parse_from(["rwenv"]).unwrap();
    assert!(cli.command.is_empty());
    assert!(cli.sources.files.is_empty());
    assert!(!cli.sources.inherit);
}

#[test]
fn test_parse_repeated_sources_keep_order() {
    let cli = Cli::try_parse_from([
        "rwenv", "-e", "a.env", "--env", "b.env", "-o", "X=1", "--override", "X=2", "-i",
    ])
    .unwrap();
    assert_eq!(
        cli.sources.files,
        [PathBuf::from("a.env"), PathBuf::from("b.env")]
    );
    assert_eq!(cli.sources.overrides, ["X=1", "X=2"]);
    assert!(cli.sources.inherit);
}

#[test]
fn test_parse_command_with_hyphenated_args() {
    let cli = Cli::try_parse_from(["rwenv", "-v", "-e", ".env", "ls", "-la", "--color=never"])
        .unwrap();
    assert!(cli.global.verbose);
    assert_eq!(cli.command, ["ls", "-la", "--color=never"]);
}

#[test]
fn test_parse_double_dash() {
    let cli = Cli::try_parse_from(["rwenv", "--", "-weird-program", "-e"]).unwrap();
    assert_eq!(cli.command, ["-weird-program", "-e"]);
    assert!(cli.sources.files.is_empty());
}

#[test]
fn test_parse_combined_short_flags() {
    let cli = Cli::try_parse_from(["rwenv", "-iv", "env"]).unwrap();
    assert!(cli.sources.inherit);
    assert!(cli.global.verbose);
    assert_eq!(cli.command, ["env"]);
}

#[test]
fn test_parse_launch_options() {
    let cli = Cli::try_parse_from(["rwenv", "--spawn", "--clip", "40", "-s"]).unwrap();
    assert!(cli.launch.spawn);
    assert_eq!(cli.launch.clip, Some(40));
    assert!(cli.sources.strict);
}

#[test]
fn test_clip_conflicts_with_no_clip() {
    assert!(Cli::try_parse_from(["rwenv", "--clip", "40", "--no-clip"]).is_err());
}

#[test]
fn test_log_level_range() {
    assert!(Cli::try_parse_from(["rwenv", "-l", "6"]).is_err());
    let cli = Cli::try_parse_from(["rwenv", "-l", "4"]).unwrap();
    assert_eq!(cli.global.console_level(), LogLevel::DEBUG);
}

#[test]
fn test_verbose_raises_console_level() {
    let cli = Cli::try_parse_from(["rwenv"]).unwrap();
    assert_eq!(cli.global.console_level(), LogLevel::WARN);

    let cli = Cli::try_parse_from(["rwenv", "-v"]).unwrap();
    assert_eq!(cli.global.console_level(), LogLevel::INFO);

    let cli = Cli::try_parse_from(["rwenv", "-v", "-l", "5"]).unwrap();
    assert_eq!(cli.global.console_level(), LogLevel::TRACE);
}

#[test]
fn test_help_and_version() {
    let err = Cli::try_parse_from(["rwenv", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    let err = Cli::try_parse_from(["rwenv", "-V"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}

#[test]
fn test_cli_debug_assert() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
