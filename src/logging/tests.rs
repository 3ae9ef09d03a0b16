// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_range() {
    assert_eq!(LogLevel::from_u8(0), Some(LogLevel::SILENT));
    assert_eq!(LogLevel::from_u8(5), Some(LogLevel::TRACE));
    assert_eq!(LogLevel::from_u8(6), None);
    assert_eq!(LogLevel::default(), LogLevel::WARN);
}

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<_> = (0..=5)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    assert_eq!(filters, ["off", "error", "warn", "info", "debug", "trace"]);
}

#[test]
fn test_log_level_ordering() {
    assert!(LogLevel::INFO > LogLevel::WARN);
    assert_eq!(LogLevel::WARN.max(LogLevel::INFO), LogLevel::INFO);
    assert_eq!(LogLevel::DEBUG.max(LogLevel::INFO), LogLevel::DEBUG);
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::INFO)
        .with_log_file("out/rwenv.log")
        .build();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.log_file(), Some(Path::new("out/rwenv.log")));
}
