// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Write as _;

use super::loader::SettingsSource;
use super::{ConfigLoader, ENV_PREFIX, Settings};
use crate::core::env::types::NameRule;
use crate::core::process::launcher::LaunchMode;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    insta::assert_yaml_snapshot!(settings, @r"
    display:
      clip_at: 100
    launch:
      mode: exec
    parse:
      strict: false
    ");
}

#[test]
fn test_parse_full_settings() {
    let toml = r#"
[display]
clip_at = 40

[launch]
mode = "spawn"

[parse]
strict = true
"#;
    let settings = Settings::parse(toml).unwrap();
    assert_eq!(settings.display.clip_at, 40);
    assert_eq!(settings.launch.mode, LaunchMode::Spawn);
    assert_eq!(settings.parse.name_rule(), NameRule::Strict);
}

#[test]
fn test_parse_partial_settings_keeps_defaults() {
    let settings = Settings::parse("[launch]\nmode = \"spawn\"\n").unwrap();
    assert_eq!(settings.display.clip_at, 100);
    assert!(!settings.parse.strict);
}

#[test]
fn test_clip_at_zero_disables_clipping() {
    let settings = Settings::parse("[display]\nclip_at = 0\n").unwrap();
    assert_eq!(settings.clip_at(), None);
    assert_eq!(Settings::default().clip_at(), Some(100));
}

#[test]
fn test_unknown_keys_rejected() {
    assert!(Settings::parse("[display]\nwidth = 3\n").is_err());
    assert!(Settings::parse("[nope]\nx = 1\n").is_err());
    assert!(Settings::parse("[launch]\nmode = \"fork\"\n").is_err());
}

#[test]
fn test_missing_required_file() {
    let err = Settings::from_file("/nonexistent/rwenv/settings.toml").unwrap_err();
    assert!(err.to_string().starts_with("failed to load settings"));
}

#[test]
fn test_file_then_env_precedence() {
    let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
    writeln!(file, "[display]\nclip_at = 60\n[launch]\nmode = \"spawn\"").unwrap();

    let mut vars = config::Map::new();
    vars.insert("RWENV_DISPLAY__CLIP_AT".to_string(), "80".to_string());
    vars.insert("RWENV_PARSE__STRICT".to_string(), "true".to_string());
    vars.insert("UNRELATED".to_string(), "x".to_string());

    let loader = ConfigLoader::new().add_toml_file(file.path());
    assert_eq!(
        loader.sources(),
        [SettingsSource::Required(file.path().to_path_buf())]
    );

    let settings = loader
        .with_env_prefix(ENV_PREFIX)
        .with_env_source(vars)
        .build()
        .unwrap();

    assert_eq!(settings.display.clip_at, 80);
    assert_eq!(settings.launch.mode, LaunchMode::Spawn);
    assert!(settings.parse.strict);
}

#[test]
fn test_source_display() {
    let source = SettingsSource::Required("conf/rwenv.toml".into());
    insta::assert_snapshot!(source.to_string(), @"[file] conf/rwenv.toml");
    insta::assert_snapshot!(SettingsSource::Inline.to_string(), @"[string] <inline>");
}

#[test]
fn test_optional_file_tracking() {
    let loader = ConfigLoader::new()
        .add_toml_file_optional("/nonexistent/rwenv/rwenv.toml")
        .add_toml_str("[parse]\nstrict = false\n");
    assert_eq!(loader.sources(), [SettingsSource::Inline]);
    assert!(loader.build().is_ok());
}

#[test]
fn test_stray_prefixed_env_vars_ignored() {
    let mut vars = config::Map::new();
    vars.insert("RWENV_DEBUG".to_string(), "1".to_string());
    vars.insert("RWENV_LAUNCH_MODE".to_string(), "spawn".to_string());
    vars.insert("RWENV_LAUNCH__MODE".to_string(), "spawn".to_string());

    let settings = ConfigLoader::new()
        .with_env_prefix(ENV_PREFIX)
        .with_env_source(vars)
        .build()
        .unwrap();

    assert_eq!(settings.launch.mode, LaunchMode::Spawn);
}

#[test]
fn test_unknown_key_in_known_section_rejected() {
    let mut vars = config::Map::new();
    vars.insert("RWENV_DISPLAY__WIDTH".to_string(), "3".to_string());

    let result = ConfigLoader::new()
        .with_env_prefix(ENV_PREFIX)
        .with_env_source(vars)
        .build();

    assert!(result.is_err());
}

#[test]
fn test_sections_match_settings_tables() {
    let value = serde_json::to_value(Settings::default()).unwrap();
    let mut tables: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    tables.sort();
    assert_eq!(tables, Settings::SECTIONS);
}
