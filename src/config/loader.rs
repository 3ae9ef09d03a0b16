// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered settings loading.
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional("rwenv.toml")   missing: ignored
//!   .add_toml_file(--config FILE)           missing: error
//!   .add_toml_str(...)                      tests, inline settings
//!   .with_env_prefix("RWENV")               RWENV_SECTION__KEY, read last
//!                                           (other RWENV_* vars ignored)
//!        |
//!        v
//!    build() --> Settings
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{ConfigBuilder, File, FileFormat, Map};
use tracing::trace;

use super::Settings;
use crate::error::ConfigError;

/// A TOML source that takes part in the merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    /// `--config FILE`; must exist.
    Required(PathBuf),
    /// The settings file in the current directory, present at load time.
    Optional(PathBuf),
    /// Settings given as a string.
    Inline,
}

impl fmt::Display for SettingsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(path) => write!(f, "[file] {}", path.display()),
            Self::Optional(path) => write!(f, "[optional] {}", path.display()),
            Self::Inline => write!(f, "[string] <inline>"),
        }
    }
}

/// Builder that merges settings sources in the order they are added.
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    env_source: Option<Map<String, String>>,
    sources: Vec<SettingsSource>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            env_source: None,
            sources: Vec::new(),
        }
    }

    /// Adds a TOML file that must exist when `build()` runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        self.with_toml(
            File::from(path).format(FileFormat::Toml).required(true),
            SettingsSource::Required(path.to_path_buf()),
        )
    }

    /// Adds a TOML file that is skipped if absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        let source = File::from(path).format(FileFormat::Toml).required(false);
        if path.exists() {
            return self.with_toml(source, SettingsSource::Optional(path.to_path_buf()));
        }
        self.builder = self.builder.add_source(source);
        self
    }

    #[must_use]
    pub fn add_toml_str(self, content: &str) -> Self {
        self.with_toml(
            File::from_str(content, FileFormat::Toml),
            SettingsSource::Inline,
        )
    }

    /// Reads `PREFIX_SECTION__KEY` variables from the process environment.
    ///
    /// Only sections that exist in [`Settings`] are read, so unrelated
    /// variables sharing the prefix do not break loading.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Reads prefixed variables from `vars` instead of the process environment.
    #[must_use]
    pub fn with_env_source(mut self, vars: Map<String, String>) -> Self {
        self.env_source = Some(vars);
        self
    }

    /// Merges all sources into [`Settings`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError::Load`] if a required file is missing, a file is
    /// not valid TOML, or the merged result does not fit [`Settings`] (unknown
    /// keys included).
    pub fn build(self) -> Result<Settings, ConfigError> {
        let mut builder = self.builder;
        if let Some(prefix) = &self.env_prefix {
            let vars = self.env_source.unwrap_or_else(process_vars);
            builder = builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(settings_vars(prefix, vars))),
            );
        }

        builder
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(|e| ConfigError::Load {
                message: e.to_string(),
            })
    }

    /// Sources that contribute to the merge, in order.
    #[must_use]
    pub fn sources(&self) -> &[SettingsSource] {
        &self.sources
    }

    fn with_toml<S>(mut self, file: File<S, FileFormat>, record: SettingsSource) -> Self
    where
        File<S, FileFormat>: config::Source + Send + Sync + 'static,
    {
        self.builder = self.builder.add_source(file);
        self.sources.push(record);
        self
    }
}

/// UTF-8 variables of the current process.
fn process_vars() -> Map<String, String> {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

/// Keeps the variables that address a known settings section.
fn settings_vars(prefix: &str, vars: Map<String, String>) -> Map<String, String> {
    let heads: Vec<String> = Settings::SECTIONS
        .iter()
        .map(|section| format!("{prefix}_{section}__").to_ascii_lowercase())
        .collect();

    vars.into_iter()
        .filter(|(key, _)| {
            let key = key.to_ascii_lowercase();
            let known = heads.iter().any(|head| key.starts_with(head.as_str()));
            if !known && key.starts_with(&format!("{}_", prefix.to_ascii_lowercase())) {
                trace!(key = %key, "ignoring variable outside settings sections");
            }
            known
        })
        .collect()
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
