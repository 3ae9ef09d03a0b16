// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings for rwenv.
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. rwenv.toml (cwd, optional)
//! 3. --config FILE (repeatable, required)
//! 4. RWENV_* env vars
//! 5. CLI flags (--spawn, --strict, --clip, --no-clip)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! RWENV_LAUNCH__MODE=spawn      → launch.mode = "spawn"
//! RWENV_DISPLAY__CLIP_AT=80     → display.clip_at = 80
//! RWENV_PARSE__STRICT=true      → parse.strict = true
//! RWENV_DEBUG=1                 → ignored (no such section)
//! ```
//!
//! # Example
//!
//! ```toml
//! [display]
//! clip_at = 120   # 0 disables clipping
//!
//! [launch]
//! mode = "spawn"
//!
//! [parse]
//! strict = true
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

use loader::ConfigLoader;
use types::{DisplaySettings, LaunchSettings, ParseSettings};

/// Name of the optional settings file looked up in the current directory.
pub const DEFAULT_SETTINGS_FILE: &str = "rwenv.toml";

/// Prefix for settings taken from environment variables.
pub const ENV_PREFIX: &str = "RWENV";

/// Complete application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Environment listing options.
    pub display: DisplaySettings,
    /// Program launch options.
    pub launch: LaunchSettings,
    /// Env file parsing options.
    pub parse: ParseSettings,
}

impl Settings {
    /// Top-level tables, as named in TOML and in `RWENV_<SECTION>__<KEY>`.
    pub const SECTIONS: [&'static str; 3] = ["display", "launch", "parse"];

    /// Create a new settings loader.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rwenv::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file_optional("rwenv.toml")
    ///     .with_env_prefix("RWENV")
    ///     .build()?;
    /// # Ok::<(), rwenv::error::ConfigError>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load settings from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Settings` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Settings` structure.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Self::builder().add_toml_str(content).build()
    }

    /// Effective clip threshold for the listing; `None` means no clipping.
    #[must_use]
    pub const fn clip_at(&self) -> Option<usize> {
        match self.display.clip_at {
            0 => None,
            n => Some(n),
        }
    }
}
