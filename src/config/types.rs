// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings sections.
//!
//! ```text
//! Settings
//!   [display] clip_at
//!   [launch]  mode = exec | spawn
//!   [parse]   strict
//! ```

use serde::{Deserialize, Serialize};

use crate::core::env::types::NameRule;
use crate::core::process::launcher::LaunchMode;
use crate::display::DEFAULT_CLIP_AT;

/// `[display]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySettings {
    /// Values longer than this many characters are clipped; 0 disables.
    pub clip_at: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            clip_at: DEFAULT_CLIP_AT,
        }
    }
}

/// `[launch]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaunchSettings {
    pub mode: LaunchMode,
}

/// `[parse]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseSettings {
    /// Only accept `[A-Z0-9_]+` names in env files and overrides.
    pub strict: bool,
}

impl ParseSettings {
    #[must_use]
    pub const fn name_rule(&self) -> NameRule {
        if self.strict {
            NameRule::Strict
        } else {
            NameRule::Permissive
        }
    }
}
