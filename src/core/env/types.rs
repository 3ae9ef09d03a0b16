// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable parsing.
//!
//! # Architecture
//!
//! ```text
//! EnvVar:   name + value, Display as NAME=VALUE
//! NameRule: Permissive (any non-empty name) | Strict ([A-Z0-9_]+)
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Names accepted by [`NameRule::Strict`].
static STRICT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9_]+$").expect("strict name pattern is valid"));

/// A single `NAME=VALUE` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnvVar {
    name: String,
    value: String,
}

impl EnvVar {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Splits into `(name, value)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.name, self.value)
    }
}

impl std::fmt::Display for EnvVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Which variable names the line parser accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameRule {
    /// Any non-empty name.
    #[default]
    Permissive,
    /// Only upper-case ASCII letters, digits and underscores.
    Strict,
}

impl NameRule {
    /// Returns true if `name` is acceptable under this rule.
    ///
    /// Emptiness is checked by the parser, not here.
    #[must_use]
    pub fn accepts(self, name: &str) -> bool {
        match self {
            Self::Permissive => true,
            Self::Strict => STRICT_NAME.is_match(name),
        }
    }
}
