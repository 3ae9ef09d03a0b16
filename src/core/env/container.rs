// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The assembled environment.
//!
//! ```text
//! Environment
//! vars: BTreeMap<String, String>   (sorted, last insert wins)
//! to_env_list() --> ["NAME=VALUE", ...]
//! ```

use std::collections::BTreeMap;

use super::types::EnvVar;

/// A set of environment variables.
///
/// Names are case-sensitive. Iteration is sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub const fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }

    /// Sets a variable, replacing any previous value.
    ///
    /// Returns the replaced value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(name.into(), value.into())
    }

    /// Inserts a parsed variable, replacing any previous value.
    pub fn insert(&mut self, var: EnvVar) -> Option<String> {
        let (name, value) = var.into_parts();
        self.set(name, value)
    }

    /// Gets a variable value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Returns an iterator over variables, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the variables as `NAME=VALUE` strings, sorted by name.
    #[must_use]
    pub fn to_env_list(&self) -> Vec<String> {
        self.vars.iter().map(|(k, v)| format!("{k}={v}")).collect()
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

impl Extend<EnvVar> for Environment {
    fn extend<I: IntoIterator<Item = EnvVar>>(&mut self, iter: I) {
        for var in iter {
            self.insert(var);
        }
    }
}

impl FromIterator<EnvVar> for Environment {
    fn from_iter<I: IntoIterator<Item = EnvVar>>(iter: I) -> Self {
        let mut env = Self::new();
        env.extend(iter);
        env
    }
}
