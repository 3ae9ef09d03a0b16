// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run handler
//!   print env | launch COMMAND
//! ```

pub mod run;
