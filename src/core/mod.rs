// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment assembly and program launch.
//!
//! ```text
//!              core
//!               |
//!        +------+------+
//!        v             v
//!       env         process
//!        |             |
//!   line/reader    Launcher
//!   assemble       exec | spawn
//!   Environment
//! ```

pub mod env;
pub mod process;
