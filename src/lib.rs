// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)         cmd::run (handler)
//!                |                     |
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  rwenv.toml, RWENV_* vars |
//!              '-------------+-------------'
//!                            |
//!                 +----------+----------+
//!                 v                     v
//!             core::env            core::process
//!        parse/read/assemble     exec | spawn launcher
//!                 |
//!                 v
//!              display
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod logging;
