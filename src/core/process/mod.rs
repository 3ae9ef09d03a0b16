// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Launching the target program.
//!
//! ```text
//! Launcher (trait)
//!   ExecLauncher   execve, never returns on success (Unix)
//!   SpawnLauncher  tokio::process child, output forwarded
//! ```

pub mod exec;
pub mod launcher;
pub mod spawn;
#[cfg(test)]
mod tests;
