// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Human-readable environment listing.
//!
//! ```text
//! HOME       = "/home/me"
//! LONG_VALUE = "aaaaaaaa...zzzzzzzz"     clipped to head + ... + tail
//! PATH       = "/usr/bin:/bin"
//! ^ sorted    ^ aligned '='  ^ escaped, quoted
//! ```

use std::borrow::Cow;
use std::io::Write;

/// Default clip threshold, in characters.
pub const DEFAULT_CLIP_AT: usize = 100;

const ELLIPSIS: &str = "...";

/// Shortens `value` to `head...tail` if it is longer than `clip_at` characters.
///
/// Head and tail are each `clip_at / 2 - 1` characters, so a threshold of 100
/// keeps 49 characters on each side.
#[must_use]
pub fn clip_value(value: &str, clip_at: usize) -> Cow<'_, str> {
    let len = value.chars().count();
    if len <= clip_at {
        return Cow::Borrowed(value);
    }

    let keep = (clip_at / 2).saturating_sub(1);
    let head: String = value.chars().take(keep).collect();
    let tail: String = value.chars().skip(len - keep).collect();
    Cow::Owned(format!("{head}{ELLIPSIS}{tail}"))
}

/// Formats variables as aligned `NAME = "VALUE"` lines, sorted by name.
///
/// `clip_at` of `None` disables clipping.
#[must_use]
pub fn format_env<'a, I>(vars: I, clip_at: Option<usize>) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut vars: Vec<_> = vars.into_iter().collect();
    vars.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let width = vars
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);

    vars.into_iter()
        .map(|(name, value)| {
            let value = clip_at.map_or(Cow::Borrowed(value), |at| clip_value(value, at));
            let pad = width - name.chars().count();
            format!("{name}{:pad$} = {value:?}", "")
        })
        .collect()
}

/// Writes the formatted listing, one variable per line.
///
/// # Errors
///
/// Returns any error from `writer`.
pub fn write_env<'a, W, I>(writer: &mut W, vars: I, clip_at: Option<usize>) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    for line in format_env(vars, clip_at) {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}
