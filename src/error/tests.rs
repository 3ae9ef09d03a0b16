// rwenv: Run With Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use super::{AssembleError, LaunchError, LineError, RwenvError, RwenvResult};

#[test]
fn test_invalid_override_display() {
    let err = AssembleError::InvalidOverride {
        value: "NOPE".to_string(),
        reason: LineError::NoSeparator,
    };
    insta::assert_snapshot!(err.to_string(), @"invalid override 'NOPE': no equal sign found");
}

#[test]
fn test_file_read_display() {
    let err = AssembleError::FileRead {
        path: PathBuf::from("missing.env"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    insta::assert_snapshot!(err.to_string(), @"failed to read env file 'missing.env': not found");
}

#[test]
fn test_boxed_conversion() {
    let err: RwenvError = LaunchError::ProgramNotFound {
        name: "nope".to_string(),
    }
    .into();
    insta::assert_snapshot!(
        err.to_string(),
        @"launch error: executable not found: 'nope' (not in PATH)"
    );
}

#[test]
fn test_rwenv_error_size() {
    // Box<str> variants are 16 bytes (fat pointer), plus discriminant
    let size = std::mem::size_of::<RwenvError>();
    assert!(size <= 24, "RwenvError is {size} bytes, expected <= 24");
}

#[test]
fn test_rwenv_result_size() {
    let size = std::mem::size_of::<RwenvResult<()>>();
    assert!(size <= 24, "RwenvResult<()> is {size} bytes, expected <= 24");
}
