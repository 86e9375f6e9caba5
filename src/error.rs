// SPDX-License-Identifier: GPL-3.0-only
//! Error types for the tool
//!
//! Every failure is terminal: the front end prints the `Display` form of the
//! error on stderr and exits with status 1.

use std::path::PathBuf;

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Wrong number of command-line arguments
    #[error("usage: {program} <0-100>")]
    Usage { program: String },

    /// The brightness argument is not a decimal integer
    #[error("brightness must be an integer 0-100, got {0:?}")]
    InvalidLevel(String),

    /// The brightness argument is an integer outside 0-100
    #[error("brightness must be 0-100, got {0}")]
    OutOfRange(i64),

    /// Enumeration finished without a usable hidraw node.
    ///
    /// Covers both "no device with the right vendor:product" and "device
    /// matched but exposes no hidraw interface".
    #[error("no matching {name} device found")]
    DeviceNotFound { name: &'static str },

    /// The hidraw node exists but could not be opened
    #[error("open hidraw {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The write call on the hidraw node failed
    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;
