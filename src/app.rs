// SPDX-License-Identifier: GPL-3.0-only
//! Command-line front end
//!
//! Validates the single brightness argument, locates the panel and writes
//! the report. Argument errors are raised before any filesystem access.

use std::ffi::OsString;

use anyhow::Result;

use crate::brightness::BrightnessLevel;
use crate::devices::TARGET;
use crate::error::AppError;
use crate::locator::{self, DevicePath};
use crate::protocols::DisplayProtocol;
use crate::protocols::hidraw::HidrawPanel;

/// Program name used in the usage line when argv[0] is absent
const DEFAULT_PROGRAM: &str = env!("CARGO_PKG_NAME");

/// Validate `args` (including argv[0]) and return the requested level
pub fn parse_args<I>(args: I) -> crate::error::Result<BrightnessLevel>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let program = args
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());

    match (args.next(), args.next()) {
        (Some(level), None) => BrightnessLevel::parse(&level.to_string_lossy()),
        _ => Err(AppError::Usage { program }),
    }
}

/// Run one invocation against the live system
pub fn run<I>(args: I) -> Result<()>
where
    I: IntoIterator<Item = OsString>,
{
    run_with(args, locator::locate_device)
}

/// Run one invocation, calling `locate` only once the argument is valid
fn run_with<I, F>(args: I, locate: F) -> Result<()>
where
    I: IntoIterator<Item = OsString>,
    F: FnOnce() -> crate::error::Result<DevicePath>,
{
    let level = parse_args(args)?;

    let path = locate()?;
    let mut panel = HidrawPanel::new(path, TARGET);

    debug!("Setting {} to {}", panel.name(), level);
    panel.set_brightness(level)?;

    Ok(())
}
