// SPDX-License-Identifier: GPL-3.0-only
//! Brightness level handling
//!
//! The panel takes a percentage in 0-100. `BrightnessLevel` can only be
//! built from a value in that range, so everything downstream can write it
//! to the device without further checks.

use std::fmt;
use std::num::IntErrorKind;

use crate::error::{AppError, Result};

/// A validated brightness percentage (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BrightnessLevel(u8);

impl BrightnessLevel {
    pub const MAX: Self = Self(100);

    /// Parse a command-line argument as a decimal percentage.
    ///
    /// Surrounding whitespace and a leading `+` are accepted. Integers too
    /// large for `i64` are reported as out of range, not as invalid.
    pub fn parse(arg: &str) -> Result<Self> {
        let value = match arg.trim().parse::<i64>() {
            Ok(value) => value,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => return Err(AppError::InvalidLevel(arg.to_string())),
            },
        };

        Self::try_from(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for BrightnessLevel {
    type Error = AppError;

    fn try_from(value: i64) -> Result<Self> {
        match u8::try_from(value) {
            Ok(level) if level <= Self::MAX.0 => Ok(Self(level)),
            _ => Err(AppError::OutOfRange(value)),
        }
    }
}

impl fmt::Display for BrightnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
