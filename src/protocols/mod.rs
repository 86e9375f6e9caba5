// SPDX-License-Identifier: GPL-3.0-only
//! Display brightness control protocols
//!
//! Each protocol implementation provides brightness control through a
//! different communication method. The touch panel only speaks raw HID.

pub mod hidraw;

use anyhow::Result;

use crate::brightness::BrightnessLevel;

/// Common trait for all display control protocols
pub trait DisplayProtocol: std::fmt::Debug {
    /// Get the human-readable name of this display
    fn name(&self) -> String;

    /// Set the brightness
    fn set_brightness(&mut self, level: BrightnessLevel) -> Result<()>;
}
