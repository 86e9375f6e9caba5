// SPDX-License-Identifier: GPL-3.0-only
//! Raw HID brightness control protocol
//!
//! The panel accepts a single 38-byte output report on its hidraw node:
//! report id `0x04`, command `aa 01 00`, two reserved bytes, then the
//! brightness percentage, zero-padded to the report size.

mod device;
mod packet;

pub use device::HidrawPanel;
pub use packet::BrightnessPacket;

/// Output report size in bytes
pub const REPORT_SIZE: usize = 38;

/// HID Report ID for brightness control
pub const REPORT_ID: u8 = 0x04;

/// Command bytes following the report id
pub const COMMAND: [u8; 3] = [0xaa, 0x01, 0x00];

/// Offset of the brightness byte within the report
pub const LEVEL_OFFSET: usize = 6;
