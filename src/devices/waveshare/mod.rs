// SPDX-License-Identifier: GPL-3.0-only
//! Waveshare panel specifications

pub mod touchpanel;

/// USB Vendor ID used by Waveshare touch controllers
pub const VENDOR_ID: u16 = 0x0eef;
