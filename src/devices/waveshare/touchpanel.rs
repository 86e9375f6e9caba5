// SPDX-License-Identifier: GPL-3.0-only
//! Waveshare USB-HID touch panel

use crate::devices::DeviceSpec;

/// USB Product ID of the touch panel's HID interface
pub const PRODUCT_ID: u16 = 0x0005;

/// Device specification for the Waveshare touch panel
pub const SPEC: DeviceSpec = DeviceSpec {
    vendor_id: super::VENDOR_ID,
    product_id: PRODUCT_ID,
    name: "Waveshare Touchpanel",
};
