// SPDX-License-Identifier: GPL-3.0-only
//! Device-specific configurations organized by manufacturer

pub mod waveshare;

/// Identity of a supported HID panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceSpec {
    /// USB Vendor ID
    pub vendor_id: u16,

    /// USB Product ID
    pub product_id: u16,

    /// Human-readable device name, used in diagnostics
    pub name: &'static str,
}

impl DeviceSpec {
    /// Whether a vendor/product pair read from the kernel names this device.
    ///
    /// The kernel reports ids as 32-bit fields, so the comparison is done in
    /// `u32` and anything wider than 16 bits never matches.
    pub fn matches(&self, vendor: u32, product: u32) -> bool {
        vendor == u32::from(self.vendor_id) && product == u32::from(self.product_id)
    }
}

/// The panel this tool drives
pub const TARGET: DeviceSpec = waveshare::touchpanel::SPEC;
