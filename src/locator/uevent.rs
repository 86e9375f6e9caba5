// SPDX-License-Identifier: GPL-3.0-only
//! Parsing of the kernel's per-device `uevent` file
//!
//! The file holds `KEY=value` lines. The HID core writes the bus identity as
//! `HID_ID=BBBB:VVVVVVVV:PPPPPPPP` in hexadecimal.

use std::fs;
use std::path::Path;

use crate::devices::DeviceSpec;

/// Key of the line carrying the bus/vendor/product triple
const HID_ID_KEY: &str = "HID_ID=";

/// Bus identity of a HID device as reported by the kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HidId {
    pub bus: u32,
    pub vendor: u32,
    pub product: u32,
}

impl HidId {
    /// Parse a single `uevent` line. Returns `None` for any other key or a
    /// malformed value.
    ///
    /// Stricter than a `%x:%x:%x` scan: a fourth field or trailing text after
    /// the product id makes the whole line malformed. The kernel never
    /// writes either.
    pub fn parse_line(line: &str) -> Option<Self> {
        let value = line.trim_start().strip_prefix(HID_ID_KEY)?;
        let mut fields = value.trim_end().splitn(3, ':');

        let bus = parse_hex(fields.next()?)?;
        let vendor = parse_hex(fields.next()?)?;
        let product = parse_hex(fields.next()?)?;

        Some(Self { bus, vendor, product })
    }
}

fn parse_hex(field: &str) -> Option<u32> {
    let digits = field
        .strip_prefix("0x")
        .or_else(|| field.strip_prefix("0X"))
        .unwrap_or(field);
    if digits.is_empty() {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Whether any `HID_ID` line of `contents` names `spec`
pub fn contents_match(contents: &str, spec: &DeviceSpec) -> bool {
    contents
        .lines()
        .filter_map(HidId::parse_line)
        .inspect(|id| {
            trace!(
                "HID_ID bus={:#06x} vendor={:#06x} product={:#06x}",
                id.bus, id.vendor, id.product
            )
        })
        .any(|id| spec.matches(id.vendor, id.product))
}

/// Read `path` and check it against `spec`.
///
/// A missing or unreadable file is a non-match. Invalid UTF-8 is replaced
/// rather than rejected so that one odd line does not hide a valid one.
pub fn file_matches(path: &Path, spec: &DeviceSpec) -> bool {
    match fs::read(path) {
        Ok(bytes) => contents_match(&String::from_utf8_lossy(&bytes), spec),
        Err(e) => {
            trace!("cannot read {}: {}", path.display(), e);
            false
        }
    }
}
