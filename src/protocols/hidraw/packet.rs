// SPDX-License-Identifier: GPL-3.0-only
//! Brightness output report

use crate::brightness::BrightnessLevel;

use super::{COMMAND, LEVEL_OFFSET, REPORT_ID, REPORT_SIZE};

/// A ready-to-write brightness report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessPacket([u8; REPORT_SIZE]);

impl BrightnessPacket {
    pub fn new(level: BrightnessLevel) -> Self {
        let mut buf = [0u8; REPORT_SIZE];
        buf[0] = REPORT_ID;
        buf[1..4].copy_from_slice(&COMMAND);

        // Bytes 4-5 are reserved (remain 0)
        buf[LEVEL_OFFSET] = level.value();

        Self(buf)
    }

    pub fn as_bytes(&self) -> &[u8; REPORT_SIZE] {
        &self.0
    }
}
