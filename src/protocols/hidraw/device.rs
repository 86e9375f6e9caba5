// SPDX-License-Identifier: GPL-3.0-only
//! hidraw panel implementation

use std::fs::OpenOptions;
use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;

use crate::brightness::BrightnessLevel;
use crate::devices::DeviceSpec;
use crate::error::{AppError, Result};
use crate::locator::DevicePath;
use crate::protocols::DisplayProtocol;

use super::{BrightnessPacket, REPORT_SIZE};

/// Write one brightness report to the hidraw node at `path`.
///
/// The node is opened read-write and non-blocking, written exactly once and
/// closed again on every path. Only a failed write call is an error: a
/// short write is logged and otherwise accepted.
pub fn send_brightness(path: &DevicePath, level: BrightnessLevel) -> Result<()> {
    let packet = BrightnessPacket::new(level);

    let mut device = OpenOptions::new()
        .read(true)
        .write(true)
        .custom_flags(libc::O_NONBLOCK)
        .open(path)
        .map_err(|source| AppError::Open {
            path: path.as_path().to_path_buf(),
            source,
        })?;

    let written = device
        .write(packet.as_bytes())
        .map_err(|source| AppError::Write {
            path: path.as_path().to_path_buf(),
            source,
        })?;

    if written < REPORT_SIZE {
        warn!("short write to {}: {} of {} bytes", path, written, REPORT_SIZE);
    }

    debug!("Set {} to {} ({} bytes written)", path, level, written);

    Ok(())
}

/// Touch panel reached through its hidraw node
#[derive(Debug)]
pub struct HidrawPanel {
    path: DevicePath,
    spec: DeviceSpec,
}

impl HidrawPanel {
    pub fn new(path: DevicePath, spec: DeviceSpec) -> Self {
        Self { path, spec }
    }
}

impl DisplayProtocol for HidrawPanel {
    fn name(&self) -> String {
        self.spec.name.to_string()
    }

    fn set_brightness(&mut self, level: BrightnessLevel) -> anyhow::Result<()> {
        send_brightness(&self.path, level)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::TARGET;
    use crate::testutil::ScratchDir;
    use std::fs;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_writes_report_to_node() {
        let scratch = ScratchDir::new("write-report");
        let node = scratch.path().join("hidraw0");
        fs::write(&node, b"").unwrap();

        let level = BrightnessLevel::parse("55").unwrap();
        send_brightness(&DevicePath::from(node.clone()), level).unwrap();

        let written = fs::read(&node).unwrap();
        assert_eq!(written, BrightnessPacket::new(level).as_bytes().to_vec());
    }

    #[test]
    fn test_missing_node_is_open_error() {
        let scratch = ScratchDir::new("missing-node");
        let node = DevicePath::from(scratch.path().join("hidraw9"));

        let err = send_brightness(&node, BrightnessLevel::parse("0").unwrap()).unwrap_err();
        match err {
            AppError::Open { path, source } => {
                assert_eq!(path, node.as_path());
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected open error, got {other:?}"),
        }
    }

    #[test]
    fn test_open_error_message() {
        let scratch = ScratchDir::new("open-message");
        let node = DevicePath::from(scratch.path().join("hidraw9"));

        let message = send_brightness(&node, BrightnessLevel::parse("0").unwrap())
            .unwrap_err()
            .to_string();
        assert!(message.starts_with("open hidraw "), "{message}");
        assert!(message.contains("hidraw9"), "{message}");
    }

    // /dev/full accepts the open but fails every write with ENOSPC.
    #[test]
    fn test_failed_write_is_write_error() {
        let node = DevicePath::from(PathBuf::from("/dev/full"));

        let err = send_brightness(&node, BrightnessLevel::MAX).unwrap_err();
        assert!(err.to_string().starts_with("write "), "{err}");
        match err {
            AppError::Write { path, source } => {
                assert_eq!(path, Path::new("/dev/full"));
                assert_eq!(source.raw_os_error(), Some(libc::ENOSPC));
            }
            other => panic!("expected write error, got {other:?}"),
        }
    }

    #[test]
    fn test_panel_protocol() {
        let scratch = ScratchDir::new("panel");
        let node = scratch.path().join("hidraw3");
        fs::write(&node, b"").unwrap();

        let mut panel = HidrawPanel::new(DevicePath::from(node.clone()), TARGET);
        assert_eq!(panel.name(), "Waveshare Touchpanel");

        panel.set_brightness(BrightnessLevel::MAX).unwrap();
        assert_eq!(fs::read(&node).unwrap()[6], 100);
    }

    #[test]
    fn test_panel_error_keeps_kind() {
        let scratch = ScratchDir::new("panel-error");
        let mut panel = HidrawPanel::new(DevicePath::from(scratch.path().join("gone")), TARGET);

        let err = panel.set_brightness(BrightnessLevel::parse("0").unwrap()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::Open { .. })
        ));
    }
}
