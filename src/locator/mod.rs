// SPDX-License-Identifier: GPL-3.0-only
//! Discovery of the panel's raw HID node
//!
//! Walks the kernel's HID bus directory, picks the first device whose
//! `uevent` names the target vendor/product, and resolves the `hidrawN`
//! interface listed beneath it to a node under `/dev`.

mod uevent;

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use crate::devices::{DeviceSpec, TARGET};
use crate::error::{AppError, Result};

/// Directory listing every device on the HID bus
pub const HID_DEVICES_DIR: &str = "/sys/bus/hid/devices";

/// Directory holding device nodes
pub const DEV_DIR: &str = "/dev";

/// Subdirectory of a HID device listing its hidraw interfaces
pub const HIDRAW_SUBDIR: &str = "hidraw";

/// Name prefix of hidraw interfaces
pub const HIDRAW_PREFIX: &str = "hidraw";

/// Metadata file inside each HID device directory
pub const UEVENT_FILE: &str = "uevent";

/// Filesystem roots used by discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysfsLayout {
    pub hid_devices_dir: PathBuf,
    pub dev_dir: PathBuf,
}

impl Default for SysfsLayout {
    fn default() -> Self {
        Self {
            hid_devices_dir: PathBuf::from(HID_DEVICES_DIR),
            dev_dir: PathBuf::from(DEV_DIR),
        }
    }
}

/// Absolute path of a resolved hidraw node.
///
/// Only meaningful for the current run; it goes stale if the panel is
/// unplugged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevicePath(PathBuf);

impl DevicePath {
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for DevicePath {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl AsRef<Path> for DevicePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for DevicePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// One candidate directory under the HID bus directory
#[derive(Debug, Clone)]
pub struct HidDeviceEntry {
    path: PathBuf,
}

impl HidDeviceEntry {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the device's `uevent` names `spec`. Anything unreadable or
    /// malformed counts as "no".
    pub fn matches(&self, spec: &DeviceSpec) -> bool {
        uevent::file_matches(&self.path.join(UEVENT_FILE), spec)
    }

    /// Short name of the first hidraw interface, in directory order
    pub fn hidraw_name(&self) -> Option<OsString> {
        let dir = self.path.join(HIDRAW_SUBDIR);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("no hidraw interfaces under {}: {}", self.path.display(), e);
                return None;
            }
        };

        first_hidraw(entries.filter_map(|entry| entry.ok()).map(|entry| entry.file_name()))
    }
}

/// First name carrying the hidraw prefix, in the order given
fn first_hidraw<I>(names: I) -> Option<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    names
        .into_iter()
        .find(|name| name.as_bytes().starts_with(HIDRAW_PREFIX.as_bytes()))
}

/// Candidate device directories, in directory order.
///
/// Hidden entries (including the self and parent references) are skipped.
/// An unreadable bus directory simply yields no candidates.
fn candidates(layout: &SysfsLayout) -> Vec<HidDeviceEntry> {
    let entries = match fs::read_dir(&layout.hid_devices_dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(
                "cannot list HID devices in {}: {}",
                layout.hid_devices_dir.display(),
                e
            );
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| !entry.file_name().as_bytes().starts_with(b"."))
        .map(|entry| HidDeviceEntry::new(entry.path()))
        .collect()
}

/// Resolve the first candidate that both matches `spec` and exposes a
/// hidraw interface.
fn resolve<I>(candidates: I, layout: &SysfsLayout, spec: &DeviceSpec) -> Option<DevicePath>
where
    I: IntoIterator<Item = HidDeviceEntry>,
{
    for candidate in candidates {
        trace!("checking {}", candidate.path().display());

        if !candidate.matches(spec) {
            continue;
        }
        debug!("{} matches {}", candidate.path().display(), spec.name);

        match candidate.hidraw_name() {
            Some(name) => return Some(DevicePath(layout.dev_dir.join(name))),
            None => debug!(
                "{} has no hidraw interface, trying next device",
                candidate.path().display()
            ),
        }
    }

    None
}

/// Find the hidraw node of `spec` under the given layout.
///
/// Both "nothing matched" and "matched without a hidraw interface" end in
/// the same `DeviceNotFound`.
pub fn locate_device_in(layout: &SysfsLayout, spec: &DeviceSpec) -> Result<DevicePath> {
    match resolve(candidates(layout), layout, spec) {
        Some(path) => {
            info!("found {} at {}", spec.name, path);
            Ok(path)
        }
        None => Err(AppError::DeviceNotFound { name: spec.name }),
    }
}

/// Find the panel's hidraw node on this system
pub fn locate_device() -> Result<DevicePath> {
    locate_device_in(&SysfsLayout::default(), &TARGET)
}
