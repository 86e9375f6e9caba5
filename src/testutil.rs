// SPDX-License-Identifier: GPL-3.0-only
//! Scratch directories for filesystem tests

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::locator::SysfsLayout;

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A temporary directory that is removed when dropped
pub struct ScratchDir {
    root: PathBuf,
}

impl ScratchDir {
    pub fn new(label: &str) -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let root = std::env::temp_dir().join(format!(
            "touchpanel-brightness-{}-{}-{}",
            label,
            std::process::id(),
            id
        ));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).unwrap();
        Self { root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// A layout rooted inside this directory, with empty `hid` and `dev` trees
    pub fn layout(&self) -> SysfsLayout {
        let layout = SysfsLayout {
            hid_devices_dir: self.root.join("sys/bus/hid/devices"),
            dev_dir: self.root.join("dev"),
        };
        fs::create_dir_all(&layout.hid_devices_dir).unwrap();
        fs::create_dir_all(&layout.dev_dir).unwrap();
        layout
    }

    /// Add a HID device directory. `uevent` of `None` leaves the file out;
    /// each name in `hidraw` becomes an entry of its `hidraw` subdirectory.
    pub fn add_hid_device(
        &self,
        layout: &SysfsLayout,
        name: &str,
        uevent: Option<&str>,
        hidraw: Option<&[&str]>,
    ) -> PathBuf {
        let dir = layout.hid_devices_dir.join(name);
        fs::create_dir_all(&dir).unwrap();
        if let Some(contents) = uevent {
            fs::write(dir.join("uevent"), contents).unwrap();
        }
        if let Some(entries) = hidraw {
            let sub = dir.join("hidraw");
            fs::create_dir_all(&sub).unwrap();
            for entry in entries {
                fs::create_dir_all(sub.join(entry)).unwrap();
            }
        }
        dir
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

/// `uevent` contents for a device with the given ids
pub fn uevent_for(vendor: u16, product: u16) -> String {
    format!(
        "DRIVER=hid-generic\nHID_ID=0003:{:08X}:{:08X}\nHID_NAME=Test Device\n",
        vendor, product
    )
}
