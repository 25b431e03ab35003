//! Device identity resolution through the sysfs tty class.
//!
//! The kernel publishes every tty under `/sys/class/tty/<name>`, with a
//! `device` symlink into the bus-specific part of the tree. Where the useful
//! descriptor attributes live depends on the bus:
//!
//! ```text
//! ttyUSB0 (usb-serial)  .../1-2/1-2:1.0/ttyUSB0   -> attributes two levels up
//! ttyACM0 (cdc-acm)     .../1-2/1-2:1.0           -> attributes one level up
//! ttyS0   (pnp / pci)   /sys/class/tty/ttyS0/device/id
//! ```
//!
//! There is no canonical attribute location, so the bus is guessed from the
//! device name.

use {
    crate::path::{dirname, path_exists, read_first_line, resolve_real_path},
    log::trace,
};

/// Hardware ID reported when nothing could be read.
pub const UNKNOWN_HARDWARE_ID: &str = "n/a";

/// Prefix of every USB hardware ID.
pub const USB_HARDWARE_ID_PREFIX: &str = "USB VID:PID=";

const DEFAULT_DEV_DIR: &str = "/dev";
const DEFAULT_SYSFS_DIR: &str = "/sys";

/// Device-node name patterns scanned below the device directory.
const DEV_PATTERNS: &[&str] = &[
    // Most devices: ttyUSB0, ttyACM2, ttyTHS3, ttyMXUSB4, ttyS10, ...
    "tty[A-Za-z][A-Za-z0-9]*[0-9]",
    // The broad pattern needs three characters after "tty", missing ttyS0..ttyS9
    "ttyS[0-9]",
    // Vendor kernels: tty.usbmodem1234, cu.usbserial, ...
    "tty.*",
    "cu.*",
    // Bluetooth serial
    "rfcomm*",
];

/// Filesystem roots used for discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysfsLayout {
    dev_dir: String,
    sysfs_dir: String,
}

impl Default for SysfsLayout {
    fn default() -> Self {
        Self::new(DEFAULT_DEV_DIR, DEFAULT_SYSFS_DIR)
    }
}

impl SysfsLayout {
    /// Create a layout rooted at the given device and sysfs directories.
    pub fn new(dev_dir: impl Into<String>, sysfs_dir: impl Into<String>) -> Self {
        Self {
            dev_dir: trim_trailing_separators(dev_dir.into()),
            sysfs_dir: trim_trailing_separators(sysfs_dir.into()),
        }
    }

    /// Directory holding device nodes (normally `/dev`).
    pub fn dev_dir(&self) -> &str {
        &self.dev_dir
    }

    /// Mount point of sysfs (normally `/sys`).
    pub fn sysfs_dir(&self) -> &str {
        &self.sysfs_dir
    }

    /// Glob patterns matching candidate serial device nodes.
    pub fn dev_patterns(&self) -> Vec<String> {
        let root = glob::Pattern::escape(&self.dev_dir);
        DEV_PATTERNS
            .iter()
            .map(|pattern| format!("{root}/{pattern}"))
            .collect()
    }

    /// The `device` link of a tty in the sysfs class tree.
    pub fn tty_device_link(&self, name: &str) -> String {
        format!("{}/class/tty/{name}/device", self.sysfs_dir)
    }

    /// Whether the canonical sysfs device path of `name` mentions "serial".
    ///
    /// Serial-core drivers (8250, pl011, imx-uart, ...) register their ports
    /// under a `serial` platform or pnp device, while virtual consoles and
    /// other tty class members do not.
    ///
    /// Only the part below the sysfs root is searched, so a relocated root
    /// whose own path mentions "serial" does not mark every tty.
    pub fn has_serial_marker(&self, name: &str) -> bool {
        let device_path = resolve_real_path(&self.tty_device_link(name));
        let sysfs_root = resolve_real_path(&self.sysfs_dir);

        let below_root = if sysfs_root.is_empty() {
            device_path.as_str()
        } else {
            device_path
                .strip_prefix(sysfs_root.as_str())
                .unwrap_or(&device_path)
        };

        below_root
            .to_lowercase()
            .contains("serial")
    }

    /// Resolve the friendly name and hardware ID of a tty by name.
    ///
    /// Never fails: missing attributes fall back to the device name and
    /// [`UNKNOWN_HARDWARE_ID`].
    pub fn resolve(&self, name: &str) -> DeviceIdentity {
        let device_link = self.tty_device_link(name);
        let class = DeviceClass::classify(name);

        let (friendly_name, hardware_id) = match class.usb_root_depth() {
            Some(depth) => {
                let mut usb_root = resolve_real_path(&device_link);
                for _ in 0..depth {
                    usb_root = dirname(&usb_root).to_string();
                }

                if path_exists(&usb_root) {
                    let attrs = UsbAttributes::read(&usb_root);
                    (attrs.friendly_name(), attrs.hardware_id())
                } else {
                    trace!("No USB device root for {name} ({class:?})");
                    (String::new(), String::new())
                }
            },
            None => {
                let id_path = format!("{device_link}/id");
                let hardware_id = if path_exists(&id_path) {
                    read_first_line(&id_path)
                } else {
                    String::new()
                };
                (String::new(), hardware_id)
            },
        };

        let identity = DeviceIdentity::with_fallbacks(name, friendly_name, hardware_id);
        trace!(
            "Resolved {name} as {class:?}: {:?} [{}]",
            identity.friendly_name, identity.hardware_id
        );
        identity
    }
}

fn trim_trailing_separators(mut dir: String) -> String {
    while dir.len() > 1 && dir.ends_with('/') {
        dir.pop();
    }
    dir
}

/// Bus classification derived from a tty device name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    /// USB-to-serial adapter (name contains `USB`, e.g. ttyUSB0, ttyMXUSB1).
    UsbSerial,
    /// USB CDC-ACM device (name starts with `ttyACM`).
    UsbAcm,
    /// Anything else, typically an on-board or PCI UART.
    Generic,
}

impl DeviceClass {
    /// Classify a device name. `USB` takes priority over the `ttyACM` prefix.
    pub fn classify(name: &str) -> Self {
        if name.contains("USB") {
            Self::UsbSerial
        } else if name.starts_with("ttyACM") {
            Self::UsbAcm
        } else {
            Self::Generic
        }
    }

    /// Directory levels between the canonical device path and the USB device.
    pub fn usb_root_depth(self) -> Option<usize> {
        match self {
            Self::UsbSerial => Some(2),
            Self::UsbAcm => Some(1),
            Self::Generic => None,
        }
    }
}

/// Descriptor attributes of a USB device directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsbAttributes {
    /// `manufacturer` string descriptor.
    pub manufacturer: String,
    /// `product` string descriptor.
    pub product: String,
    /// `serial` string descriptor.
    pub serial: String,
    /// `idVendor`, as the kernel prints it (four hex digits).
    pub vendor_id: String,
    /// `idProduct`, as the kernel prints it (four hex digits).
    pub product_id: String,
}

impl UsbAttributes {
    /// Read the attributes below `usb_root`. Unreadable files become empty.
    pub fn read(usb_root: &str) -> Self {
        let attr = |file: &str| read_first_line(&format!("{usb_root}/{file}"));

        Self {
            manufacturer: attr("manufacturer"),
            product: attr("product"),
            serial: attr("serial"),
            vendor_id: attr("idVendor"),
            product_id: attr("idProduct"),
        }
    }

    /// `"<manufacturer> <product> <serial>"`, or empty if all three are empty.
    pub fn friendly_name(&self) -> String {
        if self.manufacturer.is_empty() && self.product.is_empty() && self.serial.is_empty() {
            return String::new();
        }

        format!("{} {} {}", self.manufacturer, self.product, self.serial)
    }

    /// `"USB VID:PID=<vid>:<pid> SNR=<serial>"`; the `SNR=` clause is left out
    /// when there is no serial number, keeping the separating space.
    pub fn hardware_id(&self) -> String {
        let serial_clause = if self.serial.is_empty() {
            String::new()
        } else {
            format!("SNR={}", self.serial)
        };

        format!(
            "{USB_HARDWARE_ID_PREFIX}{}:{} {serial_clause}",
            self.vendor_id, self.product_id
        )
    }
}

/// Human-readable name and hardware identifier of a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceIdentity {
    /// Friendly name, never empty.
    pub friendly_name: String,
    /// Hardware ID, never empty.
    pub hardware_id: String,
}

impl DeviceIdentity {
    fn with_fallbacks(name: &str, friendly_name: String, hardware_id: String) -> Self {
        Self {
            friendly_name: if friendly_name.is_empty() {
                name.to_string()
            } else {
                friendly_name
            },
            hardware_id: if hardware_id.is_empty() {
                UNKNOWN_HARDWARE_ID.to_string()
            } else {
                hardware_id
            },
        }
    }
}
