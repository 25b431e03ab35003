//! Serial port records and enumeration.
//!
//! Enumeration is split from the record type so that callers can work with
//! [`PortInfo`] values without caring how they were discovered:
//!
//! ```text
//! +-------------------+      +-------------------------+
//! |  caller / UI      | ---> |  PortEnumerator trait   |
//! +-------------------+      +------------+------------+
//!                                         |
//!                                         v
//!                            +-------------------------+
//!                            |  SysfsPortEnumerator    |
//!                            |  /dev glob + sysfs walk |
//!                            +-------------------------+
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use ttyscan::port::{PortEnumerator, SysfsPortEnumerator};
//!
//! let enumerator = SysfsPortEnumerator::default();
//! for port in enumerator.list_ports() {
//!     println!("{} - {} [{}]", port.port, port.description, port.hardware_id);
//! }
//! ```

pub mod linux;

use crate::{
    error::{Error, Result},
    sysfs::USB_HARDWARE_ID_PREFIX,
};

/// A discovered serial port.
///
/// `description` and `hardware_id` are never empty: they fall back to the
/// device name and `"n/a"` respectively.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortInfo {
    /// Device node path (e.g., "/dev/ttyUSB0").
    pub port: String,
    /// Human-readable description.
    pub description: String,
    /// Hardware identifier (e.g., "USB VID:PID=0403:6001 SNR=A50285BI").
    pub hardware_id: String,
}

impl PortInfo {
    /// Whether the hardware ID was read from a USB device.
    pub fn is_usb(&self) -> bool {
        self.hardware_id
            .starts_with(USB_HARDWARE_ID_PREFIX)
    }
}

/// Trait for listing available serial ports.
pub trait PortEnumerator {
    /// Scan for serial ports. Every call performs a fresh scan.
    fn list_ports(&self) -> Vec<PortInfo>;

    /// First port whose path contains `pattern`.
    fn find_by_name(&self, pattern: &str) -> Result<PortInfo> {
        self.list_ports()
            .into_iter()
            .find(|p| p.port.contains(pattern))
            .ok_or(Error::DeviceNotFound)
    }

    /// Ports whose hardware ID contains `fragment`, ignoring ASCII case.
    fn find_by_hardware_id(&self, fragment: &str) -> Vec<PortInfo> {
        let fragment = fragment.to_ascii_lowercase();
        self.list_ports()
            .into_iter()
            .filter(|p| {
                p.hardware_id
                    .to_ascii_lowercase()
                    .contains(&fragment)
            })
            .collect()
    }
}

/// Format ports for display, one `"<port> - <description> [<hardware_id>]"`
/// line each.
pub fn format_port_list(ports: &[PortInfo]) -> Vec<String> {
    ports
        .iter()
        .map(|p| {
            format!(
                "{} - {} [{}]",
                p.port,
                p.description,
                p.hardware_id
                    .trim_end()
            )
        })
        .collect()
}

pub use linux::SysfsPortEnumerator;
