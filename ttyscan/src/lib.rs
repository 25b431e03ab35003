//! # ttyscan
//!
//! Discover the serial ports of a Linux host and identify them.
//!
//! Device nodes are found by globbing `/dev`, and each one is described by
//! walking the kernel's sysfs tree:
//!
//! - USB-to-serial adapters (`ttyUSB*`) and CDC-ACM devices (`ttyACM*`)
//!   report their USB manufacturer, product and serial strings, together
//!   with a `USB VID:PID=<vid>:<pid> SNR=<serial>` hardware ID
//! - Other UARTs report the `id` attribute of their sysfs device, if any
//!
//! Every call performs a fresh scan. Nothing is cached and nothing fails:
//! missing metadata falls back to the device name and `"n/a"`.
//!
//! ## Features
//!
//! - `serde`: Serialization support for [`PortInfo`]
//!
//! ## Example
//!
//! ```rust,no_run
//! for port in ttyscan::list_ports() {
//!     println!("{}: {} ({})", port.port, port.description, port.hardware_id);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod host;
pub mod path;
pub mod pattern;
pub mod port;
pub mod sysfs;

#[cfg(test)]
mod test_utils;

// Re-exports for convenience
pub use {
    error::{Error, Result},
    host::{find_port, list_ports},
    port::{PortEnumerator, PortInfo, SysfsPortEnumerator, format_port_list},
    sysfs::{DeviceClass, DeviceIdentity, SysfsLayout, UNKNOWN_HARDWARE_ID, UsbAttributes},
};
