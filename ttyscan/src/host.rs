//! Host-side helpers that scan the real `/dev` and `/sys`.

use crate::port::{PortEnumerator, PortInfo, SysfsPortEnumerator};

/// List all serial ports on this host.
#[must_use]
pub fn list_ports() -> Vec<PortInfo> {
    SysfsPortEnumerator::default().list_ports()
}

/// Find the first serial port whose path contains `pattern`.
pub fn find_port(pattern: &str) -> crate::Result<PortInfo> {
    SysfsPortEnumerator::default().find_by_name(pattern)
}
