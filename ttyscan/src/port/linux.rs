//! Port enumeration from `/dev` device nodes and the sysfs tty class.

use {
    crate::{
        path::basename,
        pattern,
        port::{PortEnumerator, PortInfo},
        sysfs::SysfsLayout,
    },
    log::debug,
};

/// Enumerator that globs the device directory and identifies each match
/// through sysfs.
#[derive(Debug, Clone, Default)]
pub struct SysfsPortEnumerator {
    layout: SysfsLayout,
}

impl SysfsPortEnumerator {
    /// Create an enumerator over the given roots.
    pub fn new(layout: SysfsLayout) -> Self {
        Self { layout }
    }

    /// The roots this enumerator scans.
    pub fn layout(&self) -> &SysfsLayout {
        &self.layout
    }

    /// Whether a globbed device node should be reported.
    ///
    /// The broad `/dev` pattern also matches ttys that are not serial lines,
    /// so names that are not obviously serial must have a sysfs device path
    /// mentioning "serial".
    fn is_serial_candidate(&self, name: &str) -> bool {
        if is_obvious_serial_name(name) {
            return true;
        }

        let keep = self
            .layout
            .has_serial_marker(name);
        if !keep {
            debug!("Skipping {name}: not a serial device");
        }
        keep
    }
}

/// `ttyS*` lines and anything mentioning USB or ACM.
fn is_obvious_serial_name(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    name.starts_with("ttyS") || lower.contains("usb") || lower.contains("acm")
}

impl PortEnumerator for SysfsPortEnumerator {
    fn list_ports(&self) -> Vec<PortInfo> {
        let candidates = pattern::expand(
            self.layout
                .dev_patterns(),
        );
        debug!("{} candidate device node(s)", candidates.len());

        let ports: Vec<PortInfo> = candidates
            .into_iter()
            .filter(|device| self.is_serial_candidate(basename(device)))
            .map(|device| {
                let identity = self
                    .layout
                    .resolve(basename(&device));
                PortInfo {
                    port: device,
                    description: identity.friendly_name,
                    hardware_id: identity.hardware_id,
                }
            })
            .collect();

        debug!("Found {} serial port(s)", ports.len());
        ports
    }
}
