//! Port listing and lookup commands.

use anyhow::{Context, Result};
use console::style;
use log::debug;
use ttyscan::{PortEnumerator, PortInfo, SysfsLayout, SysfsPortEnumerator, format_port_list};

/// List ports command implementation.
pub(crate) fn cmd_list(layout: SysfsLayout, json: bool) -> Result<()> {
    debug!(
        "Scanning {} with sysfs at {}",
        layout.dev_dir(),
        layout.sysfs_dir()
    );
    let ports = SysfsPortEnumerator::new(layout).list_ports();

    if json {
        return print_json(&ports);
    }

    if ports.is_empty() {
        eprintln!("  {}", style("No serial ports found").dim());
        return Ok(());
    }

    // Plain lines when piped, for scripts
    if !console::Term::stdout().is_term() {
        for line in format_port_list(&ports) {
            println!("{line}");
        }
        return Ok(());
    }

    eprintln!("{}", style("Serial ports:").bold().underlined());
    for port in &ports {
        println!("{}", format_port_line(port));
    }

    Ok(())
}

/// Find command implementation.
pub(crate) fn cmd_find(layout: SysfsLayout, pattern: &str, json: bool) -> Result<()> {
    let port = SysfsPortEnumerator::new(layout)
        .find_by_name(pattern)
        .with_context(|| format!("No serial port matches '{pattern}'"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&port)?);
    } else {
        println!("{}", format_port_line(&port));
    }

    Ok(())
}

fn print_json(ports: &[PortInfo]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(ports)?);
    Ok(())
}

fn format_port_line(port: &PortInfo) -> String {
    let hardware_id = port
        .hardware_id
        .trim_end();
    let hardware_id = if port.is_usb() {
        style(hardware_id).yellow()
    } else {
        style(hardware_id).dim()
    };

    format!(
        "  {} {} - {} [{}]",
        style("•").green(),
        style(&port.port).cyan(),
        port.description,
        hardware_id
    )
}
