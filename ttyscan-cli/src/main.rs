//! ttyscan CLI - List the serial ports of a Linux host.
//!
//! ## Features
//!
//! - List serial ports with their description and hardware ID
//! - JSON output for scripting
//! - Look up a single port by name
//! - Relocatable `/dev` and `/sys` roots (containers, chroots, test trees)
//! - Shell completion generation

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use env_logger::Env;
use log::debug;
use std::env;
use std::path::PathBuf;

mod commands;
mod config;

use commands::completions::cmd_completions;
use commands::ports::{cmd_find, cmd_list};
use config::Config;

/// ttyscan - Discover serial ports through the Linux sysfs tree.
///
/// Environment variables:
///   TTYSCAN_DEV_DIR     - Device node directory (default: /dev)
///   TTYSCAN_SYSFS_DIR   - sysfs mount point (default: /sys)
#[derive(Parser)]
#[command(name = "ttyscan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Directory holding device nodes.
    #[arg(long, global = true, value_name = "DIR", env = "TTYSCAN_DEV_DIR")]
    dev_dir: Option<String>,

    /// Mount point of sysfs.
    #[arg(long, global = true, value_name = "DIR", env = "TTYSCAN_SYSFS_DIR")]
    sysfs_dir: Option<String>,

    /// Verbose output level (-v, -vv for increasing detail).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-essential output).
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to a configuration file.
    #[arg(long = "config", global = true, value_name = "PATH")]
    config_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// List available serial ports (default).
    List {
        /// Output port list as JSON to stdout.
        #[arg(long)]
        json: bool,
    },

    /// Show the first serial port whose path contains a pattern.
    Find {
        /// Substring of the device path (e.g., "ACM0").
        pattern: String,

        /// Output the port as JSON to stdout.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell type for completions.
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if env::var("NO_COLOR").is_ok() {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    // Setup logging based on verbosity
    let log_level = if cli.quiet {
        "warn"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_target(cli.verbose >= 2)
        .format_timestamp(if cli.verbose >= 2 {
            Some(env_logger::TimestampPrecision::Millis)
        } else {
            None
        })
        .init();

    debug!(
        "ttyscan v{} (verbose level: {})",
        env!("CARGO_PKG_VERSION"),
        cli.verbose
    );

    // Load configuration
    let config = if let Some(ref path) = cli.config_path {
        Config::load_from_path(path)
    } else {
        Config::load()
    };
    let layout = config.layout(cli.dev_dir.as_deref(), cli.sysfs_dir.as_deref());

    match &cli.command {
        None => cmd_list(layout, false)?,
        Some(Commands::List { json }) => cmd_list(layout, *json)?,
        Some(Commands::Find { pattern, json }) => cmd_find(layout, pattern, *json)?,
        Some(Commands::Completions { shell }) => cmd_completions(*shell),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_subcommand() {
        let cli = Cli::try_parse_from(["ttyscan"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_parse_list() {
        let cli = Cli::try_parse_from(["ttyscan", "list"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List { json: false })));
    }

    #[test]
    fn test_cli_parse_list_json() {
        let cli = Cli::try_parse_from(["ttyscan", "list", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List { json: true })));
    }

    #[test]
    fn test_cli_parse_find() {
        let cli = Cli::try_parse_from(["ttyscan", "find", "ACM0", "--json"]).unwrap();
        if let Some(Commands::Find { pattern, json }) = cli.command {
            assert_eq!(pattern, "ACM0");
            assert!(json);
        } else {
            panic!("Expected Find command");
        }
    }

    #[test]
    fn test_cli_parse_find_requires_pattern() {
        assert!(Cli::try_parse_from(["ttyscan", "find"]).is_err());
    }

    #[test]
    fn test_cli_parse_global_dirs_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ttyscan",
            "list",
            "--dev-dir",
            "/tmp/dev",
            "--sysfs-dir",
            "/tmp/sys",
        ])
        .unwrap();
        assert_eq!(cli.dev_dir.as_deref(), Some("/tmp/dev"));
        assert_eq!(cli.sysfs_dir.as_deref(), Some("/tmp/sys"));
    }

    #[test]
    fn test_cli_parse_verbose_count() {
        let cli = Cli::try_parse_from(["ttyscan", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_parse_completions() {
        let cli = Cli::try_parse_from(["ttyscan", "completions", "bash"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions { shell: Shell::Bash })
        ));
    }

    #[test]
    fn test_cli_parse_completions_invalid_shell() {
        assert!(Cli::try_parse_from(["ttyscan", "completions", "cmd"]).is_err());
    }
}
