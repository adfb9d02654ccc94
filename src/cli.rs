//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `devid`.
#[derive(Debug, Parser)]
#[command(name = "devid", version, about = "Resolve a best-effort unique device identifier")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the device identifier from the first source that has one.
    Resolve {
        /// Skip the known non-unique secure ID instead of failing.
        #[arg(long)]
        ignore_known_bad: bool,
        /// Fall back to an installation ID stored at this path when the
        /// device has no identifier.
        #[arg(long, value_name = "PATH")]
        fallback_file: Option<PathBuf>,
    },
    /// Query every identifier source once and print what each reports.
    Probe,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_resolve_defaults() {
        let cli = Cli::parse_from(["devid", "resolve"]);
        assert!(matches!(
            cli.command,
            Command::Resolve { ignore_known_bad: false, fallback_file: None }
        ));
    }

    #[test]
    fn parses_resolve_flags() {
        let cli = Cli::parse_from([
            "devid",
            "resolve",
            "--ignore-known-bad",
            "--fallback-file",
            "/tmp/id",
        ]);
        let Command::Resolve { ignore_known_bad, fallback_file } = cli.command else {
            panic!("expected resolve");
        };
        assert!(ignore_known_bad);
        assert_eq!(fallback_file.as_deref(), Some(std::path::Path::new("/tmp/id")));
    }

    #[test]
    fn parses_probe_subcommand() {
        let cli = Cli::parse_from(["devid", "probe"]);
        assert!(matches!(cli.command, Command::Probe));
    }
}
