//! Best-effort unique device identifier resolution.
//!
//! A [`resolver::IdentifierResolver`] queries identifier providers
//! (telephony ID, secure android ID, wifi MAC, bluetooth MAC) in priority
//! order against a [`context::PlatformContext`] and memoizes the first
//! identifier found. Platform collaborators are ports with live,
//! recording and replaying adapters.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod installation;
pub mod logging;
pub mod ports;
pub mod provider;
pub mod resolver;

use clap::error::ErrorKind;
use clap::Parser;

pub use context::PlatformContext;
pub use error::{IdentifierError, PermissionDenied, ResolveError};
pub use provider::{IdentifierProvider, Probe};
pub use resolver::IdentifierResolver;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}
