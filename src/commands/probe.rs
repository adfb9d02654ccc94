//! `devid probe` command.

use std::io::Write;

use crate::context::PlatformContext;
use crate::provider::{default_chain, Probe};

/// Execute the `probe` command.
///
/// Queries every provider once, in priority order, and prints one
/// `<provider>\t<outcome>` line each. Unlike resolution, a denied
/// permission is reported for that provider and probing continues.
///
/// # Errors
///
/// Returns an error string if output cannot be written.
pub fn run(ctx: &PlatformContext, out: &mut impl Write) -> Result<(), String> {
    for provider in default_chain() {
        let outcome = match provider.produce(ctx) {
            Ok(Probe::Success(id)) => format!("ok {id}"),
            Ok(Probe::NotUnique(reason)) => format!("not-unique {reason}"),
            Ok(Probe::Unavailable) => "unavailable".to_string(),
            Err(denied) => format!("denied {}", denied.capability),
        };
        writeln!(out, "{}\t{outcome}", provider.name()).map_err(|e| e.to_string())?;
    }
    Ok(())
}
