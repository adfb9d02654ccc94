//! Command dispatch and handlers.

pub mod probe;
pub mod resolve;

use std::io::Write;

use crate::cli::Command;
use crate::config::{Mode, Settings};
use crate::context::PlatformContext;
use crate::logging;

/// Dispatch a parsed command to its handler.
///
/// Ports are served according to the environment: `DEVID_RECORD=<path>`
/// records every platform interaction to a cassette, `DEVID_REPLAY=<path>`
/// serves a recorded cassette instead of the host.
///
/// # Errors
///
/// Returns an error string if configuration is invalid, the handler fails,
/// or a recorded cassette cannot be written.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let settings = Settings::from_env().map_err(|e| e.to_string())?;
    logging::init(settings.log_level);

    let ctx = match &settings.mode {
        Mode::Live => PlatformContext::live(&settings),
        Mode::Record(path) => PlatformContext::recording(path, &settings),
        Mode::Replay(path) => PlatformContext::replaying(path)?,
    };

    let result = dispatch_with_context(command, &ctx, &mut std::io::stdout().lock());

    // The cassette is written even when the handler failed.
    if let Some(path) = ctx.finish()? {
        eprintln!("Recording saved to: {}", path.display());
    }
    result
}

/// Dispatch a command with the given platform context.
fn dispatch_with_context(
    command: &Command,
    ctx: &PlatformContext,
    out: &mut impl Write,
) -> Result<(), String> {
    match command {
        Command::Resolve { ignore_known_bad, fallback_file } => {
            resolve::run(ctx, *ignore_known_bad, fallback_file.as_deref(), out)
        }
        Command::Probe => probe::run(ctx, out),
    }
}
