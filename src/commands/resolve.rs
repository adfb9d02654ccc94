//! `devid resolve` command.

use std::io::Write;
use std::path::Path;

use crate::context::PlatformContext;
use crate::error::{IdentifierError, ResolveError};
use crate::installation::installation_id;
use crate::resolver::IdentifierResolver;

/// Execute the `resolve` command.
///
/// Prints the device identifier. With `fallback_file`, a device that has no
/// identifier at all gets the installation ID stored there instead; a
/// non-unique value or a missing permission is still an error.
///
/// # Errors
///
/// Returns an error string if no identifier can be produced.
pub fn run(
    ctx: &PlatformContext,
    ignore_known_bad: bool,
    fallback_file: Option<&Path>,
    out: &mut impl Write,
) -> Result<(), String> {
    let resolver = IdentifierResolver::new();
    let id = match (resolver.resolve(ctx, ignore_known_bad), fallback_file) {
        (Ok(id), _) => id,
        (Err(ResolveError::Identifier(IdentifierError::NoIdentifierFound)), Some(path)) => {
            tracing::warn!("no device identifier found, using installation id");
            installation_id(path)
                .map_err(|e| format!("Failed to store installation id at {}: {e}", path.display()))?
        }
        (Err(e), _) if e.is_not_unique() => {
            return Err(format!("{e}\nRerun with --ignore-known-bad to try the remaining sources."));
        }
        (Err(e), _) => return Err(e.to_string()),
    };
    writeln!(out, "{id}").map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::test_support::{context, context_with_services};
    use crate::provider::KNOWN_BAD_ANDROID_ID;
    use serde_json::json;

    fn output(result: Result<(), String>, out: Vec<u8>) -> Result<String, String> {
        result.map(|()| String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_identifier() {
        let ctx = context(&[
            ("permissions", "check", json!(true)),
            ("settings", "get_string", json!("a1b2c3d4e5f60718")),
        ]);
        let mut out = Vec::new();
        let result = run(&ctx, false, None, &mut out);
        assert_eq!(output(result, out).unwrap(), "a1b2c3d4e5f60718\n");
    }

    #[test]
    fn not_unique_suggests_ignore_flag() {
        let ctx = context(&[
            ("permissions", "check", json!(true)),
            ("settings", "get_string", json!(KNOWN_BAD_ANDROID_ID)),
        ]);
        let err = run(&ctx, false, None, &mut Vec::new()).unwrap_err();
        assert!(err.contains("Android ID bug"));
        assert!(err.contains("--ignore-known-bad"));
    }

    #[test]
    fn falls_back_to_installation_id() {
        let dir = std::env::temp_dir().join("devid_cmd_resolve_fallback_test");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("installation");
        let ctx = context_with_services(
            &[],
            &[("permissions", "check", json!(true)), ("settings", "get_string", json!(null))],
        );

        let mut out = Vec::new();
        let result = run(&ctx, false, Some(&path), &mut out);
        let printed = output(result, out).unwrap();
        assert_eq!(printed.trim(), std::fs::read_to_string(&path).unwrap().trim());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn permission_error_is_not_masked_by_fallback() {
        let ctx = context(&[("permissions", "check", json!(false))]);
        let err = run(&ctx, false, Some(Path::new("/nonexistent/devid")), &mut Vec::new())
            .unwrap_err();
        assert!(err.contains("READ_PHONE_STATE"));
    }
}
