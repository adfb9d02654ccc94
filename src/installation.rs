//! Installation-scoped identifier used when no device identifier exists.

use std::path::Path;

use uuid::Uuid;

/// Returns the installation ID stored at `path`, creating it on first use.
///
/// The stored value is trusted only if it parses as a UUID; anything else is
/// replaced with a fresh v4 UUID.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn installation_id(path: &Path) -> Result<String, std::io::Error> {
    if let Ok(existing) = std::fs::read_to_string(path) {
        if let Ok(id) = Uuid::parse_str(existing.trim()) {
            return Ok(id.to_string());
        }
        tracing::warn!(path = %path.display(), "replacing malformed installation id");
    }

    let id = Uuid::new_v4().to_string();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, format!("{id}\n"))?;
    tracing::info!(path = %path.display(), "generated installation id");
    Ok(id)
}
