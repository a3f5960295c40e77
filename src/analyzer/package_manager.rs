//! Package-manager signals from the project manifest.

use crate::defaults::PACKAGE_MANIFEST;
use serde_json::Value as JsonValue;
use std::path::Path;

/// Reads `package.json` under `root` and reports whether yarn Plug'n'Play
/// is enabled (`installConfig.pnp === true`).
///
/// Deliberately fails open to `false`: a missing manifest, invalid JSON, a
/// missing `installConfig` section, or a missing/false `pnp` flag all yield
/// `false` with nothing surfaced. The wizard calls this unconditionally and
/// must never trip over it.
pub fn pnp_is_enabled(root: &Path) -> bool {
    let Ok(content) = std::fs::read_to_string(root.join(PACKAGE_MANIFEST)) else {
        return false;
    };
    let Ok(manifest) = serde_json::from_str::<JsonValue>(&content) else {
        return false;
    };

    manifest
        .get("installConfig")
        .and_then(|install_config| install_config.get("pnp"))
        .and_then(JsonValue::as_bool)
        .unwrap_or(false)
}
