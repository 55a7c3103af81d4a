//! Static per-device configuration.

use serde::Deserialize;

/// Configuration for one controllable TV.
///
/// Loaded once at process start and never mutated afterwards. The `key` is
/// the pairing token the TV displays when IP control is enabled; the `mac`
/// is used by clients for wake-on-LAN style power on.
#[derive(Debug, Clone, Deserialize)]
pub struct TvConfig {
    /// Identifier used in API paths (e.g. `office`).
    pub id: String,
    /// Network address of the TV.
    pub host: String,
    /// Physical address of the wired interface.
    pub mac: String,
    /// Secret control token paired with the TV.
    pub key: String,
}
