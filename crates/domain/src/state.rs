//! Device state value objects assembled from sanitized replies.

use serde::Serialize;

/// Full device snapshot returned by the information endpoint.
///
/// `volume` stays the sanitized protocol string; only the dedicated volume
/// endpoint coerces it to a number.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TvSnapshot {
    /// Foreground application identifier.
    pub app: String,
    /// Volume level as reported by the device.
    pub volume: String,
    /// State of the IP-control feature.
    pub ip_control_state: String,
    /// MAC addresses of both network interfaces.
    pub mac_address: MacAddresses,
    /// Mute state as reported by the device.
    pub mute: String,
}

/// MAC addresses for the wired and wifi interfaces.
#[derive(Debug, Clone, Serialize)]
pub struct MacAddresses {
    pub wired: String,
    pub wifi: String,
}
