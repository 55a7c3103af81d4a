//! Typed operations against an open device connection.
//!
//! Each function wraps one protocol query, passing the raw reply through the
//! sanitizer so no control characters or field prefixes ever reach a caller.
//! All of them must run inside a transaction (see [`crate::registry::TvHandle`]).

use tvbridge_domain::error::TvBridgeError;
use tvbridge_domain::interface::NetworkInterface;
use tvbridge_domain::sanitize::{sanitize, strip_control_characters};

use crate::ports::TvControl;

/// Current foreground application, without the `APP:` prefix.
pub async fn current_app<C: TvControl>(tv: &mut C) -> Result<String, TvBridgeError> {
    Ok(sanitize(&tv.current_app().await?, "APP:"))
}

/// Volume level as a sanitized string, without the `VOL:` prefix.
/// Numeric conversion is the caller's concern.
pub async fn volume<C: TvControl>(tv: &mut C) -> Result<String, TvBridgeError> {
    Ok(sanitize(&tv.current_volume().await?, "VOL:"))
}

/// Mute state, without the `MUTE:` prefix.
pub async fn mute_state<C: TvControl>(tv: &mut C) -> Result<String, TvBridgeError> {
    Ok(sanitize(&tv.mute_state().await?, "MUTE:"))
}

/// State of the IP-control feature.
pub async fn ip_control_state<C: TvControl>(tv: &mut C) -> Result<String, TvBridgeError> {
    Ok(strip_control_characters(&tv.ip_control_state().await?))
}

/// MAC address of the named interface.
///
/// An unknown interface yields a descriptive message *value* — not an error —
/// and the device is never queried for it.
pub async fn mac_address<C: TvControl>(
    tv: &mut C,
    interface: &str,
) -> Result<String, TvBridgeError> {
    let Ok(interface) = interface.parse::<NetworkInterface>() else {
        return Ok(format!("Invalid interface '{interface}'"));
    };
    Ok(strip_control_characters(&tv.mac_address(interface).await?))
}
