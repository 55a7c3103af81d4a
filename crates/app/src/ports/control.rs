//! Device-control port — the narrow interface to a vendor protocol client.

use std::future::Future;

use tvbridge_domain::error::DeviceError;
use tvbridge_domain::interface::NetworkInterface;

/// A client for one TV's IP-control session.
///
/// Wire framing, session encryption/handshake and socket I/O all live behind
/// this trait; the application core only sees typed calls against an open
/// session. Every method suspends on device I/O. All calls except
/// [`connect`](Self::connect) require an open session — implementations
/// report [`DeviceError::NotConnected`] otherwise — which the transaction
/// manager guarantees by bracketing each unit of work.
///
/// Methods take `&mut self`: a session is a single request/response stream
/// and is never shared. Exclusive access is enforced by the per-device lock
/// in [`crate::registry::TvHandle`].
pub trait TvControl: Send + Sync {
    /// Open an authenticated control session.
    fn connect(&mut self) -> impl Future<Output = Result<(), DeviceError>> + Send;

    /// Close the session. Safe to call after a failed operation.
    fn disconnect(&mut self) -> impl Future<Output = Result<(), DeviceError>> + Send;

    /// Raw reply of the current-app query (e.g. `APP:netflix`).
    fn current_app(&mut self) -> impl Future<Output = Result<String, DeviceError>> + Send;

    /// Raw reply of the volume query (e.g. `VOL:42`).
    fn current_volume(&mut self) -> impl Future<Output = Result<String, DeviceError>> + Send;

    /// Raw reply of the mute query (e.g. `MUTE:off`).
    fn mute_state(&mut self) -> impl Future<Output = Result<String, DeviceError>> + Send;

    /// Raw reply of the IP-control feature state query.
    fn ip_control_state(&mut self) -> impl Future<Output = Result<String, DeviceError>> + Send;

    /// Raw MAC address of the given interface.
    fn mac_address(
        &mut self,
        interface: NetworkInterface,
    ) -> impl Future<Output = Result<String, DeviceError>> + Send;

    /// Set the volume level (0–100, validated by the caller).
    fn set_volume(&mut self, volume: u8) -> impl Future<Output = Result<(), DeviceError>> + Send;

    /// Mute or unmute.
    fn set_volume_mute(
        &mut self,
        mute: bool,
    ) -> impl Future<Output = Result<(), DeviceError>> + Send;

    /// Power the TV on (vendor clients typically use wake-on-LAN here).
    fn power_on(&mut self) -> impl Future<Output = Result<(), DeviceError>> + Send;

    /// Power the TV off through the session.
    fn power_off(&mut self) -> impl Future<Output = Result<(), DeviceError>> + Send;

    /// Select an input (validated against the vocabulary by the caller).
    fn set_input(&mut self, input: &str)
    -> impl Future<Output = Result<(), DeviceError>> + Send;

    /// Set the energy-saving level (validated against the vocabulary by the
    /// caller).
    fn set_energy_saving(
        &mut self,
        level: &str,
    ) -> impl Future<Output = Result<(), DeviceError>> + Send;
}
