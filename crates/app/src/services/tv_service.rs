//! TV service — high-level intents over device transactions.
//!
//! Each method validates its input against the vocabulary registry, resolves
//! the device through the [`TvRegistry`], and runs exactly one transaction.
//! Set operations read the affected state back inside the same transaction so
//! callers see the post-command value.

use tvbridge_domain::error::{DeviceError, TvBridgeError, ValidationError};
use tvbridge_domain::interface::NetworkInterface;
use tvbridge_domain::sanitize::strip_control_characters;
use tvbridge_domain::state::{MacAddresses, TvSnapshot};
use tvbridge_domain::vocab;

use crate::ops;
use crate::ports::TvControl;
use crate::registry::TvRegistry;

/// Application service for querying and controlling TVs.
pub struct TvService<C> {
    registry: TvRegistry<C>,
}

impl<C: TvControl> TvService<C> {
    /// Create a new service over a startup-built registry.
    pub fn new(registry: TvRegistry<C>) -> Self {
        Self { registry }
    }

    /// Configured TV ids, sorted.
    #[must_use]
    pub fn tv_ids(&self) -> Vec<&str> {
        self.registry.ids()
    }

    /// Check that `id` names a configured TV without touching the device.
    ///
    /// # Errors
    ///
    /// Returns [`TvBridgeError::NotFound`] for unknown ids.
    pub fn ensure_known(&self, id: &str) -> Result<(), TvBridgeError> {
        self.registry.get(id).map(|_| ())
    }

    /// Full device snapshot: app, volume, IP-control state, both MAC
    /// addresses, and mute — gathered in a single transaction.
    ///
    /// # Errors
    ///
    /// Returns [`TvBridgeError::NotFound`] for unknown ids, or a transaction
    /// error from the device.
    #[tracing::instrument(skip(self))]
    pub async fn snapshot(&self, id: &str) -> Result<TvSnapshot, TvBridgeError> {
        let tv = self.registry.get(id)?;
        tv.transaction(async |client| {
            Ok(TvSnapshot {
                app: ops::current_app(client).await?,
                volume: ops::volume(client).await?,
                ip_control_state: ops::ip_control_state(client).await?,
                mac_address: MacAddresses {
                    wired: ops::mac_address(client, "wired").await?,
                    wifi: ops::mac_address(client, "wifi").await?,
                },
                mute: ops::mute_state(client).await?,
            })
        })
        .await
    }

    /// Current foreground application.
    ///
    /// # Errors
    ///
    /// Returns [`TvBridgeError::NotFound`] for unknown ids, or a transaction
    /// error from the device.
    #[tracing::instrument(skip(self))]
    pub async fn current_app(&self, id: &str) -> Result<String, TvBridgeError> {
        let tv = self.registry.get(id)?;
        tv.transaction(async |client| ops::current_app(client).await)
            .await
    }

    /// Current volume as a number.
    ///
    /// # Errors
    ///
    /// Returns [`TvBridgeError::NotFound`] for unknown ids, a transaction
    /// error from the device, or a protocol error when the reply is not
    /// numeric.
    #[tracing::instrument(skip(self))]
    pub async fn volume(&self, id: &str) -> Result<u8, TvBridgeError> {
        let tv = self.registry.get(id)?;
        let raw = tv
            .transaction(async |client| ops::volume(client).await)
            .await?;
        parse_volume(&raw)
    }

    /// Set the volume and read the post-command level back.
    ///
    /// # Errors
    ///
    /// Returns [`TvBridgeError::Validation`] when `volume` is outside 0–100,
    /// [`TvBridgeError::NotFound`] for unknown ids, or a transaction error
    /// from the device.
    #[tracing::instrument(skip(self))]
    pub async fn set_volume(&self, id: &str, volume: i64) -> Result<u8, TvBridgeError> {
        let level = u8::try_from(volume)
            .ok()
            .filter(|level| *level <= 100)
            .ok_or_else(|| ValidationError::Volume {
                raw: volume.to_string(),
            })?;
        let tv = self.registry.get(id)?;
        let raw = tv
            .transaction(async |client| {
                client.set_volume(level).await?;
                ops::volume(client).await
            })
            .await?;
        parse_volume(&raw)
    }

    /// Current mute state.
    ///
    /// # Errors
    ///
    /// Returns [`TvBridgeError::NotFound`] for unknown ids, or a transaction
    /// error from the device.
    #[tracing::instrument(skip(self))]
    pub async fn mute_state(&self, id: &str) -> Result<String, TvBridgeError> {
        let tv = self.registry.get(id)?;
        tv.transaction(async |client| ops::mute_state(client).await)
            .await
    }

    /// Mute or unmute, reading the post-command state back.
    ///
    /// # Errors
    ///
    /// Returns [`TvBridgeError::NotFound`] for unknown ids, or a transaction
    /// error from the device.
    #[tracing::instrument(skip(self))]
    pub async fn set_mute(&self, id: &str, mute: bool) -> Result<String, TvBridgeError> {
        let tv = self.registry.get(id)?;
        tv.transaction(async |client| {
            client.set_volume_mute(mute).await?;
            ops::mute_state(client).await
        })
        .await
    }

    /// IP-control feature state.
    ///
    /// # Errors
    ///
    /// Returns [`TvBridgeError::NotFound`] for unknown ids, or a transaction
    /// error from the device.
    #[tracing::instrument(skip(self))]
    pub async fn ip_control_state(&self, id: &str) -> Result<String, TvBridgeError> {
        let tv = self.registry.get(id)?;
        tv.transaction(async |client| ops::ip_control_state(client).await)
            .await
    }

    /// MAC addresses of both interfaces.
    ///
    /// # Errors
    ///
    /// Returns [`TvBridgeError::NotFound`] for unknown ids, or a transaction
    /// error from the device.
    #[tracing::instrument(skip(self))]
    pub async fn mac_addresses(&self, id: &str) -> Result<MacAddresses, TvBridgeError> {
        let tv = self.registry.get(id)?;
        tv.transaction(async |client| {
            Ok(MacAddresses {
                wired: ops::mac_address(client, "wired").await?,
                wifi: ops::mac_address(client, "wifi").await?,
            })
        })
        .await
    }

    /// MAC address of one interface.
    ///
    /// # Errors
    ///
    /// Returns [`TvBridgeError::NotFound`] for unknown ids, or a transaction
    /// error from the device.
    #[tracing::instrument(skip(self))]
    pub async fn mac_address(
        &self,
        id: &str,
        interface: NetworkInterface,
    ) -> Result<String, TvBridgeError> {
        let tv = self.registry.get(id)?;
        tv.transaction(async |client| {
            Ok(strip_control_characters(
                &client.mac_address(interface).await?,
            ))
        })
        .await
    }

    /// Power the TV on or off. Returns `"on"` / `"off"` — the protocol has
    /// no power read-back (a TV that just powered off no longer answers).
    ///
    /// # Errors
    ///
    /// Returns [`TvBridgeError::NotFound`] for unknown ids, or a transaction
    /// error from the device.
    #[tracing::instrument(skip(self))]
    pub async fn set_power(&self, id: &str, power: bool) -> Result<&'static str, TvBridgeError> {
        let tv = self.registry.get(id)?;
        tv.transaction(async |client| {
            if power {
                client.power_on().await?;
            } else {
                client.power_off().await?;
            }
            Ok(if power { "on" } else { "off" })
        })
        .await
    }

    /// Select an input and read the resulting foreground app back.
    ///
    /// # Errors
    ///
    /// Returns [`TvBridgeError::Validation`] for inputs outside the
    /// vocabulary, [`TvBridgeError::NotFound`] for unknown ids, or a
    /// transaction error from the device.
    #[tracing::instrument(skip(self))]
    pub async fn set_input(&self, id: &str, input: &str) -> Result<String, TvBridgeError> {
        if !vocab::is_input(input) {
            return Err(ValidationError::Input {
                raw: input.to_string(),
            }
            .into());
        }
        let tv = self.registry.get(id)?;
        tv.transaction(async |client| {
            client.set_input(input).await?;
            ops::current_app(client).await
        })
        .await
    }

    /// Set the energy-saving level.
    ///
    /// # Errors
    ///
    /// Returns [`TvBridgeError::Validation`] for levels outside the
    /// vocabulary, [`TvBridgeError::NotFound`] for unknown ids, or a
    /// transaction error from the device.
    #[tracing::instrument(skip(self))]
    pub async fn set_energy_saving(&self, id: &str, level: &str) -> Result<String, TvBridgeError> {
        if !vocab::is_energy_saving_level(level) {
            return Err(ValidationError::EnergySavingLevel {
                raw: level.to_string(),
            }
            .into());
        }
        let tv = self.registry.get(id)?;
        tv.transaction(async |client| {
            client.set_energy_saving(level).await?;
            Ok(level.to_string())
        })
        .await
    }
}

fn parse_volume(raw: &str) -> Result<u8, TvBridgeError> {
    raw.parse()
        .map_err(|_| DeviceError::Protocol(format!("unexpected volume reply '{raw}'")).into())
}
