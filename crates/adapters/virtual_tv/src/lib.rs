//! # tvbridge-adapter-virtual-tv
//!
//! Virtual/demo TV client that simulates the vendor IP-control session for
//! testing and demonstration purposes.
//!
//! The simulator reproduces the protocol's texture so the rest of the stack
//! is exercised for real: replies carry their field-name prefix and a
//! trailing CRLF (which the sanitizer must strip), sessions are strictly
//! bracketed (double connect and any operation outside an open session are
//! errors), and state set through commands is visible to later queries.
//!
//! ## Dependency rule
//!
//! Depends on `tvbridge-app` (the `TvControl` port) and `tvbridge-domain`
//! only.

use tvbridge_app::ports::TvControl;
use tvbridge_domain::config::TvConfig;
use tvbridge_domain::error::DeviceError;
use tvbridge_domain::interface::NetworkInterface;

/// Simulated wifi MAC: the configured (wired) address with its last octet
/// replaced, so the two interfaces stay distinguishable in responses.
fn wifi_mac(wired: &str) -> String {
    match wired.rsplit_once(':') {
        Some((prefix, _)) => format!("{prefix}:FE"),
        None => wired.to_string(),
    }
}

/// A simulated TV holding its state in memory.
pub struct VirtualTv {
    connected: bool,
    volume: u8,
    mute: bool,
    app: String,
    wired_mac: String,
    wifi_mac: String,
}

impl VirtualTv {
    /// Create a simulated TV for the given device configuration.
    #[must_use]
    pub fn new(config: &TvConfig) -> Self {
        Self {
            connected: false,
            volume: 10,
            mute: false,
            app: "com.webos.app.livetv".to_string(),
            wired_mac: config.mac.clone(),
            wifi_mac: wifi_mac(&config.mac),
        }
    }

    fn ensure_open(&self) -> Result<(), DeviceError> {
        if self.connected {
            Ok(())
        } else {
            Err(DeviceError::NotConnected)
        }
    }
}

impl TvControl for VirtualTv {
    async fn connect(&mut self) -> Result<(), DeviceError> {
        if self.connected {
            return Err(DeviceError::Protocol(
                "session is already open".to_string(),
            ));
        }
        self.connected = true;
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<(), DeviceError> {
        self.connected = false;
        Ok(())
    }

    async fn current_app(&mut self) -> Result<String, DeviceError> {
        self.ensure_open()?;
        Ok(format!("APP:{}\r\n", self.app))
    }

    async fn current_volume(&mut self) -> Result<String, DeviceError> {
        self.ensure_open()?;
        Ok(format!("VOL:{}\r\n", self.volume))
    }

    async fn mute_state(&mut self) -> Result<String, DeviceError> {
        self.ensure_open()?;
        Ok(format!(
            "MUTE:{}\r\n",
            if self.mute { "on" } else { "off" }
        ))
    }

    async fn ip_control_state(&mut self) -> Result<String, DeviceError> {
        self.ensure_open()?;
        Ok("ON\r\n".to_string())
    }

    async fn mac_address(
        &mut self,
        interface: NetworkInterface,
    ) -> Result<String, DeviceError> {
        self.ensure_open()?;
        Ok(format!(
            "{}\r\n",
            match interface {
                NetworkInterface::Wired => &self.wired_mac,
                NetworkInterface::Wifi => &self.wifi_mac,
            }
        ))
    }

    async fn set_volume(&mut self, volume: u8) -> Result<(), DeviceError> {
        self.ensure_open()?;
        self.volume = volume;
        Ok(())
    }

    async fn set_volume_mute(&mut self, mute: bool) -> Result<(), DeviceError> {
        self.ensure_open()?;
        self.mute = mute;
        Ok(())
    }

    async fn power_on(&mut self) -> Result<(), DeviceError> {
        // Wake-on-LAN in a real client; nothing to do for the simulator.
        self.ensure_open()?;
        Ok(())
    }

    async fn power_off(&mut self) -> Result<(), DeviceError> {
        self.ensure_open()?;
        Ok(())
    }

    async fn set_input(&mut self, input: &str) -> Result<(), DeviceError> {
        self.ensure_open()?;
        self.app = format!("com.webos.app.{input}");
        Ok(())
    }

    async fn set_energy_saving(&mut self, _level: &str) -> Result<(), DeviceError> {
        self.ensure_open()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TvConfig {
        TvConfig {
            id: "office".to_string(),
            host: "192.168.1.40".to_string(),
            mac: "54:AB:3A:12:34:56".to_string(),
            key: "A1B2C3D4".to_string(),
        }
    }

    #[tokio::test]
    async fn should_reject_operations_outside_an_open_session() {
        let mut tv = VirtualTv::new(&config());
        assert!(matches!(
            tv.current_volume().await,
            Err(DeviceError::NotConnected)
        ));
        assert!(matches!(
            tv.set_volume(10).await,
            Err(DeviceError::NotConnected)
        ));
    }

    #[tokio::test]
    async fn should_reject_double_connect() {
        let mut tv = VirtualTv::new(&config());
        tv.connect().await.unwrap();
        assert!(matches!(
            tv.connect().await,
            Err(DeviceError::Protocol(_))
        ));
    }

    #[tokio::test]
    async fn should_reply_with_protocol_texture() {
        let mut tv = VirtualTv::new(&config());
        tv.connect().await.unwrap();
        assert_eq!(tv.current_volume().await.unwrap(), "VOL:10\r\n");
        assert_eq!(tv.mute_state().await.unwrap(), "MUTE:off\r\n");
        assert_eq!(
            tv.current_app().await.unwrap(),
            "APP:com.webos.app.livetv\r\n"
        );
    }

    #[tokio::test]
    async fn should_remember_state_set_through_commands() {
        let mut tv = VirtualTv::new(&config());
        tv.connect().await.unwrap();
        tv.set_volume(42).await.unwrap();
        tv.set_volume_mute(true).await.unwrap();
        tv.set_input("hdmi3").await.unwrap();

        assert_eq!(tv.current_volume().await.unwrap(), "VOL:42\r\n");
        assert_eq!(tv.mute_state().await.unwrap(), "MUTE:on\r\n");
        assert_eq!(
            tv.current_app().await.unwrap(),
            "APP:com.webos.app.hdmi3\r\n"
        );
    }

    #[tokio::test]
    async fn should_report_distinct_macs_per_interface() {
        let mut tv = VirtualTv::new(&config());
        tv.connect().await.unwrap();
        assert_eq!(
            tv.mac_address(NetworkInterface::Wired).await.unwrap(),
            "54:AB:3A:12:34:56\r\n"
        );
        assert_eq!(
            tv.mac_address(NetworkInterface::Wifi).await.unwrap(),
            "54:AB:3A:12:34:FE\r\n"
        );
    }

    #[tokio::test]
    async fn should_survive_a_full_session_cycle() {
        let mut tv = VirtualTv::new(&config());
        tv.connect().await.unwrap();
        tv.disconnect().await.unwrap();
        tv.connect().await.unwrap();
        tv.disconnect().await.unwrap();
    }
}
