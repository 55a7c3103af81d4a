//! Network interface vocabulary for MAC address queries.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Network interface a TV can report a MAC address for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkInterface {
    Wired,
    Wifi,
}

impl NetworkInterface {
    /// Every interface the protocol knows about.
    pub const ALL: [Self; 2] = [Self::Wired, Self::Wifi];

    /// Protocol name of the interface.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wired => "wired",
            Self::Wifi => "wifi",
        }
    }
}

impl fmt::Display for NetworkInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkInterface {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "wired" => Ok(Self::Wired),
            "wifi" => Ok(Self::Wifi),
            other => Err(ValidationError::Interface {
                raw: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_interfaces() {
        assert_eq!("wired".parse::<NetworkInterface>().unwrap(), NetworkInterface::Wired);
        assert_eq!("wifi".parse::<NetworkInterface>().unwrap(), NetworkInterface::Wifi);
    }

    #[test]
    fn should_reject_unknown_interface() {
        let err = "bluetooth".parse::<NetworkInterface>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid TV interface: bluetooth, must be 'wired' or 'wifi'"
        );
    }

    #[test]
    fn should_round_trip_display() {
        for interface in NetworkInterface::ALL {
            assert_eq!(interface.as_str().parse::<NetworkInterface>().unwrap(), interface);
        }
    }
}
