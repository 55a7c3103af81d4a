//! Error taxonomy shared across the workspace.
//!
//! Three families, matching how failures surface over HTTP: validation and
//! not-found errors are rejected before any device I/O, not-implemented marks
//! deliberately unsupported operations, and device/transaction errors wrap
//! failures of the live protocol session. Each layer converts into
//! [`TvBridgeError`] via `#[from]`.

/// A request value rejected before any device interaction.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Volume outside 0–100 or not an integer.
    #[error("Invalid TV volume: {raw}, must be a value between 0 and 100")]
    Volume { raw: String },

    /// Mute payload was not a boolean.
    #[error("Invalid TV mute state: {raw}, must be 'true' or 'false'")]
    Mute { raw: String },

    /// Power payload was not a boolean (after the numeric `0` coercion).
    #[error("Invalid TV power: {raw}, must be 'true' or 'false'")]
    Power { raw: String },

    /// Input not present in the vocabulary registry.
    #[error("Invalid TV input: {raw}, must be in list from '/api/v1/tv/valid-inputs'")]
    Input { raw: String },

    /// Energy-saving level not present in the vocabulary registry.
    #[error(
        "Invalid TV energy saving level: {raw}, must be in list from '/api/v1/tv/valid-energy-saving-levels'"
    )]
    EnergySavingLevel { raw: String },

    /// Interface other than `wired` / `wifi`.
    #[error("Invalid TV interface: {raw}, must be 'wired' or 'wifi'")]
    Interface { raw: String },
}

/// Lookup of an identifier that is not in the registry.
#[derive(Debug, thiserror::Error)]
#[error("Invalid {entity} id: {id}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A deliberately unsupported operation, distinct from a runtime failure.
#[derive(Debug, thiserror::Error)]
#[error("{action} is not implemented")]
pub struct NotImplementedError {
    pub action: &'static str,
}

/// Failure reported by the device-control client.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// An operation was invoked while no session is open.
    #[error("connection to the TV is not open")]
    NotConnected,

    /// Socket-level failure.
    #[error("device connection failed: {0}")]
    Io(#[from] std::io::Error),

    /// The device answered with something the protocol does not allow.
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// Failure of the connect→operate→disconnect bracketing itself.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The session could not be opened; the operation never ran.
    #[error("failed to open the device connection: {0}")]
    Connect(#[source] DeviceError),

    /// The operation succeeded but the session could not be closed.
    #[error("failed to close the device connection: {0}")]
    Disconnect(#[source] DeviceError),

    /// The operation failed and the disconnect attempt failed too.
    /// Both are kept so neither failure is silently dropped.
    #[error("operation failed ({operation}); disconnect also failed ({disconnect})")]
    Aborted {
        operation: Box<TvBridgeError>,
        disconnect: DeviceError,
    },
}

/// Top-level error for the workspace.
#[derive(Debug, thiserror::Error)]
pub enum TvBridgeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    NotImplemented(#[from] NotImplementedError),

    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error(transparent)]
    Transaction(#[from] TransactionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_descriptive_validation_messages() {
        let err = ValidationError::Volume {
            raw: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid TV volume: abc, must be a value between 0 and 100"
        );

        let err = ValidationError::Input {
            raw: "hdmi9".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid TV input: hdmi9, must be in list from '/api/v1/tv/valid-inputs'"
        );
    }

    #[test]
    fn should_render_unknown_id_wording() {
        let err = NotFoundError {
            entity: "TV",
            id: "garage".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid TV id: garage");
    }

    #[test]
    fn should_render_not_implemented_wording() {
        let err = NotImplementedError {
            action: "Sending a key",
        };
        assert_eq!(err.to_string(), "Sending a key is not implemented");
    }

    #[test]
    fn should_keep_both_failures_when_disconnect_also_fails() {
        let operation = TvBridgeError::Device(DeviceError::Protocol("bad frame".to_string()));
        let err = TransactionError::Aborted {
            operation: Box::new(operation),
            disconnect: DeviceError::NotConnected,
        };

        let rendered = err.to_string();
        assert!(rendered.contains("bad frame"));
        assert!(rendered.contains("not open"));
    }
}
