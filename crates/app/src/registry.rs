//! Per-device transaction manager and the startup-built device registry.
//!
//! The protocol session is a single request/response stream, so commands from
//! concurrent requests must never interleave. Each configured TV gets one
//! [`TvHandle`] owning a `tokio::sync::Mutex` around its client; the lock is
//! per device, never global, so transactions against different TVs proceed in
//! parallel.

use std::collections::HashMap;

use tokio::sync::Mutex;

use tvbridge_domain::config::TvConfig;
use tvbridge_domain::error::{NotFoundError, TransactionError, TvBridgeError};

use crate::ports::TvControl;

/// Exclusive owner of one TV's protocol client.
pub struct TvHandle<C> {
    config: TvConfig,
    client: Mutex<C>,
}

impl<C: TvControl> TvHandle<C> {
    /// Bind a client to its device configuration.
    pub fn new(config: TvConfig, client: C) -> Self {
        Self {
            config,
            client: Mutex::new(client),
        }
    }

    /// Configuration this handle was built from.
    #[must_use]
    pub fn config(&self) -> &TvConfig {
        &self.config
    }

    /// Run one exclusive connect→operate→disconnect cycle.
    ///
    /// The per-device lock is held for the whole cycle, so a second
    /// transaction against the same TV waits until this one has fully
    /// completed — including the disconnect — before its own connect.
    /// Suspending on device I/O inside `operation` does not release the lock.
    ///
    /// # Errors
    ///
    /// A connect failure aborts before the operation runs. Disconnect is
    /// attempted even when the operation fails; when both fail, both errors
    /// are surfaced through [`TransactionError::Aborted`].
    #[tracing::instrument(skip(self, operation), fields(tv = %self.config.id))]
    pub async fn transaction<T, F>(&self, operation: F) -> Result<T, TvBridgeError>
    where
        F: AsyncFnOnce(&mut C) -> Result<T, TvBridgeError>,
    {
        let mut client = self.client.lock().await;
        client.connect().await.map_err(TransactionError::Connect)?;

        let result = operation(&mut *client).await;
        let disconnect = client.disconnect().await;

        match (result, disconnect) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(err)) => Err(TransactionError::Disconnect(err).into()),
            (Err(err), Ok(())) => Err(err),
            (Err(operation), Err(disconnect)) => Err(TransactionError::Aborted {
                operation: Box::new(operation),
                disconnect,
            }
            .into()),
        }
    }
}

/// Registry of configured TVs, built once at process start.
///
/// No dynamic registration: the set of devices is fixed for the lifetime of
/// the process.
pub struct TvRegistry<C> {
    tvs: HashMap<String, TvHandle<C>>,
}

impl<C: TvControl> TvRegistry<C> {
    /// Build the registry from `(configuration, client)` pairs.
    #[must_use]
    pub fn new(tvs: impl IntoIterator<Item = (TvConfig, C)>) -> Self {
        Self {
            tvs: tvs
                .into_iter()
                .map(|(config, client)| (config.id.clone(), TvHandle::new(config, client)))
                .collect(),
        }
    }

    /// Resolve a TV id, rejecting unknown ids before any device I/O.
    ///
    /// # Errors
    ///
    /// Returns [`TvBridgeError::NotFound`] when the id is not configured.
    pub fn get(&self, id: &str) -> Result<&TvHandle<C>, TvBridgeError> {
        self.tvs.get(id).ok_or_else(|| {
            NotFoundError {
                entity: "TV",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Configured TV ids, sorted for stable listings.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.tvs.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tvbridge_domain::error::DeviceError;
    use tvbridge_domain::interface::NetworkInterface;

    /// Mock client that tracks session state and observes concurrent opens.
    struct ProbeTv {
        open: bool,
        connects: usize,
        disconnects: usize,
        fail_disconnect: bool,
        active: Arc<AtomicUsize>,
        max_active: Arc<AtomicUsize>,
    }

    impl ProbeTv {
        fn new(active: Arc<AtomicUsize>, max_active: Arc<AtomicUsize>) -> Self {
            Self {
                open: false,
                connects: 0,
                disconnects: 0,
                fail_disconnect: false,
                active,
                max_active,
            }
        }
    }

    impl TvControl for ProbeTv {
        async fn connect(&mut self) -> Result<(), DeviceError> {
            assert!(!self.open, "connect while a session is already open");
            self.open = true;
            self.connects += 1;
            let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_active.fetch_max(now, Ordering::SeqCst);
            Ok(())
        }
        async fn disconnect(&mut self) -> Result<(), DeviceError> {
            self.open = false;
            self.disconnects += 1;
            self.active.fetch_sub(1, Ordering::SeqCst);
            if self.fail_disconnect {
                return Err(DeviceError::Protocol("close refused".to_string()));
            }
            Ok(())
        }
        async fn current_app(&mut self) -> Result<String, DeviceError> {
            if !self.open {
                return Err(DeviceError::NotConnected);
            }
            Ok("APP:netflix".to_string())
        }
        async fn current_volume(&mut self) -> Result<String, DeviceError> {
            if !self.open {
                return Err(DeviceError::NotConnected);
            }
            Ok("VOL:7".to_string())
        }
        async fn mute_state(&mut self) -> Result<String, DeviceError> {
            Ok("MUTE:off".to_string())
        }
        async fn ip_control_state(&mut self) -> Result<String, DeviceError> {
            Ok("ON".to_string())
        }
        async fn mac_address(
            &mut self,
            _interface: NetworkInterface,
        ) -> Result<String, DeviceError> {
            Ok("54:AB:3A:12:34:56".to_string())
        }
        async fn set_volume(&mut self, _volume: u8) -> Result<(), DeviceError> {
            Ok(())
        }
        async fn set_volume_mute(&mut self, _mute: bool) -> Result<(), DeviceError> {
            Ok(())
        }
        async fn power_on(&mut self) -> Result<(), DeviceError> {
            Ok(())
        }
        async fn power_off(&mut self) -> Result<(), DeviceError> {
            Ok(())
        }
        async fn set_input(&mut self, _input: &str) -> Result<(), DeviceError> {
            Ok(())
        }
        async fn set_energy_saving(&mut self, _level: &str) -> Result<(), DeviceError> {
            Ok(())
        }
    }

    fn office_config() -> TvConfig {
        TvConfig {
            id: "office".to_string(),
            host: "192.168.1.40".to_string(),
            mac: "54:AB:3A:12:34:56".to_string(),
            key: "A1B2C3D4".to_string(),
        }
    }

    fn probe_handle() -> (TvHandle<ProbeTv>, Arc<AtomicUsize>) {
        let active = Arc::new(AtomicUsize::new(0));
        let max_active = Arc::new(AtomicUsize::new(0));
        let handle = TvHandle::new(
            office_config(),
            ProbeTv::new(active, Arc::clone(&max_active)),
        );
        (handle, max_active)
    }

    #[tokio::test]
    async fn should_bracket_operation_with_connect_and_disconnect() {
        let (handle, _) = probe_handle();

        let app = handle
            .transaction(async |tv| crate::ops::current_app(tv).await)
            .await
            .unwrap();
        assert_eq!(app, "netflix");

        let client = handle.client.lock().await;
        assert_eq!(client.connects, 1);
        assert_eq!(client.disconnects, 1);
        assert!(!client.open);
    }

    #[tokio::test]
    async fn should_disconnect_even_when_operation_fails() {
        let (handle, _) = probe_handle();

        let result: Result<(), TvBridgeError> = handle
            .transaction(async |_tv| {
                Err(DeviceError::Protocol("command rejected".to_string()).into())
            })
            .await;

        assert!(matches!(
            result,
            Err(TvBridgeError::Device(DeviceError::Protocol(_)))
        ));

        let client = handle.client.lock().await;
        assert_eq!(client.connects, 1);
        assert_eq!(client.disconnects, 1, "disconnect must still be attempted");
    }

    #[tokio::test]
    async fn should_surface_both_errors_when_disconnect_also_fails() {
        let (handle, _) = probe_handle();
        handle.client.lock().await.fail_disconnect = true;

        let result: Result<(), TvBridgeError> = handle
            .transaction(async |_tv| {
                Err(DeviceError::Protocol("command rejected".to_string()).into())
            })
            .await;

        let Err(TvBridgeError::Transaction(TransactionError::Aborted {
            operation,
            disconnect,
        })) = result
        else {
            panic!("expected an aborted transaction");
        };
        assert!(operation.to_string().contains("command rejected"));
        assert!(disconnect.to_string().contains("close refused"));
    }

    #[tokio::test]
    async fn should_report_disconnect_failure_after_successful_operation() {
        let (handle, _) = probe_handle();
        handle.client.lock().await.fail_disconnect = true;

        let result = handle
            .transaction(async |tv| crate::ops::current_app(tv).await)
            .await;

        assert!(matches!(
            result,
            Err(TvBridgeError::Transaction(TransactionError::Disconnect(_)))
        ));
    }

    #[tokio::test]
    async fn should_serialize_transactions_against_the_same_tv() {
        let (handle, max_active) = probe_handle();

        let slow = handle.transaction(async |tv| {
            let volume = crate::ops::volume(tv).await?;
            // Suspend mid-transaction; the lock must not be released.
            tokio::task::yield_now().await;
            tokio::task::yield_now().await;
            crate::ops::current_app(tv).await?;
            Ok(volume)
        });
        let contender = handle.transaction(async |tv| crate::ops::current_app(tv).await);

        let (volume, app) = tokio::join!(slow, contender);
        assert_eq!(volume.unwrap(), "7");
        assert_eq!(app.unwrap(), "netflix");

        assert_eq!(
            max_active.load(Ordering::SeqCst),
            1,
            "no two transactions may hold the connection open concurrently"
        );
        let client = handle.client.lock().await;
        assert_eq!(client.connects, 2);
        assert_eq!(client.disconnects, 2);
    }

    #[tokio::test]
    async fn should_run_transactions_against_different_tvs_in_parallel() {
        let active = Arc::new(AtomicUsize::new(0));
        let max_active = Arc::new(AtomicUsize::new(0));
        let office = TvHandle::new(
            office_config(),
            ProbeTv::new(Arc::clone(&active), Arc::clone(&max_active)),
        );
        let mut living_config = office_config();
        living_config.id = "living-room".to_string();
        let living = TvHandle::new(
            living_config,
            ProbeTv::new(Arc::clone(&active), Arc::clone(&max_active)),
        );

        let first = office.transaction(async |tv| {
            tokio::task::yield_now().await;
            crate::ops::current_app(tv).await
        });
        let second = living.transaction(async |tv| {
            tokio::task::yield_now().await;
            crate::ops::current_app(tv).await
        });

        let (first, second) = tokio::join!(first, second);
        first.unwrap();
        second.unwrap();

        assert_eq!(
            max_active.load(Ordering::SeqCst),
            2,
            "independent devices must not be serialized behind one lock"
        );
    }

    #[tokio::test]
    async fn should_resolve_known_ids_and_reject_unknown_ones() {
        let active = Arc::new(AtomicUsize::new(0));
        let max_active = Arc::new(AtomicUsize::new(0));
        let registry = TvRegistry::new([(
            office_config(),
            ProbeTv::new(active, max_active),
        )]);

        assert_eq!(registry.get("office").unwrap().config().id, "office");
        assert_eq!(registry.ids(), vec!["office"]);

        let err = registry.get("garage").unwrap_err();
        assert_eq!(err.to_string(), "Invalid TV id: garage");
        assert!(matches!(err, TvBridgeError::NotFound(_)));
    }
}
