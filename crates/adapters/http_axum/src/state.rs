//! Shared application state for axum handlers.

use std::sync::Arc;

use tvbridge_app::ports::TvControl;
use tvbridge_app::services::tv_service::TvService;

/// Application state shared across all axum handlers.
///
/// Generic over the device-control client type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the client itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<C> {
    /// TV query/control service.
    pub tv_service: Arc<TvService<C>>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            tv_service: Arc::clone(&self.tv_service),
        }
    }
}

impl<C: TvControl + 'static> AppState<C> {
    /// Create a new application state from the service instance.
    pub fn new(tv_service: TvService<C>) -> Self {
        Self {
            tv_service: Arc::new(tv_service),
        }
    }
}
