//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod tv;
pub mod vocab;

use axum::Json;
use axum::Router;
use axum::routing::get;
use serde::Serialize;

use tvbridge_app::ports::TvControl;

use crate::state::AppState;

/// Response envelope shared by every endpoint.
#[derive(Serialize)]
pub struct Envelope<T: Serialize> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl Envelope<()> {
    /// Envelope with a message and no data.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> Envelope<T> {
    /// Envelope with a message and a data payload.
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }
}

/// Build the `/api/v1` sub-router.
pub fn routes<C>() -> Router<AppState<C>>
where
    C: TvControl + 'static,
{
    Router::new()
        .route("/", get(hello))
        .nest("/tv", tv::routes())
}

async fn hello() -> Json<Envelope<()>> {
    Json(Envelope::message("API - 👋🌎"))
}
