//! Vocabulary enumeration endpoints.
//!
//! These expose the closed protocol sets so clients can discover what the
//! control endpoints will accept. Pure lookups — no device interaction.

use axum::Json;

use tvbridge_domain::vocab;

use super::Envelope;

/// `GET /api/v1/tv/valid-apps`
pub async fn valid_apps() -> Json<Envelope<Vec<&'static str>>> {
    Json(Envelope::new("Valid apps", vocab::app_names()))
}

/// `GET /api/v1/tv/valid-inputs`
pub async fn valid_inputs() -> Json<Envelope<Vec<&'static str>>> {
    Json(Envelope::new("Valid inputs", vocab::INPUTS.to_vec()))
}

/// `GET /api/v1/tv/valid-keys`
pub async fn valid_keys() -> Json<Envelope<Vec<&'static str>>> {
    Json(Envelope::new("Valid keys", vocab::KEYS.to_vec()))
}

/// `GET /api/v1/tv/valid-energy-saving-levels`
pub async fn valid_energy_saving_levels() -> Json<Envelope<Vec<&'static str>>> {
    Json(Envelope::new(
        "Valid energy saving levels",
        vocab::ENERGY_SAVING_LEVELS.to_vec(),
    ))
}

/// `GET /api/v1/tv/valid-picture-modes`
pub async fn valid_picture_modes() -> Json<Envelope<Vec<&'static str>>> {
    Json(Envelope::new(
        "Valid picture modes",
        vocab::PICTURE_MODES.to_vec(),
    ))
}
