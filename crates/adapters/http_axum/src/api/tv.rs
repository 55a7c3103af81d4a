//! JSON REST handlers for the TV control surface.
//!
//! Every `{id}` segment is resolved against the device registry before any
//! other handler logic; payload values arrive as loose JSON and are coerced
//! here before they reach the service layer.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use tvbridge_app::ports::TvControl;
use tvbridge_domain::error::{NotImplementedError, ValidationError};
use tvbridge_domain::interface::NetworkInterface;
use tvbridge_domain::state::{MacAddresses, TvSnapshot};

use super::{Envelope, vocab};
use crate::error::ApiError;
use crate::state::AppState;

/// Energy-level updates are deliberately switched off; the full
/// validate/set/read-back path stays behind this flag.
const ENERGY_LEVEL_UPDATES_ENABLED: bool = false;

/// Build the `/api/v1/tv` sub-router.
pub fn routes<C>() -> Router<AppState<C>>
where
    C: TvControl + 'static,
{
    Router::new()
        .route("/", get(list::<C>))
        .route("/valid-apps", get(vocab::valid_apps))
        .route("/valid-inputs", get(vocab::valid_inputs))
        .route("/valid-keys", get(vocab::valid_keys))
        .route(
            "/valid-energy-saving-levels",
            get(vocab::valid_energy_saving_levels),
        )
        .route("/valid-picture-modes", get(vocab::valid_picture_modes))
        .route("/{id}", get(snapshot::<C>))
        .route("/{id}/app", get(current_app::<C>).post(update_app::<C>))
        .route("/{id}/volume", get(volume::<C>).post(set_volume::<C>))
        .route("/{id}/ip-control-state", get(ip_control_state::<C>))
        .route("/{id}/mac-address", get(mac_addresses::<C>))
        .route("/{id}/mac-address/{interface}", get(mac_address::<C>))
        .route("/{id}/mute-state", get(mute_state::<C>).post(set_mute::<C>))
        .route("/{id}/power", post(set_power::<C>))
        .route("/{id}/input", post(set_input::<C>))
        .route("/{id}/energy-level", post(set_energy_level::<C>))
        .route("/{id}/send-key", post(send_key::<C>))
}

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct SetVolumeRequest {
    pub payload: SetVolumePayload,
}

#[derive(Deserialize)]
pub struct SetVolumePayload {
    pub volume: Value,
}

#[derive(Deserialize)]
pub struct SetMuteRequest {
    pub payload: SetMutePayload,
}

#[derive(Deserialize)]
pub struct SetMutePayload {
    pub mute: Value,
}

#[derive(Deserialize)]
pub struct SetPowerRequest {
    pub payload: SetPowerPayload,
}

#[derive(Deserialize)]
pub struct SetPowerPayload {
    pub power: Value,
}

#[derive(Deserialize)]
pub struct SetInputRequest {
    pub payload: SetInputPayload,
}

#[derive(Deserialize)]
pub struct SetInputPayload {
    pub input: Value,
}

#[derive(Deserialize)]
pub struct SetEnergyLevelRequest {
    pub payload: SetEnergyLevelPayload,
}

#[derive(Deserialize)]
pub struct SetEnergyLevelPayload {
    #[serde(rename = "energyLevel")]
    pub energy_level: Value,
}

// ---------------------------------------------------------------------------
// Response data
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct AppData {
    app: String,
}

#[derive(Serialize)]
struct VolumeData {
    volume: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IpControlStateData {
    ip_control_state: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MacAddressesData {
    mac_address: MacAddresses,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SingleMacAddressData {
    mac_address: SingleMac,
}

#[derive(Serialize)]
struct SingleMac {
    #[serde(skip_serializing_if = "Option::is_none")]
    wired: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wifi: Option<String>,
}

#[derive(Serialize)]
struct MuteData {
    mute: String,
}

#[derive(Serialize)]
struct PowerData {
    power: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EnergyLevelData {
    energy_level: String,
}

// ---------------------------------------------------------------------------
// Payload coercion
// ---------------------------------------------------------------------------

/// Render a JSON scalar the way it was written, without quoting strings.
fn raw_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Integers pass through; numeric strings are coerced like the protocol's
/// loose clients expect. Everything else is a validation error.
fn coerce_volume(value: &Value) -> Result<i64, ValidationError> {
    value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
        .ok_or_else(|| ValidationError::Volume {
            raw: raw_string(value),
        })
}

fn coerce_mute(value: &Value) -> Result<bool, ValidationError> {
    value.as_bool().ok_or_else(|| ValidationError::Mute {
        raw: raw_string(value),
    })
}

/// Booleans pass through; a numeric `0` is treated as `false` (some remote
/// automation clients send it that way). Anything else is rejected.
fn coerce_power(value: &Value) -> Result<bool, ValidationError> {
    match value {
        Value::Bool(power) => Ok(*power),
        Value::Number(n) if n.as_i64() == Some(0) => Ok(false),
        other => Err(ValidationError::Power {
            raw: raw_string(other),
        }),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `GET /api/v1/tv`
pub async fn list<C: TvControl + 'static>(
    State(state): State<AppState<C>>,
) -> Json<Envelope<Vec<String>>> {
    let ids = state
        .tv_service
        .tv_ids()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(Envelope::new("📺", ids))
}

/// `GET /api/v1/tv/{id}`
pub async fn snapshot<C: TvControl + 'static>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<TvSnapshot>>, ApiError> {
    let data = state.tv_service.snapshot(&id).await?;
    Ok(Json(Envelope::new(format!("TV {id} Information"), data)))
}

/// `GET /api/v1/tv/{id}/app`
pub async fn current_app<C: TvControl + 'static>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<AppData>>, ApiError> {
    let app = state.tv_service.current_app(&id).await?;
    Ok(Json(Envelope::new(format!("TV {id} app"), AppData { app })))
}

/// `POST /api/v1/tv/{id}/app`
pub async fn update_app<C: TvControl + 'static>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<()>>, ApiError> {
    state.tv_service.ensure_known(&id)?;
    Err(NotImplementedError {
        action: "Updating app",
    }
    .into())
}

/// `GET /api/v1/tv/{id}/volume`
pub async fn volume<C: TvControl + 'static>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<VolumeData>>, ApiError> {
    let volume = state.tv_service.volume(&id).await?;
    Ok(Json(Envelope::new(
        format!("TV {id} volume"),
        VolumeData { volume },
    )))
}

/// `POST /api/v1/tv/{id}/volume`
pub async fn set_volume<C: TvControl + 'static>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
    Json(req): Json<SetVolumeRequest>,
) -> Result<Json<Envelope<VolumeData>>, ApiError> {
    state.tv_service.ensure_known(&id)?;
    let requested = coerce_volume(&req.payload.volume)?;
    let volume = state.tv_service.set_volume(&id, requested).await?;
    Ok(Json(Envelope::new(
        format!("TV {id} volume updated"),
        VolumeData { volume },
    )))
}

/// `GET /api/v1/tv/{id}/ip-control-state`
pub async fn ip_control_state<C: TvControl + 'static>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<IpControlStateData>>, ApiError> {
    let ip_control_state = state.tv_service.ip_control_state(&id).await?;
    Ok(Json(Envelope::new(
        format!("TV {id} IP control state"),
        IpControlStateData { ip_control_state },
    )))
}

/// `GET /api/v1/tv/{id}/mac-address`
pub async fn mac_addresses<C: TvControl + 'static>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<MacAddressesData>>, ApiError> {
    let mac_address = state.tv_service.mac_addresses(&id).await?;
    Ok(Json(Envelope::new(
        format!("TV {id} mac addresses"),
        MacAddressesData { mac_address },
    )))
}

/// `GET /api/v1/tv/{id}/mac-address/{interface}`
pub async fn mac_address<C: TvControl + 'static>(
    State(state): State<AppState<C>>,
    Path((id, interface)): Path<(String, String)>,
) -> Result<Json<Envelope<SingleMacAddressData>>, ApiError> {
    state.tv_service.ensure_known(&id)?;
    let interface: NetworkInterface = interface.parse()?;
    let mac = state.tv_service.mac_address(&id, interface).await?;
    let mac_address = match interface {
        NetworkInterface::Wired => SingleMac {
            wired: Some(mac),
            wifi: None,
        },
        NetworkInterface::Wifi => SingleMac {
            wired: None,
            wifi: Some(mac),
        },
    };
    Ok(Json(Envelope::new(
        format!("TV {id} {interface} mac address"),
        SingleMacAddressData { mac_address },
    )))
}

/// `GET /api/v1/tv/{id}/mute-state`
pub async fn mute_state<C: TvControl + 'static>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<MuteData>>, ApiError> {
    let mute = state.tv_service.mute_state(&id).await?;
    Ok(Json(Envelope::new(
        format!("TV {id} mute state"),
        MuteData { mute },
    )))
}

/// `POST /api/v1/tv/{id}/mute-state`
pub async fn set_mute<C: TvControl + 'static>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
    Json(req): Json<SetMuteRequest>,
) -> Result<Json<Envelope<MuteData>>, ApiError> {
    state.tv_service.ensure_known(&id)?;
    let requested = coerce_mute(&req.payload.mute)?;
    let mute = state.tv_service.set_mute(&id, requested).await?;
    Ok(Json(Envelope::new(
        format!("TV {id} mute state updated"),
        MuteData { mute },
    )))
}

/// `POST /api/v1/tv/{id}/power`
pub async fn set_power<C: TvControl + 'static>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
    Json(req): Json<SetPowerRequest>,
) -> Result<Json<Envelope<PowerData>>, ApiError> {
    state.tv_service.ensure_known(&id)?;
    let requested = coerce_power(&req.payload.power)?;
    let power = state.tv_service.set_power(&id, requested).await?;
    Ok(Json(Envelope::new(
        format!("TV {id} power updated"),
        PowerData { power },
    )))
}

/// `POST /api/v1/tv/{id}/input`
pub async fn set_input<C: TvControl + 'static>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
    Json(req): Json<SetInputRequest>,
) -> Result<Json<Envelope<AppData>>, ApiError> {
    state.tv_service.ensure_known(&id)?;
    let input = req
        .payload
        .input
        .as_str()
        .ok_or_else(|| ValidationError::Input {
            raw: raw_string(&req.payload.input),
        })?;
    let app = state.tv_service.set_input(&id, input).await?;
    Ok(Json(Envelope::new(
        format!("TV {id} input updated"),
        AppData { app },
    )))
}

/// `POST /api/v1/tv/{id}/energy-level`
pub async fn set_energy_level<C: TvControl + 'static>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
    Json(req): Json<SetEnergyLevelRequest>,
) -> Result<Json<Envelope<EnergyLevelData>>, ApiError> {
    state.tv_service.ensure_known(&id)?;
    if !ENERGY_LEVEL_UPDATES_ENABLED {
        return Err(NotImplementedError {
            action: "Updating energy saving level",
        }
        .into());
    }
    let level = req
        .payload
        .energy_level
        .as_str()
        .ok_or_else(|| ValidationError::EnergySavingLevel {
            raw: raw_string(&req.payload.energy_level),
        })?;
    let energy_level = state.tv_service.set_energy_saving(&id, level).await?;
    Ok(Json(Envelope::new(
        format!("TV {id} energy saving level updated"),
        EnergyLevelData { energy_level },
    )))
}

/// `POST /api/v1/tv/{id}/send-key`
pub async fn send_key<C: TvControl + 'static>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<()>>, ApiError> {
    state.tv_service.ensure_known(&id)?;
    Err(NotImplementedError {
        action: "Sending a key",
    }
    .into())
}
