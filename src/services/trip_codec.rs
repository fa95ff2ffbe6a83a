use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::flight::FlightSegmentInput;

/// A saved trip form: profile fields plus raw flights. This is the shape
/// shared through links and kept in local storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    #[serde(default)]
    pub home_timezone: String,
    /// `HH:MM`
    #[serde(default)]
    pub usual_bedtime: String,
    /// `HH:MM`
    #[serde(default)]
    pub usual_waketime: String,
    #[serde(default)]
    pub days_before_start: Option<u32>,
    #[serde(default)]
    pub flights: Vec<FlightSegmentInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

impl TripRequest {
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

pub fn encode_share_code(request: &TripRequest) -> AppResult<String> {
    let json = serde_json::to_vec(request)?;
    let code = URL_SAFE_NO_PAD.encode(json);
    debug!(target: "app::share", flights = request.flights.len(), len = code.len(), "trip encoded");
    Ok(code)
}

pub fn decode_share_code(code: &str) -> AppResult<TripRequest> {
    let bytes = URL_SAFE_NO_PAD
        .decode(code.trim())
        .map_err(|err| AppError::decode(format!("share code is not valid base64: {err}")))?;
    serde_json::from_slice(&bytes)
        .map_err(|err| AppError::decode(format!("share code does not hold a trip: {err}")))
}
