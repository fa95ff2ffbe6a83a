use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AppError;
use crate::services::zone_catalog::{AirportEntry, ZoneEntry};

use super::{AppState, CommandResult};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ZoneResolution {
    pub input: String,
    pub zone_id: Option<String>,
    pub offset_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airport: Option<AirportEntry>,
}

/// Resolves an airport code or zone id. `at` is an RFC 3339 instant used for
/// the DST-aware offset; without it the standard offset is reported.
pub fn timezone_resolve(
    state: &AppState,
    identifier: &str,
    at: Option<&str>,
) -> CommandResult<ZoneResolution> {
    let instant = at
        .map(|raw| {
            DateTime::parse_from_rfc3339(raw.trim())
                .map(|parsed| parsed.with_timezone(&Utc))
                .map_err(|err| AppError::validation(format!("invalid instant {raw}: {err}")))
        })
        .transpose()?;

    let resolver = state.resolver();
    Ok(ZoneResolution {
        input: identifier.to_string(),
        zone_id: resolver.resolve_zone_id(identifier),
        offset_hours: resolver.offset_for(identifier, instant),
        airport: resolver.airport(identifier.trim()).cloned(),
    })
}

pub fn timezone_detect(state: &AppState) -> CommandResult<String> {
    Ok(state.resolver().detect_local_zone())
}

pub fn timezone_list(state: &AppState) -> CommandResult<Vec<ZoneEntry>> {
    Ok(state.resolver().zones().to_vec())
}
