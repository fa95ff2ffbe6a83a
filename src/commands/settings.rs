use serde::Deserialize;

use crate::models::settings::PlannerSettings;
use crate::services::settings_service::SettingsUpdateInput;

use super::{AppState, CommandResult};

pub fn settings_get(state: &AppState) -> CommandResult<PlannerSettings> {
    Ok(state.settings().get()?)
}

pub fn settings_update(
    state: &AppState,
    payload: SettingsUpdatePayload,
) -> CommandResult<PlannerSettings> {
    Ok(state.settings().update(payload.into_input())?)
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdatePayload {
    #[serde(default)]
    max_shift_per_day_hours: Option<f64>,
    #[serde(default)]
    default_days_before_start: Option<u32>,
    #[serde(default)]
    max_days_before_start: Option<u32>,
    #[serde(default)]
    fallback_zone: Option<String>,
    #[serde(default)]
    nap_minutes: Option<i64>,
}

impl SettingsUpdatePayload {
    fn into_input(self) -> SettingsUpdateInput {
        SettingsUpdateInput {
            max_shift_per_day_hours: self.max_shift_per_day_hours,
            default_days_before_start: self.default_days_before_start,
            max_days_before_start: self.max_days_before_start,
            fallback_zone: self.fallback_zone,
            nap_minutes: self.nap_minutes,
        }
    }
}
