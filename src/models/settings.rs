use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub const DEFAULT_FALLBACK_ZONE: &str = "America/New_York";
pub const MIN_SHIFT_PER_DAY_HOURS: f64 = 0.25;

/// Tunables for schedule generation. Every field has a default so partial
/// YAML files are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlannerSettings {
    pub max_shift_per_day_hours: f64,
    pub cbt_min_before_wake_minutes: i64,
    pub light_exposure_minutes: i64,
    pub evening_light_avoid_minutes: i64,
    pub evening_light_seek_before_bed_minutes: i64,
    pub morning_light_avoid_minutes: i64,
    pub caffeine_cutoff_before_bed_minutes: i64,
    pub melatonin_before_bed_minutes: i64,
    pub melatonin_block_minutes: i64,
    pub nap_after_wake_minutes: i64,
    pub nap_minutes: i64,
    pub nap_latest_before_bed_minutes: i64,
    pub in_flight_sleep_min_flight_minutes: i64,
    pub landing_buffer_minutes: i64,
    pub in_flight_landing_margin_minutes: i64,
    pub min_post_arrival_days: u32,
    pub default_days_before_start: u32,
    pub max_days_before_start: u32,
    pub fallback_zone: String,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            max_shift_per_day_hours: 1.5,
            cbt_min_before_wake_minutes: 150,
            light_exposure_minutes: 120,
            evening_light_avoid_minutes: 180,
            evening_light_seek_before_bed_minutes: 240,
            morning_light_avoid_minutes: 120,
            caffeine_cutoff_before_bed_minutes: 360,
            melatonin_before_bed_minutes: 300,
            melatonin_block_minutes: 30,
            nap_after_wake_minutes: 360,
            nap_minutes: 20,
            nap_latest_before_bed_minutes: 240,
            in_flight_sleep_min_flight_minutes: 240,
            landing_buffer_minutes: 45,
            in_flight_landing_margin_minutes: 30,
            min_post_arrival_days: 2,
            default_days_before_start: 2,
            max_days_before_start: 14,
            fallback_zone: DEFAULT_FALLBACK_ZONE.to_string(),
        }
    }
}

impl PlannerSettings {
    pub fn from_yaml_str(raw: &str) -> AppResult<Self> {
        let settings: PlannerSettings = serde_yaml::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.max_shift_per_day_hours.is_finite()
            || self.max_shift_per_day_hours < MIN_SHIFT_PER_DAY_HOURS
        {
            return Err(AppError::validation(format!(
                "maxShiftPerDayHours must be at least {MIN_SHIFT_PER_DAY_HOURS}"
            )));
        }

        let minute_fields = [
            ("cbtMinBeforeWakeMinutes", self.cbt_min_before_wake_minutes),
            ("lightExposureMinutes", self.light_exposure_minutes),
            ("eveningLightAvoidMinutes", self.evening_light_avoid_minutes),
            (
                "eveningLightSeekBeforeBedMinutes",
                self.evening_light_seek_before_bed_minutes,
            ),
            ("morningLightAvoidMinutes", self.morning_light_avoid_minutes),
            (
                "caffeineCutoffBeforeBedMinutes",
                self.caffeine_cutoff_before_bed_minutes,
            ),
            ("melatoninBeforeBedMinutes", self.melatonin_before_bed_minutes),
            ("melatoninBlockMinutes", self.melatonin_block_minutes),
            ("napAfterWakeMinutes", self.nap_after_wake_minutes),
            ("napMinutes", self.nap_minutes),
            ("napLatestBeforeBedMinutes", self.nap_latest_before_bed_minutes),
            (
                "inFlightSleepMinFlightMinutes",
                self.in_flight_sleep_min_flight_minutes,
            ),
            ("landingBufferMinutes", self.landing_buffer_minutes),
            (
                "inFlightLandingMarginMinutes",
                self.in_flight_landing_margin_minutes,
            ),
        ];
        if let Some((name, _)) = minute_fields.iter().find(|(_, value)| *value < 0) {
            return Err(AppError::validation(format!("{name} must not be negative")));
        }

        if self.default_days_before_start > self.max_days_before_start {
            return Err(AppError::validation(
                "defaultDaysBeforeStart must not exceed maxDaysBeforeStart",
            ));
        }

        if self.fallback_zone.trim().is_empty() {
            return Err(AppError::validation("fallbackZone must not be empty"));
        }

        Ok(())
    }
}
