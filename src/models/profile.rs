use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::services::schedule_utils::{normalize_minutes, parse_time_of_day, MINUTES_PER_DAY};

/// A traveler's habitual sleep window, in minutes since local midnight of the
/// home zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SleepProfile {
    pub home_zone: String,
    pub bedtime: i64,
    pub waketime: i64,
}

impl SleepProfile {
    pub fn new(home_zone: impl Into<String>, bedtime: i64, waketime: i64) -> AppResult<Self> {
        let profile = Self {
            home_zone: home_zone.into(),
            bedtime,
            waketime,
        };
        profile.ensure_valid()?;
        Ok(profile)
    }

    /// Builds a profile from `HH:MM` readings.
    pub fn from_clock(home_zone: impl Into<String>, bedtime: &str, waketime: &str) -> AppResult<Self> {
        Self::new(home_zone, parse_time_of_day(bedtime)?, parse_time_of_day(waketime)?)
    }

    pub fn ensure_valid(&self) -> AppResult<()> {
        if normalize_minutes(self.bedtime) == normalize_minutes(self.waketime) {
            return Err(AppError::validation("bedtime and waketime must differ"));
        }
        Ok(())
    }

    /// Minutes asleep, wrapping past midnight.
    pub fn sleep_duration(&self) -> i64 {
        normalize_minutes(self.waketime - self.bedtime)
    }

    /// Bedtime expressed after waketime within the same waking day, so a
    /// post-midnight bedtime compares later than the morning it follows.
    pub fn anchored_bedtime(&self) -> i64 {
        if self.bedtime <= self.waketime {
            self.bedtime + MINUTES_PER_DAY
        } else {
            self.bedtime
        }
    }
}
