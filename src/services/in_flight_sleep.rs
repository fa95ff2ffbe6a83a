use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::plan::Direction;
use crate::services::schedule_utils::format_duration;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ArrivalWindow {
    /// 05:00–14:59 local; a full day awake follows landing.
    Morning,
    /// 18:00–04:59 local; bed is close after landing.
    Evening,
    Afternoon,
}

impl ArrivalWindow {
    pub fn classify(arrival_local: NaiveDateTime) -> Self {
        match arrival_local.hour() {
            5..=14 => ArrivalWindow::Morning,
            18..=23 | 0..=4 => ArrivalWindow::Evening,
            _ => ArrivalWindow::Afternoon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InFlightSleep {
    pub duration_minutes: i64,
    /// Minutes after takeoff.
    pub start_offset_minutes: i64,
    pub arrival: ArrivalWindow,
    pub description: String,
}

impl InFlightSleep {
    /// Sleep of two hours or more is a full sleep block, shorter is a nap.
    pub fn is_long(&self) -> bool {
        self.duration_minutes >= 120
    }
}

const MORNING_BONUS_MINUTES: i64 = 60;
const EVENING_CUT_MINUTES: i64 = 30;
const EVENING_FLOOR_MINUTES: i64 = 90;
const EASTWARD_BONUS_MINUTES: i64 = 15;
const BONUS_LANDING_GAP_MINUTES: i64 = 60;

/// Sizes the rest a traveler should take on board from the flight length,
/// the local arrival hour and the travel direction.
pub fn size_in_flight_sleep(
    flight_minutes: i64,
    arrival_local: NaiveDateTime,
    direction: Direction,
    landing_buffer_minutes: i64,
) -> InFlightSleep {
    let arrival = ArrivalWindow::classify(arrival_local);

    let (mut duration, start_offset) = match flight_minutes {
        m if m < 360 => (90, 60),
        m if m < 600 => (150, 90),
        m if m < 840 => (210, 120),
        _ => (270, 120),
    };
    let bonus_cap = flight_minutes - start_offset - BONUS_LANDING_GAP_MINUTES;

    match arrival {
        ArrivalWindow::Morning => {
            duration = (duration + MORNING_BONUS_MINUTES).min(bonus_cap);
        }
        ArrivalWindow::Evening => {
            duration = (duration - EVENING_CUT_MINUTES).max(EVENING_FLOOR_MINUTES);
        }
        ArrivalWindow::Afternoon => {}
    }

    if direction == Direction::East {
        duration = (duration + EASTWARD_BONUS_MINUTES).min(bonus_cap);
    }

    let duration = duration
        .min(flight_minutes - start_offset - landing_buffer_minutes)
        .max(0);

    InFlightSleep {
        duration_minutes: duration,
        start_offset_minutes: start_offset,
        arrival,
        description: describe(duration, arrival),
    }
}

fn describe(duration: i64, arrival: ArrivalWindow) -> String {
    let length = format_duration(duration);
    let morning = arrival == ArrivalWindow::Morning;
    if duration >= 180 {
        let purpose = if morning {
            "rest up before a full day ahead"
        } else {
            "helps shift to destination time"
        };
        format!("In-flight sleep ({length}) - {purpose}")
    } else if duration >= 120 {
        let purpose = if morning {
            "banking sleep for morning arrival"
        } else {
            "helps adjust to destination time"
        };
        format!("In-flight rest ({length}) - {purpose}")
    } else {
        format!("In-flight nap ({length}) - one sleep cycle to refresh")
    }
}
