use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::flight::FlightSegment;
use crate::services::schedule_utils::normalize_minutes;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    East,
    West,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Sign applied to the daily shift: advancing moves sleep earlier.
    pub fn shift_sign(&self) -> f64 {
        match self {
            Direction::East => -1.0,
            Direction::West => 1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Direction {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "east" => Ok(Direction::East),
            "west" => Ok(Direction::West),
            other => Err(format!("unsupported direction: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    PreFlight,
    InTransit,
    PostArrival,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::PreFlight => "pre-flight",
            Phase::InTransit => "in-transit",
            Phase::PostArrival => "post-arrival",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Sleep,
    LightSeek,
    LightAvoid,
    Caffeine,
    Melatonin,
    Nap,
    Flight,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Sleep => "sleep",
            EventKind::LightSeek => "light-seek",
            EventKind::LightAvoid => "light-avoid",
            EventKind::Caffeine => "caffeine",
            EventKind::Melatonin => "melatonin",
            EventKind::Nap => "nap",
            EventKind::Flight => "flight",
        }
    }

    /// Short display label for agenda views.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Sleep => "Sleep",
            EventKind::LightSeek => "Seek Light",
            EventKind::LightAvoid => "Avoid Light",
            EventKind::Caffeine => "Caffeine OK",
            EventKind::Melatonin => "Melatonin",
            EventKind::Nap => "Nap",
            EventKind::Flight => "Flight",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for EventKind {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "sleep" => Ok(EventKind::Sleep),
            "light-seek" => Ok(EventKind::LightSeek),
            "light-avoid" => Ok(EventKind::LightAvoid),
            "caffeine" => Ok(EventKind::Caffeine),
            "melatonin" => Ok(EventKind::Melatonin),
            "nap" => Ok(EventKind::Nap),
            "flight" => Ok(EventKind::Flight),
            other => Err(format!("unsupported event kind: {other}")),
        }
    }
}

/// One recommendation on a scheduled day. Times are minutes since local
/// midnight and are left unnormalized; `end_time < start_time` after
/// normalization means the event runs past midnight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanEvent {
    pub kind: EventKind,
    pub start_time: i64,
    pub end_time: i64,
    pub description: String,
    #[serde(default)]
    pub in_flight: bool,
    /// Index into [`Plan::legs`] for flight blocks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_ref: Option<usize>,
}

impl PlanEvent {
    pub fn new(kind: EventKind, start_time: i64, end_time: i64, description: impl Into<String>) -> Self {
        Self {
            kind,
            start_time,
            end_time,
            description: description.into(),
            in_flight: false,
            flight_ref: None,
        }
    }

    pub fn duration_minutes(&self) -> i64 {
        let span = self.end_time - self.start_time;
        if span >= 0 {
            span
        } else {
            normalize_minutes(span)
        }
    }

    pub fn normalized_start(&self) -> i64 {
        normalize_minutes(self.start_time)
    }

    pub fn normalized_end(&self) -> i64 {
        normalize_minutes(self.end_time)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledDay {
    pub date: NaiveDate,
    pub day_index: u32,
    pub label: String,
    pub phase: Phase,
    pub target_bedtime: i64,
    pub target_waketime: i64,
    pub events: Vec<PlanEvent>,
}

impl ScheduledDay {
    pub fn events_of(&self, kind: EventKind) -> impl Iterator<Item = &PlanEvent> {
        self.events.iter().filter(move |event| event.kind == kind)
    }

    pub fn in_flight_rest(&self) -> Option<&PlanEvent> {
        self.events.iter().find(|event| event.in_flight)
    }
}

/// Direction and size of the clock shift for a whole trip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripShift {
    pub direction: Direction,
    pub magnitude_hours: f64,
    pub days_to_adjust: u32,
}

/// A flight with its resolved offsets and true elapsed duration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlightLeg {
    pub segment: FlightSegment,
    pub duration_minutes: i64,
    #[serde(default)]
    pub departure_offset: Option<f64>,
    #[serde(default)]
    pub arrival_offset: Option<f64>,
}

impl FlightLeg {
    /// Both endpoints resolved; `false` means the duration is naive wall-clock
    /// arithmetic.
    pub fn is_zone_aware(&self) -> bool {
        self.departure_offset.is_some() && self.arrival_offset.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    pub direction: Direction,
    pub total_shift_hours: f64,
    pub days_to_adjust: u32,
    pub departure_zone: String,
    pub arrival_zone: String,
    pub first_departure: NaiveDateTime,
    pub last_arrival: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub summary: TripSummary,
    pub legs: Vec<FlightLeg>,
    pub schedule: Vec<ScheduledDay>,
}

impl Plan {
    pub fn day(&self, date: NaiveDate) -> Option<&ScheduledDay> {
        self.schedule.iter().find(|day| day.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kinds_round_trip_through_their_wire_names() {
        for kind in [
            EventKind::Sleep,
            EventKind::LightSeek,
            EventKind::LightAvoid,
            EventKind::Caffeine,
            EventKind::Melatonin,
            EventKind::Nap,
            EventKind::Flight,
        ] {
            assert_eq!(EventKind::try_from(kind.as_str()), Ok(kind));
        }
        assert!(EventKind::try_from("exercise").is_err());
    }

    #[test]
    fn serializes_kinds_and_phases_in_kebab_case() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&EventKind::LightAvoid)?, "\"light-avoid\"");
        assert_eq!(serde_json::to_string(&Phase::PostArrival)?, "\"post-arrival\"");
        assert_eq!(serde_json::to_string(&Direction::West)?, "\"west\"");
        Ok(())
    }

    #[test]
    fn wrapping_event_duration() {
        let sleep = PlanEvent::new(EventKind::Sleep, 1260, 300, "Sleep");
        assert_eq!(sleep.duration_minutes(), 480);
        assert_eq!(sleep.normalized_end(), 300);

        let nap = PlanEvent::new(EventKind::Nap, 720, 740, "Nap");
        assert_eq!(nap.duration_minutes(), 20);
    }
}
