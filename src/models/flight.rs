use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Raw flight as collected by a form or restored from storage. Every field is
/// optional until validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FlightSegmentInput {
    #[serde(default)]
    pub departure_airport: Option<String>,
    #[serde(default)]
    pub arrival_airport: Option<String>,
    #[serde(default)]
    pub departure_date_time: Option<String>,
    #[serde(default)]
    pub departure_timezone: Option<String>,
    #[serde(default)]
    pub arrival_date_time: Option<String>,
    #[serde(default)]
    pub arrival_timezone: Option<String>,
}

/// A plannable flight. Date-times are local wall-clock readings in their
/// respective zones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FlightSegment {
    #[serde(default)]
    pub departure_airport: Option<String>,
    #[serde(default)]
    pub arrival_airport: Option<String>,
    pub departure_local: NaiveDateTime,
    pub departure_zone: String,
    pub arrival_local: NaiveDateTime,
    pub arrival_zone: String,
}

impl FlightSegment {
    pub fn new(
        departure_local: NaiveDateTime,
        departure_zone: impl Into<String>,
        arrival_local: NaiveDateTime,
        arrival_zone: impl Into<String>,
    ) -> Self {
        Self {
            departure_airport: None,
            arrival_airport: None,
            departure_local,
            departure_zone: departure_zone.into(),
            arrival_local,
            arrival_zone: arrival_zone.into(),
        }
    }

    pub fn with_airports(mut self, departure: impl Into<String>, arrival: impl Into<String>) -> Self {
        self.departure_airport = Some(departure.into());
        self.arrival_airport = Some(arrival.into());
        self
    }

    pub fn route_label(&self) -> String {
        format!(
            "{} → {}",
            self.departure_airport.as_deref().unwrap_or("Departure"),
            self.arrival_airport.as_deref().unwrap_or("Arrival")
        )
    }
}
