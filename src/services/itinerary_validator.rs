use chrono::NaiveDateTime;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::models::flight::{FlightSegment, FlightSegmentInput};
use crate::services::schedule_utils::parse_local_datetime;

/// Turns raw flights into plannable segments, collecting one message per
/// problem across the whole itinerary.
pub fn validate_itinerary(flights: &[FlightSegmentInput]) -> AppResult<Vec<FlightSegment>> {
    let mut errors = Vec::new();
    let mut segments = Vec::with_capacity(flights.len());

    for (index, flight) in flights.iter().enumerate() {
        let number = index + 1;
        let departure_local = required_datetime(
            &flight.departure_date_time,
            number,
            "Departure date/time",
            &mut errors,
        );
        let departure_zone = required_text(
            &flight.departure_timezone,
            number,
            "Departure timezone",
            &mut errors,
        );
        let arrival_local = required_datetime(
            &flight.arrival_date_time,
            number,
            "Arrival date/time",
            &mut errors,
        );
        let arrival_zone = required_text(
            &flight.arrival_timezone,
            number,
            "Arrival timezone",
            &mut errors,
        );

        if let (Some(dep), Some(dep_zone), Some(arr), Some(arr_zone)) =
            (departure_local, departure_zone, arrival_local, arrival_zone)
        {
            segments.push(FlightSegment {
                departure_airport: airport_code(&flight.departure_airport),
                arrival_airport: airport_code(&flight.arrival_airport),
                departure_local: dep,
                departure_zone: dep_zone,
                arrival_local: arr,
                arrival_zone: arr_zone,
            });
        }
    }

    if errors.is_empty() {
        Ok(segments)
    } else {
        Err(AppError::validation_with_details(
            format!("{} problem(s) in itinerary", errors.len()),
            json!(errors),
        ))
    }
}

fn required_text(
    value: &Option<String>,
    number: usize,
    field: &str,
    errors: &mut Vec<String>,
) -> Option<String> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Some(text.to_string()),
        _ => {
            errors.push(format!("Flight {number}: {field} is required"));
            None
        }
    }
}

fn required_datetime(
    value: &Option<String>,
    number: usize,
    field: &str,
    errors: &mut Vec<String>,
) -> Option<NaiveDateTime> {
    let text = required_text(value, number, field, errors)?;
    match parse_local_datetime(&text) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.push(format!("Flight {number}: {field} is not a valid date/time"));
            None
        }
    }
}

fn airport_code(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(|code| code.trim().to_uppercase())
        .filter(|code| !code.is_empty())
}
