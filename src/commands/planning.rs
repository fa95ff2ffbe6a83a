use tracing::{debug, info};

use crate::error::AppResult;
use crate::models::flight::FlightSegment;
use crate::models::plan::Plan;
use crate::models::profile::SleepProfile;
use crate::models::settings::PlannerSettings;
use crate::services::itinerary_validator::validate_itinerary;
use crate::services::trip_codec::TripRequest;

use super::{AppState, CommandResult};

/// A trip request checked and converted into planner inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedTrip {
    pub profile: SleepProfile,
    pub segments: Vec<FlightSegment>,
    pub days_before_start: u32,
}

pub fn planning_generate(state: &AppState, payload: TripRequest) -> CommandResult<Plan> {
    let planner = state.planner()?;
    let trip = prepare_trip(planner.settings(), &payload)?;
    let plan = planner.generate_plan(&trip.profile, &trip.segments, trip.days_before_start)?;

    info!(
        target: "app::planning",
        legs = plan.legs.len(),
        days = plan.schedule.len(),
        direction = %plan.summary.direction,
        "plan generated"
    );
    Ok(plan)
}

/// Runs the same checks as [`planning_generate`] without planning.
pub fn planning_validate(state: &AppState, payload: TripRequest) -> CommandResult<Vec<FlightSegment>> {
    let settings = state.settings().get()?;
    let trip = prepare_trip(&settings, &payload)?;
    Ok(trip.segments)
}

pub fn prepare_trip(settings: &PlannerSettings, payload: &TripRequest) -> AppResult<PreparedTrip> {
    let home_zone = match payload.home_timezone.trim() {
        "" => settings.fallback_zone.clone(),
        zone => zone.to_string(),
    };
    let profile = SleepProfile::from_clock(
        home_zone,
        payload.usual_bedtime.trim(),
        payload.usual_waketime.trim(),
    )?;
    let segments = validate_itinerary(&payload.flights)?;

    let requested = payload
        .days_before_start
        .unwrap_or(settings.default_days_before_start);
    let days_before_start = requested.min(settings.max_days_before_start);
    if days_before_start != requested {
        debug!(
            target: "app::planning",
            requested,
            clamped = days_before_start,
            "days before start clamped"
        );
    }

    Ok(PreparedTrip {
        profile,
        segments,
        days_before_start,
    })
}
