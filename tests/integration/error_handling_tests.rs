// Error handling and degraded-input cases

use chrono::NaiveDate;
use jetlag_planner::commands::planning::{planning_generate, planning_validate};
use jetlag_planner::commands::AppState;
use jetlag_planner::models::flight::{FlightSegment, FlightSegmentInput};
use jetlag_planner::models::plan::{Direction, EventKind};
use jetlag_planner::models::profile::SleepProfile;
use jetlag_planner::models::settings::PlannerSettings;
use jetlag_planner::services::settings_service::SettingsService;
use jetlag_planner::services::trip_codec::TripRequest;
use jetlag_planner::{AppError, JetLagPlanner};
use tempfile::tempdir;

fn state() -> AppState {
    AppState::new(PlannerSettings::default()).expect("state")
}

fn request(flights: Vec<FlightSegmentInput>) -> TripRequest {
    TripRequest {
        home_timezone: "Europe/London".into(),
        usual_bedtime: "23:00".into(),
        usual_waketime: "07:00".into(),
        days_before_start: Some(1),
        flights,
        saved_at: None,
    }
}

#[test]
fn empty_itinerary_reports_no_flights() {
    let err = planning_generate(&state(), request(Vec::new())).expect_err("no flights");
    assert_eq!(err.code, "NO_FLIGHTS");
    assert_eq!(err.message, "No flights provided");
    assert!(err.details.is_none());
}

#[test]
fn planner_rejects_empty_itinerary_directly() {
    let profile = SleepProfile::from_clock("UTC", "23:00", "07:00").expect("profile");
    let result = JetLagPlanner::default().generate_plan(&profile, &[], 3);
    assert!(matches!(result, Err(AppError::NoFlights)));
}

#[test]
fn incomplete_flights_list_every_problem() {
    let flights = vec![
        FlightSegmentInput {
            departure_date_time: Some("2026-06-01T10:00".into()),
            departure_timezone: Some("LHR".into()),
            ..FlightSegmentInput::default()
        },
        FlightSegmentInput {
            departure_date_time: Some("June first".into()),
            departure_timezone: Some("LHR".into()),
            arrival_date_time: Some("2026-06-01T18:00".into()),
            arrival_timezone: Some("JFK".into()),
            ..FlightSegmentInput::default()
        },
    ];

    let err = planning_validate(&state(), request(flights)).expect_err("invalid");
    assert_eq!(err.code, "VALIDATION_ERROR");
    let details = err.details.expect("details");
    let messages: Vec<&str> = details
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|value| value.as_str())
        .collect();
    assert_eq!(
        messages,
        [
            "Flight 1: Arrival date/time is required",
            "Flight 1: Arrival timezone is required",
            "Flight 2: Departure date/time is not a valid date/time",
        ]
    );
}

#[test]
fn identical_bed_and_wake_is_rejected() {
    let mut payload = request(Vec::new());
    payload.usual_waketime = "23:00".into();
    let err = planning_generate(&state(), payload).expect_err("invalid profile");
    assert_eq!(err.code, "VALIDATION_ERROR");
}

#[test]
fn unknown_zones_degrade_instead_of_failing() {
    let planner = JetLagPlanner::default();
    let profile = SleepProfile::from_clock("UTC", "23:00", "07:00").expect("profile");
    let departure = NaiveDate::from_ymd_opt(2026, 6, 1)
        .and_then(|day| day.and_hms_opt(10, 0, 0))
        .expect("departure");
    let arrival = NaiveDate::from_ymd_opt(2026, 6, 1)
        .and_then(|day| day.and_hms_opt(15, 0, 0))
        .expect("arrival");
    let segment = FlightSegment::new(departure, "Mars/Olympus", arrival, "XXX");

    let plan = planner.generate_plan(&profile, &[segment], 2).expect("plan");
    assert_eq!(plan.summary.direction, Direction::East);
    assert_eq!(plan.summary.total_shift_hours, 0.0);
    assert_eq!(plan.legs[0].duration_minutes, 300);
    assert!(!plan.legs[0].is_zone_aware());

    let departure_day = plan.day(departure.date()).expect("departure day");
    // five hours is long enough for an in-flight nap
    let rest = departure_day.in_flight_rest().expect("in-flight rest");
    assert_eq!(rest.kind, EventKind::Nap);
}

#[test]
fn bad_settings_file_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("planner.yaml");

    std::fs::write(&path, "maxShiftPerDayHours: [1, 2]\n").expect("write");
    assert!(matches!(SettingsService::from_path(&path), Err(AppError::Yaml(_))));

    std::fs::write(&path, "landingBufferMinutes: -10\n").expect("write");
    assert!(matches!(
        SettingsService::from_path(&path),
        Err(AppError::Validation { .. })
    ));

    let missing = dir.path().join("absent.yaml");
    let service = SettingsService::from_path(&missing).expect("defaults");
    assert_eq!(service.get().expect("settings"), PlannerSettings::default());
}
