use jetlag_planner::commands::planning::{planning_generate, planning_validate};
use jetlag_planner::commands::settings::{settings_get, settings_update, SettingsUpdatePayload};
use jetlag_planner::commands::share::{trip_share_decode, trip_share_encode};
use jetlag_planner::commands::AppState;
use jetlag_planner::models::flight::FlightSegmentInput;
use jetlag_planner::models::settings::PlannerSettings;
use jetlag_planner::services::trip_codec::TripRequest;
use jetlag_planner::utils::logger::init_logging;
use tempfile::tempdir;

fn saved_trip() -> TripRequest {
    TripRequest {
        home_timezone: "America/Los_Angeles".into(),
        usual_bedtime: "22:30".into(),
        usual_waketime: "06:30".into(),
        days_before_start: Some(2),
        flights: vec![FlightSegmentInput {
            departure_airport: Some("SFO".into()),
            arrival_airport: Some("CDG".into()),
            departure_date_time: Some("2026-09-10T15:40".into()),
            departure_timezone: Some("SFO".into()),
            arrival_date_time: Some("2026-09-11T11:15".into()),
            arrival_timezone: Some("Europe/Paris".into()),
        }],
        saved_at: Some("2026-08-01T12:00:00Z".into()),
    }
}

#[test]
fn shared_trip_produces_the_same_plan() {
    let state = AppState::new(PlannerSettings::default()).expect("state");
    let trip = saved_trip();

    let code = trip_share_encode(&trip).expect("encode");
    let restored = trip_share_decode(&code).expect("decode");
    assert_eq!(restored, trip);

    let direct = planning_generate(&state, trip).expect("plan");
    let shared = planning_generate(&state, restored).expect("plan");
    assert_eq!(
        serde_json::to_string(&direct).expect("json"),
        serde_json::to_string(&shared).expect("json")
    );

    // PDT to CEST: nine hours ahead, 10h35m in the air
    assert_eq!(direct.summary.total_shift_hours, 9.0);
    assert_eq!(direct.legs[0].duration_minutes, 635);
}

#[test]
fn tampered_share_code_is_a_decode_error() {
    let code = trip_share_encode(&saved_trip()).expect("encode");
    let truncated = &code[..code.len() / 2];

    let err = trip_share_decode(truncated).expect_err("truncated");
    assert_eq!(err.code, "DECODE_ERROR");

    let err = trip_share_decode("%%%").expect_err("not base64");
    assert_eq!(err.code, "DECODE_ERROR");
}

#[test]
fn validate_returns_normalized_segments() {
    let state = AppState::new(PlannerSettings::default()).expect("state");
    let mut trip = saved_trip();
    trip.flights[0].departure_airport = Some(" sfo ".into());

    let segments = planning_validate(&state, trip).expect("valid");
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].departure_airport.as_deref(), Some("SFO"));
    assert_eq!(segments[0].route_label(), "SFO → CDG");
}

#[test]
fn settings_updates_reach_the_planner() {
    let state = AppState::new(PlannerSettings::default()).expect("state");
    assert_eq!(settings_get(&state).expect("settings").max_days_before_start, 14);

    let payload: SettingsUpdatePayload =
        serde_json::from_str(r#"{"maxDaysBeforeStart": 1, "defaultDaysBeforeStart": 1}"#)
            .expect("payload");
    settings_update(&state, payload).expect("update");

    let plan = planning_generate(&state, saved_trip()).expect("plan");
    assert_eq!(plan.schedule[0].label, "1 day before departure");
}

#[test]
fn logging_initializes_once_with_a_file_sink() {
    let dir = tempdir().expect("temp dir");
    let logs = dir.path().join("logs");

    init_logging(Some(&logs)).expect("first init");
    init_logging(None).expect("second init is a no-op");
    assert!(logs.is_dir());

    let state = AppState::new(PlannerSettings::default()).expect("state");
    planning_generate(&state, saved_trip()).expect("plan with logging on");
}
