use chrono::NaiveDate;
use jetlag_planner::commands::planning::planning_generate;
use jetlag_planner::commands::AppState;
use jetlag_planner::models::flight::FlightSegmentInput;
use jetlag_planner::models::plan::{Direction, EventKind, Phase};
use jetlag_planner::models::profile::SleepProfile;
use jetlag_planner::models::settings::PlannerSettings;
use jetlag_planner::services::schedule_utils::normalize_minutes;
use jetlag_planner::services::trip_codec::TripRequest;
use tempfile::tempdir;

fn flight(
    from: &str,
    to: &str,
    departure: &str,
    departure_zone: &str,
    arrival: &str,
    arrival_zone: &str,
) -> FlightSegmentInput {
    FlightSegmentInput {
        departure_airport: Some(from.into()),
        arrival_airport: Some(to.into()),
        departure_date_time: Some(departure.into()),
        departure_timezone: Some(departure_zone.into()),
        arrival_date_time: Some(arrival.into()),
        arrival_timezone: Some(arrival_zone.into()),
    }
}

fn trip(flights: Vec<FlightSegmentInput>, days_before_start: Option<u32>) -> TripRequest {
    TripRequest {
        home_timezone: "Pacific/Honolulu".into(),
        usual_bedtime: "21:00".into(),
        usual_waketime: "05:00".into(),
        days_before_start,
        flights,
        saved_at: None,
    }
}

fn honolulu_to_tokyo() -> FlightSegmentInput {
    flight(
        "HNL",
        "NRT",
        "2026-01-31T09:00",
        "Pacific/Honolulu",
        "2026-02-01T17:00",
        "Asia/Tokyo",
    )
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn honolulu_to_tokyo_end_to_end() {
    let state = AppState::new(PlannerSettings::default()).expect("state");
    let plan = planning_generate(&state, trip(vec![honolulu_to_tokyo()], Some(2))).expect("plan");

    assert_eq!(plan.legs.len(), 1);
    assert_eq!(plan.legs[0].duration_minutes, 780);
    assert_eq!(plan.summary.direction, Direction::West);
    assert_eq!(plan.summary.total_shift_hours, 5.0);
    assert_eq!(plan.summary.departure_zone, "Pacific/Honolulu");
    assert_eq!(plan.summary.arrival_zone, "Asia/Tokyo");

    assert_eq!(plan.schedule[0].date, date(2026, 1, 29));
    assert_eq!(plan.schedule[0].phase, Phase::PreFlight);

    let departure_day = plan.day(date(2026, 1, 31)).expect("departure day");
    assert_eq!(departure_day.label, "Departure Day");
    let rest = departure_day.in_flight_rest().expect("in-flight sleep");
    assert_eq!(rest.kind, EventKind::Sleep);
    assert!(rest.duration_minutes() > 150 && rest.duration_minutes() <= 300);

    // no melatonin when the clock is being delayed
    assert!(plan
        .schedule
        .iter()
        .all(|day| day.events_of(EventKind::Melatonin).next().is_none()));
}

#[test]
fn tokyo_to_honolulu_advances_the_clock() {
    let state = AppState::new(PlannerSettings::default()).expect("state");
    let homebound = flight(
        "NRT",
        "HNL",
        "2026-02-10T19:00",
        "Asia/Tokyo",
        "2026-02-10T07:00",
        "Pacific/Honolulu",
    );
    let plan = planning_generate(&state, trip(vec![homebound], Some(2))).expect("plan");

    assert_eq!(plan.summary.direction, Direction::East);
    assert_eq!(plan.summary.total_shift_hours, 5.0);
    assert_eq!(plan.summary.days_to_adjust, 4);
    assert_eq!(plan.legs[0].duration_minutes, 420);

    let labels: Vec<&str> = plan.schedule.iter().map(|day| day.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "2 days before departure",
            "1 day before departure",
            "Departure Day",
            "Day 1 at destination",
            "Day 2 at destination",
        ]
    );

    let departure_day = &plan.schedule[2];
    let rest = departure_day.in_flight_rest().expect("in-flight sleep");
    assert_eq!((rest.start_time, rest.end_time), (1230, 1455));
    assert_eq!(
        rest.description,
        "In-flight sleep (3h 45m) - rest up before a full day ahead"
    );
    assert!(plan
        .schedule
        .iter()
        .any(|day| day.events_of(EventKind::Melatonin).next().is_some()));
}

#[test]
fn sleep_window_length_is_preserved_every_day() {
    let state = AppState::new(PlannerSettings::default()).expect("state");
    let plan = planning_generate(&state, trip(vec![honolulu_to_tokyo()], Some(3))).expect("plan");
    let profile = SleepProfile::from_clock("Pacific/Honolulu", "21:00", "05:00").expect("profile");

    for day in &plan.schedule {
        assert_eq!(
            normalize_minutes(day.target_waketime - day.target_bedtime),
            profile.sleep_duration()
        );
    }
}

#[test]
fn default_days_before_comes_from_settings() {
    let settings = PlannerSettings {
        default_days_before_start: 3,
        ..PlannerSettings::default()
    };
    let state = AppState::new(settings).expect("state");
    let plan = planning_generate(&state, trip(vec![honolulu_to_tokyo()], None)).expect("plan");
    assert_eq!(plan.schedule[0].date, date(2026, 1, 28));
    assert_eq!(plan.schedule[0].label, "3 days before departure");
}

#[test]
fn yaml_settings_change_the_pace() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("planner.yaml");
    std::fs::write(&path, "maxShiftPerDayHours: 1.0\n").expect("write settings");

    let state = AppState::from_settings_path(&path).expect("state");
    let plan = planning_generate(&state, trip(vec![honolulu_to_tokyo()], Some(0))).expect("plan");
    assert_eq!(plan.summary.days_to_adjust, 5);

    let last = plan.schedule.last().expect("last day");
    assert_eq!(last.date, date(2026, 2, 6));
    assert_eq!(last.target_waketime, 300 + 300);
}

#[test]
fn plan_serializes_for_the_host() {
    let state = AppState::new(PlannerSettings::default()).expect("state");
    let plan = planning_generate(&state, trip(vec![honolulu_to_tokyo()], Some(2))).expect("plan");
    let value = serde_json::to_value(&plan).expect("json");

    let first_day = &value["schedule"][0];
    assert_eq!(first_day["date"], "2026-01-29");
    assert_eq!(first_day["phase"], "pre-flight");
    assert!(first_day.get("targetBedtime").is_some());
    assert_eq!(value["summary"]["direction"], "west");

    let departure_events = value["schedule"][2]["events"]
        .as_array()
        .expect("events array");
    assert!(departure_events
        .iter()
        .any(|event| event["kind"] == "flight" && event["flightRef"] == 0));
    assert!(departure_events
        .iter()
        .any(|event| event["inFlight"] == true));
}
