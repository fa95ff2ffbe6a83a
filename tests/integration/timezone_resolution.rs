use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use jetlag_planner::commands::timezone::{timezone_detect, timezone_list, timezone_resolve};
use jetlag_planner::commands::AppState;
use jetlag_planner::models::settings::PlannerSettings;
use jetlag_planner::services::timezone_resolver::TimezoneResolver;
use jetlag_planner::services::zone_catalog::{AirportEntry, ZoneCatalog, ZoneEntry};

fn ndt(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(hour, minute, 0)
        .expect("valid time")
}

#[test]
fn airport_codes_resolve_case_insensitively() {
    let resolver = TimezoneResolver::default();
    for code in ["LHR", "lhr", " Lhr "] {
        assert_eq!(resolver.resolve_zone_id(code).as_deref(), Some("Europe/London"));
    }
    assert_eq!(resolver.airport("sin").map(|a| a.zone.as_str()), Some("Asia/Singapore"));
}

#[test]
fn offsets_follow_daylight_saving() {
    let resolver = TimezoneResolver::default();
    let summer = Utc.from_utc_datetime(&ndt(2026, 7, 1, 0, 0));
    let winter = Utc.from_utc_datetime(&ndt(2026, 1, 1, 0, 0));

    assert_eq!(resolver.offset_for("LHR", Some(summer)), Some(1.0));
    assert_eq!(resolver.offset_for("LHR", Some(winter)), Some(0.0));
    assert_eq!(resolver.offset_for("LHR", None), Some(0.0));

    // southern hemisphere runs the other way round
    assert_eq!(resolver.offset_for("SYD", Some(winter)), Some(11.0));
    assert_eq!(resolver.offset_for("SYD", Some(summer)), Some(10.0));

    assert_eq!(
        resolver.offset_at_local("Australia/Sydney", ndt(2026, 3, 3, 7, 0)),
        Some(11.0)
    );
    assert_eq!(
        resolver.to_utc("SYD", ndt(2026, 3, 3, 7, 0)),
        Some(ndt(2026, 3, 2, 20, 0))
    );
}

#[test]
fn injected_catalog_replaces_the_builtin_tables() {
    let catalog = ZoneCatalog::new(
        vec![ZoneEntry {
            id: "Test/Midway".into(),
            name: "Midway Test".into(),
            offset: -11.0,
        }],
        vec![AirportEntry {
            code: "MDY".into(),
            name: "Midway Atoll".into(),
            zone: "Test/Midway".into(),
            offset: -11.0,
        }],
    );
    let resolver = TimezoneResolver::new(catalog, "Test/Midway");

    assert_eq!(resolver.resolve_zone_id("mdy").as_deref(), Some("Test/Midway"));
    assert_eq!(resolver.offset_for("MDY", None), Some(-11.0));
    // not a real IANA id, so the instant is ignored
    let instant = Utc.from_utc_datetime(&ndt(2026, 7, 1, 0, 0));
    assert_eq!(resolver.offset_for("MDY", Some(instant)), Some(-11.0));
    assert_eq!(resolver.offset_for("JFK", None), None);
    assert_eq!(resolver.zones().len(), 1);
}

#[test]
fn resolve_command_reports_zone_offset_and_airport() {
    let state = AppState::new(PlannerSettings::default()).expect("state");

    let resolved =
        timezone_resolve(&state, "jfk", Some("2026-07-01T12:00:00Z")).expect("resolved");
    assert_eq!(resolved.zone_id.as_deref(), Some("America/New_York"));
    assert_eq!(resolved.offset_hours, Some(-4.0));
    assert_eq!(resolved.airport.map(|a| a.code), Some("JFK".to_string()));

    let standard = timezone_resolve(&state, "America/New_York", None).expect("resolved");
    assert_eq!(standard.offset_hours, Some(-5.0));
    assert!(standard.airport.is_none());

    let unknown = timezone_resolve(&state, "Nowhere/Atlantis", None).expect("resolved");
    assert_eq!(unknown.zone_id.as_deref(), Some("Nowhere/Atlantis"));
    assert_eq!(unknown.offset_hours, None);
}

#[test]
fn resolve_command_rejects_malformed_instants() {
    let state = AppState::new(PlannerSettings::default()).expect("state");
    let err = timezone_resolve(&state, "JFK", Some("next tuesday")).expect_err("bad instant");
    assert_eq!(err.code, "VALIDATION_ERROR");
}

#[test]
fn list_and_detect_commands() {
    let state = AppState::new(PlannerSettings::default()).expect("state");

    let zones = timezone_list(&state).expect("zones");
    assert!(zones.iter().any(|zone| zone.id == "Asia/Tokyo"));
    assert!(zones.iter().any(|zone| zone.offset == 5.75));

    let detected = timezone_detect(&state).expect("detected");
    assert!(zones.iter().any(|zone| zone.id == detected));
}
