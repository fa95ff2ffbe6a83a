pub mod circadian_rules;
pub mod in_flight_sleep;
pub mod itinerary_validator;
pub mod jetlag_planner;
pub mod schedule_utils;
pub mod settings_service;
pub mod timezone_resolver;
pub mod trip_codec;
pub mod zone_catalog;
