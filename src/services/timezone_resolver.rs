use chrono::offset::LocalResult;
use chrono::{DateTime, Duration, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::{debug, trace};

use crate::models::settings::DEFAULT_FALLBACK_ZONE;
use crate::services::zone_catalog::{AirportEntry, ZoneCatalog, ZoneEntry};

/// Maps zone ids and airport codes to UTC offsets in hours.
///
/// DST-aware offsets come from the IANA database when the resolved id is known
/// to it; otherwise the catalog's standard offsets are used. Nothing here
/// fails: an unresolvable identifier is reported as `None`.
#[derive(Debug, Clone)]
pub struct TimezoneResolver {
    catalog: ZoneCatalog,
    fallback_zone: String,
}

impl Default for TimezoneResolver {
    fn default() -> Self {
        Self::new(ZoneCatalog::builtin(), DEFAULT_FALLBACK_ZONE)
    }
}

impl TimezoneResolver {
    pub fn new(catalog: ZoneCatalog, fallback_zone: impl Into<String>) -> Self {
        Self {
            catalog,
            fallback_zone: fallback_zone.into(),
        }
    }

    pub fn catalog(&self) -> &ZoneCatalog {
        &self.catalog
    }

    pub fn zones(&self) -> &[ZoneEntry] {
        &self.catalog.zones
    }

    pub fn airport(&self, code: &str) -> Option<&AirportEntry> {
        self.catalog.airport(code)
    }

    /// Airport code ⇒ its zone, known zone ⇒ itself, anything else is passed
    /// through untouched. Blank input resolves to nothing.
    pub fn resolve_zone_id(&self, identifier: &str) -> Option<String> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return None;
        }
        if let Some(airport) = self.catalog.airport(identifier) {
            return Some(airport.zone.clone());
        }
        if let Some(zone) = self.catalog.zone(identifier) {
            return Some(zone.id.clone());
        }
        Some(identifier.to_string())
    }

    /// Offset in hours, DST-aware at `at` when given.
    pub fn offset_for(&self, identifier: &str, at: Option<DateTime<Utc>>) -> Option<f64> {
        if let (Some(instant), Some(tz)) = (at, self.tz_for(identifier)) {
            let offset = tz.offset_from_utc_datetime(&instant.naive_utc());
            return Some(seconds_to_hours(offset.fix().local_minus_utc()));
        }
        self.static_offset(identifier)
    }

    /// Offset in effect at a wall-clock reading taken in the zone itself.
    /// Ambiguous readings (clocks falling back) take the earlier offset;
    /// readings inside a spring-forward gap use the offset at the same UTC
    /// reading.
    pub fn offset_at_local(&self, identifier: &str, local: NaiveDateTime) -> Option<f64> {
        if let Some(tz) = self.tz_for(identifier) {
            let offset = match tz.offset_from_local_datetime(&local) {
                LocalResult::Single(offset) => offset,
                LocalResult::Ambiguous(earliest, _) => earliest,
                LocalResult::None => tz.offset_from_utc_datetime(&local),
            };
            return Some(seconds_to_hours(offset.fix().local_minus_utc()));
        }
        self.static_offset(identifier)
    }

    /// Converts a local wall-clock reading to UTC.
    pub fn to_utc(&self, identifier: &str, local: NaiveDateTime) -> Option<NaiveDateTime> {
        self.offset_at_local(identifier, local)
            .map(|offset| local - Duration::minutes((offset * 60.0).round() as i64))
    }

    /// Catalog offset, ignoring DST.
    pub fn static_offset(&self, identifier: &str) -> Option<f64> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return None;
        }
        if let Some(airport) = self.catalog.airport(identifier) {
            return Some(airport.offset);
        }
        let offset = self.catalog.zone(identifier).map(|zone| zone.offset);
        if offset.is_none() {
            trace!(target: "app::timezone", identifier, "no static offset");
        }
        offset
    }

    /// Best-effort zone of the host. Only zones present in the catalog are
    /// accepted; anything else yields the fallback zone.
    pub fn detect_local_zone(&self) -> String {
        self.accept_detected_zone(iana_time_zone::get_timezone().ok())
    }

    pub(crate) fn accept_detected_zone(&self, detected: Option<String>) -> String {
        match detected {
            Some(zone) if self.catalog.zone(&zone).is_some() => zone,
            other => {
                debug!(
                    target: "app::timezone",
                    detected = ?other,
                    fallback = %self.fallback_zone,
                    "using fallback zone"
                );
                self.fallback_zone.clone()
            }
        }
    }

    fn tz_for(&self, identifier: &str) -> Option<Tz> {
        self.resolve_zone_id(identifier)?.parse::<Tz>().ok()
    }
}

fn seconds_to_hours(seconds: i32) -> f64 {
    seconds as f64 / 3600.0
}
