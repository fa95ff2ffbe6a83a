use std::sync::Arc;

use chrono::{Days, Duration, NaiveDate, NaiveDateTime};
use tracing::{debug, trace, warn};

use crate::error::{AppError, AppResult};
use crate::models::flight::FlightSegment;
use crate::models::plan::{
    Direction, EventKind, FlightLeg, Phase, Plan, PlanEvent, ScheduledDay, TripShift, TripSummary,
};
use crate::models::profile::SleepProfile;
use crate::models::settings::PlannerSettings;
use crate::services::circadian_rules::{CircadianRuleSet, DayAnchors};
use crate::services::in_flight_sleep::size_in_flight_sleep;
use crate::services::schedule_utils::{
    anchor_on_day, hours_to_minutes, minutes_of_day, overlaps, MINUTES_PER_DAY,
};
use crate::services::timezone_resolver::TimezoneResolver;

/// Builds day-by-day circadian adjustment schedules for an itinerary.
///
/// The planner holds no mutable state; a single instance can serve any number
/// of callers concurrently.
#[derive(Debug, Clone)]
pub struct JetLagPlanner {
    resolver: Arc<TimezoneResolver>,
    settings: PlannerSettings,
    rules: CircadianRuleSet,
}

impl Default for JetLagPlanner {
    fn default() -> Self {
        Self::new(Arc::new(TimezoneResolver::default()), PlannerSettings::default())
    }
}

impl JetLagPlanner {
    pub fn new(resolver: Arc<TimezoneResolver>, settings: PlannerSettings) -> Self {
        let rules = CircadianRuleSet::from_settings(&settings);
        Self {
            resolver,
            settings,
            rules,
        }
    }

    pub fn with_rules(mut self, rules: CircadianRuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    pub fn rules(&self) -> &CircadianRuleSet {
        &self.rules
    }

    pub fn generate_plan(
        &self,
        profile: &SleepProfile,
        itinerary: &[FlightSegment],
        days_before_start: u32,
    ) -> AppResult<Plan> {
        if itinerary.is_empty() {
            return Err(AppError::no_flights());
        }
        profile.ensure_valid()?;
        if days_before_start > self.settings.max_days_before_start {
            return Err(AppError::validation(format!(
                "daysBeforeStart must not exceed {}",
                self.settings.max_days_before_start
            )));
        }

        let legs = self.ordered_legs(itinerary);
        let (first, last) = match (legs.first(), legs.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(AppError::no_flights()),
        };

        let raw_shift = match (first.departure_offset, last.arrival_offset) {
            (Some(departure), Some(arrival)) => Some(arrival - departure),
            _ => {
                warn!(
                    target: "app::planner",
                    departure_zone = %first.segment.departure_zone,
                    arrival_zone = %last.segment.arrival_zone,
                    "trip endpoints unresolved; planning without a clock shift"
                );
                None
            }
        };
        let shift = trip_shift(raw_shift, self.settings.max_shift_per_day_hours);

        let first_departure = first.segment.departure_local;
        let last_arrival = last.segment.arrival_local;
        let window = PlanningWindow::new(
            first_departure.date(),
            last_arrival.date(),
            days_before_start,
            shift,
            self.settings.min_post_arrival_days,
        )?;

        debug!(
            target: "app::planner",
            direction = %shift.direction,
            magnitude_hours = shift.magnitude_hours,
            days_to_adjust = shift.days_to_adjust,
            start = %window.start,
            end = %window.end,
            legs = legs.len(),
            "planning window resolved"
        );

        let flight_windows: Vec<(NaiveDateTime, NaiveDateTime)> = legs
            .iter()
            .map(|leg| (leg.segment.departure_local, leg.segment.arrival_local))
            .collect();

        let mut schedule = Vec::new();
        let mut date = window.start;
        let mut day_index: u32 = 0;
        while date <= window.end {
            let (phase, label) = window.classify(date);
            let shift_hours = window.shift_applied(date, phase, day_index);
            let shift_minutes = hours_to_minutes(shift.direction.shift_sign() * shift_hours);
            let target_bedtime = profile.anchored_bedtime() + shift_minutes;
            let target_waketime = profile.waketime + shift_minutes;

            let mut events = self.flight_events(date, &legs, shift.direction);
            let anchors = DayAnchors::new(
                target_bedtime,
                target_waketime,
                self.settings.cbt_min_before_wake_minutes,
            );
            events.extend(self.rules.evaluate(&anchors, phase, shift.direction));

            events.retain(|event| {
                let keep = event.kind == EventKind::Flight
                    || event.in_flight
                    || !conflicts_with_flights(date, event, &flight_windows);
                if !keep {
                    trace!(
                        target: "app::planner",
                        %date,
                        kind = %event.kind,
                        "event overlaps a flight and was dropped"
                    );
                }
                keep
            });
            events.sort_by_key(PlanEvent::normalized_start);

            schedule.push(ScheduledDay {
                date,
                day_index,
                label,
                phase,
                target_bedtime,
                target_waketime,
                events,
            });

            match date.succ_opt() {
                Some(next) => date = next,
                None => break,
            }
            day_index += 1;
        }

        let summary = TripSummary {
            direction: shift.direction,
            total_shift_hours: shift.magnitude_hours,
            days_to_adjust: shift.days_to_adjust,
            departure_zone: first.segment.departure_zone.clone(),
            arrival_zone: last.segment.arrival_zone.clone(),
            first_departure,
            last_arrival,
        };

        Ok(Plan {
            summary,
            legs,
            schedule,
        })
    }

    /// Resolves both endpoint offsets and the true elapsed time of a segment.
    /// Unresolvable endpoints fall back to wall-clock subtraction.
    pub fn flight_leg(&self, segment: &FlightSegment) -> FlightLeg {
        let departure_offset = self
            .resolver
            .offset_at_local(&segment.departure_zone, segment.departure_local);
        let arrival_offset = self
            .resolver
            .offset_at_local(&segment.arrival_zone, segment.arrival_local);

        let elapsed = match (departure_offset, arrival_offset) {
            (Some(departure), Some(arrival)) => {
                shift_to_utc(segment.arrival_local, arrival)
                    - shift_to_utc(segment.departure_local, departure)
            }
            _ => {
                warn!(
                    target: "app::planner",
                    route = %segment.route_label(),
                    "flight zone unresolved; using wall-clock duration"
                );
                segment.arrival_local - segment.departure_local
            }
        };

        FlightLeg {
            segment: segment.clone(),
            duration_minutes: elapsed.num_minutes().max(0),
            departure_offset,
            arrival_offset,
        }
    }

    fn ordered_legs(&self, itinerary: &[FlightSegment]) -> Vec<FlightLeg> {
        let mut legs: Vec<FlightLeg> = itinerary
            .iter()
            .map(|segment| self.flight_leg(segment))
            .collect();
        legs.sort_by_key(|leg| {
            let naive = leg.segment.departure_local;
            let instant = leg
                .departure_offset
                .map_or(naive, |offset| shift_to_utc(naive, offset));
            (instant, naive)
        });
        legs
    }

    fn flight_events(&self, date: NaiveDate, legs: &[FlightLeg], direction: Direction) -> Vec<PlanEvent> {
        let mut events = Vec::new();
        for (index, leg) in legs.iter().enumerate() {
            let segment = &leg.segment;
            if segment.departure_local.date() != date {
                continue;
            }

            let flight_start = minutes_of_day(segment.departure_local);
            let mut block = PlanEvent::new(
                EventKind::Flight,
                flight_start,
                minutes_of_day(segment.arrival_local),
                format!("Flight: {}", segment.route_label()),
            );
            block.flight_ref = Some(index);
            events.push(block);

            if leg.duration_minutes < self.settings.in_flight_sleep_min_flight_minutes {
                continue;
            }

            let rest = size_in_flight_sleep(
                leg.duration_minutes,
                segment.arrival_local,
                direction,
                self.settings.landing_buffer_minutes,
            );
            let clear_of_landing = rest.start_offset_minutes
                + rest.duration_minutes
                + self.settings.in_flight_landing_margin_minutes
                < leg.duration_minutes;
            if rest.duration_minutes <= 0 || !clear_of_landing {
                trace!(
                    target: "app::planner",
                    route = %segment.route_label(),
                    duration = rest.duration_minutes,
                    "in-flight rest does not fit before landing"
                );
                continue;
            }

            let kind = if rest.is_long() {
                EventKind::Sleep
            } else {
                EventKind::Nap
            };
            let start = flight_start + rest.start_offset_minutes;
            let mut event = PlanEvent::new(
                kind,
                start,
                start + rest.duration_minutes,
                rest.description,
            );
            event.in_flight = true;
            event.flight_ref = Some(index);
            events.push(event);
        }
        events
    }
}

/// Folds a raw offset difference onto the shorter way around the clock.
pub fn fold_shift(raw_hours: f64) -> f64 {
    if raw_hours.abs() > 12.0 {
        if raw_hours > 0.0 {
            raw_hours - 24.0
        } else {
            raw_hours + 24.0
        }
    } else {
        raw_hours
    }
}

/// Direction and size of the adjustment for an arrival-minus-departure offset
/// difference. `None` plans no shift at all.
pub fn trip_shift(raw_hours: Option<f64>, max_shift_per_day_hours: f64) -> TripShift {
    let Some(raw_hours) = raw_hours else {
        return TripShift {
            direction: Direction::East,
            magnitude_hours: 0.0,
            days_to_adjust: 0,
        };
    };

    let folded = fold_shift(raw_hours);
    let direction = if folded < 0.0 {
        Direction::West
    } else {
        Direction::East
    };
    let magnitude_hours = folded.abs();
    let days_to_adjust = if max_shift_per_day_hours > 0.0 {
        (magnitude_hours / max_shift_per_day_hours).ceil() as u32
    } else {
        0
    };

    TripShift {
        direction,
        magnitude_hours,
        days_to_adjust,
    }
}

struct PlanningWindow {
    start: NaiveDate,
    end: NaiveDate,
    departure_date: NaiveDate,
    arrival_date: NaiveDate,
    days_before_start: u32,
    magnitude_hours: f64,
    shift_per_day: f64,
}

impl PlanningWindow {
    fn new(
        departure_date: NaiveDate,
        arrival_date: NaiveDate,
        days_before_start: u32,
        shift: TripShift,
        min_post_arrival_days: u32,
    ) -> AppResult<Self> {
        let days_after = shift
            .days_to_adjust
            .saturating_sub(days_before_start)
            .max(min_post_arrival_days);
        let ramp_days = days_before_start
            .checked_add(shift.days_to_adjust)
            .ok_or_else(|| AppError::validation("planning window is too long"))?;
        let shift_per_day = if ramp_days == 0 {
            0.0
        } else {
            shift.magnitude_hours / f64::from(ramp_days)
        };

        let start = departure_date
            .checked_sub_days(Days::new(u64::from(days_before_start)))
            .ok_or_else(|| AppError::validation("planning window starts out of range"))?;
        let end = arrival_date
            .checked_add_days(Days::new(u64::from(days_after)))
            .ok_or_else(|| AppError::validation("planning window ends out of range"))?;

        Ok(Self {
            start,
            end,
            departure_date,
            arrival_date,
            days_before_start,
            magnitude_hours: shift.magnitude_hours,
            shift_per_day,
        })
    }

    fn classify(&self, date: NaiveDate) -> (Phase, String) {
        if date < self.departure_date {
            let days = (self.departure_date - date).num_days();
            let unit = if days == 1 { "day" } else { "days" };
            (Phase::PreFlight, format!("{days} {unit} before departure"))
        } else if date > self.arrival_date {
            let days = (date - self.arrival_date).num_days();
            (Phase::PostArrival, format!("Day {days} at destination"))
        } else if date == self.departure_date {
            (Phase::InTransit, "Departure Day".to_string())
        } else if date == self.arrival_date {
            (Phase::InTransit, "Arrival Day".to_string())
        } else {
            (Phase::InTransit, "Travel Day".to_string())
        }
    }

    /// Hours of shift in effect on `date`, never more than the trip total.
    fn shift_applied(&self, date: NaiveDate, phase: Phase, day_index: u32) -> f64 {
        let steps = match phase {
            Phase::PreFlight => f64::from(day_index) + 1.0,
            Phase::InTransit => f64::from(self.days_before_start),
            Phase::PostArrival => {
                let days_since_arrival = (date - self.arrival_date).num_days() - 1;
                (i64::from(self.days_before_start) + days_since_arrival + 1) as f64
            }
        };
        (steps * self.shift_per_day).min(self.magnitude_hours)
    }
}

fn shift_to_utc(local: NaiveDateTime, offset_hours: f64) -> NaiveDateTime {
    local - Duration::minutes(hours_to_minutes(offset_hours))
}

/// Anchors the event on `date` (wrapping into the next day when it ends
/// before it starts) and checks it against every flight's wall-clock span.
fn conflicts_with_flights(
    date: NaiveDate,
    event: &PlanEvent,
    flights: &[(NaiveDateTime, NaiveDateTime)],
) -> bool {
    let start_minutes = event.normalized_start();
    let mut end_minutes = event.normalized_end();
    if end_minutes < start_minutes {
        end_minutes += MINUTES_PER_DAY;
    }
    let start = anchor_on_day(date, start_minutes);
    let end = anchor_on_day(date, end_minutes);
    flights
        .iter()
        .any(|(departure, arrival)| overlaps(start, end, *departure, *arrival))
}
