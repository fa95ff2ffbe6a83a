use tracing::trace;

use crate::models::plan::{Direction, EventKind, Phase, PlanEvent};
use crate::models::settings::PlannerSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Midnight,
    Bedtime,
    Waketime,
    CbtMin,
}

/// Reference points for one day, in unnormalized minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayAnchors {
    pub bedtime: i64,
    pub waketime: i64,
    pub cbt_min: i64,
}

impl DayAnchors {
    pub fn new(bedtime: i64, waketime: i64, cbt_min_before_wake: i64) -> Self {
        Self {
            bedtime,
            waketime,
            cbt_min: waketime - cbt_min_before_wake,
        }
    }

    pub fn value(&self, anchor: Anchor) -> i64 {
        match anchor {
            Anchor::Midnight => 0,
            Anchor::Bedtime => self.bedtime,
            Anchor::Waketime => self.waketime,
            Anchor::CbtMin => self.cbt_min,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeExpr {
    At { anchor: Anchor, offset: i64 },
    LaterOf { first: Anchor, second: Anchor, offset: i64 },
    /// Only meaningful for an end time.
    SinceStart { minutes: i64 },
}

impl TimeExpr {
    pub fn at(anchor: Anchor, offset: i64) -> Self {
        TimeExpr::At { anchor, offset }
    }

    fn resolve(&self, anchors: &DayAnchors, start: i64) -> i64 {
        match *self {
            TimeExpr::At { anchor, offset } => anchors.value(anchor) + offset,
            TimeExpr::LaterOf {
                first,
                second,
                offset,
            } => anchors.value(first).max(anchors.value(second)) + offset,
            TimeExpr::SinceStart { minutes } => start + minutes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleGuard {
    EndBefore(Anchor, i64),
    StartAfter(Anchor, i64),
    StartBefore(Anchor, i64),
    EndAfterStart,
}

impl RuleGuard {
    fn holds(&self, anchors: &DayAnchors, start: i64, end: i64) -> bool {
        match *self {
            RuleGuard::EndBefore(anchor, offset) => end < anchors.value(anchor) + offset,
            RuleGuard::StartAfter(anchor, offset) => start > anchors.value(anchor) + offset,
            RuleGuard::StartBefore(anchor, offset) => start < anchors.value(anchor) + offset,
            RuleGuard::EndAfterStart => end > start,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircadianRule {
    pub name: &'static str,
    pub kind: EventKind,
    /// `None` applies in both directions.
    pub direction: Option<Direction>,
    /// Empty applies in every phase.
    pub phases: Vec<Phase>,
    pub start: TimeExpr,
    pub end: TimeExpr,
    pub guards: Vec<RuleGuard>,
    pub description: String,
}

impl CircadianRule {
    pub fn applies(&self, phase: Phase, direction: Direction) -> bool {
        self.direction.map_or(true, |wanted| wanted == direction)
            && (self.phases.is_empty() || self.phases.contains(&phase))
    }

    pub fn evaluate(
        &self,
        anchors: &DayAnchors,
        phase: Phase,
        direction: Direction,
    ) -> Option<PlanEvent> {
        if !self.applies(phase, direction) {
            return None;
        }

        let start = self.start.resolve(anchors, 0);
        let end = self.end.resolve(anchors, start);
        if let Some(guard) = self
            .guards
            .iter()
            .find(|guard| !guard.holds(anchors, start, end))
        {
            trace!(target: "app::planner", rule = self.name, ?guard, "rule guard failed");
            return None;
        }

        Some(PlanEvent::new(self.kind, start, end, self.description.clone()))
    }
}

/// Declarative behavior rules evaluated once per scheduled day.
///
/// Each rule names an event kind, the travel direction and phases it applies
/// to, how its start and end are derived from the day's sleep targets, and the
/// guards that must hold for it to be emitted. A rule that fails a guard is
/// omitted for that day.
#[derive(Debug, Clone, PartialEq)]
pub struct CircadianRuleSet {
    rules: Vec<CircadianRule>,
}

impl CircadianRuleSet {
    pub fn new(rules: Vec<CircadianRule>) -> Self {
        Self { rules }
    }

    pub fn from_settings(settings: &PlannerSettings) -> Self {
        use Anchor::{Bedtime, CbtMin, Midnight, Waketime};

        let rules = vec![
            CircadianRule {
                name: "sleep",
                kind: EventKind::Sleep,
                direction: None,
                phases: Vec::new(),
                start: TimeExpr::at(Bedtime, 0),
                end: TimeExpr::at(Waketime, 0),
                guards: Vec::new(),
                description: "Sleep".to_string(),
            },
            CircadianRule {
                name: "east-light-seek",
                kind: EventKind::LightSeek,
                direction: Some(Direction::East),
                phases: Vec::new(),
                start: TimeExpr::LaterOf {
                    first: Waketime,
                    second: CbtMin,
                    offset: 0,
                },
                end: TimeExpr::SinceStart {
                    minutes: settings.light_exposure_minutes,
                },
                guards: Vec::new(),
                description: "Seek bright light (sunlight or light box)".to_string(),
            },
            CircadianRule {
                name: "east-light-avoid",
                kind: EventKind::LightAvoid,
                direction: Some(Direction::East),
                phases: Vec::new(),
                start: TimeExpr::at(Bedtime, -settings.evening_light_avoid_minutes),
                end: TimeExpr::at(Bedtime, 0),
                guards: Vec::new(),
                description: "Avoid bright light, use dim lighting or blue blockers".to_string(),
            },
            CircadianRule {
                name: "east-melatonin",
                kind: EventKind::Melatonin,
                direction: Some(Direction::East),
                phases: Vec::new(),
                start: TimeExpr::at(Bedtime, -settings.melatonin_before_bed_minutes),
                end: TimeExpr::SinceStart {
                    minutes: settings.melatonin_block_minutes,
                },
                guards: vec![RuleGuard::StartAfter(Waketime, 0)],
                description: "Take melatonin (0.5-3mg) to help advance sleep".to_string(),
            },
            CircadianRule {
                name: "west-light-seek",
                kind: EventKind::LightSeek,
                direction: Some(Direction::West),
                phases: Vec::new(),
                start: TimeExpr::at(Bedtime, -settings.evening_light_seek_before_bed_minutes),
                end: TimeExpr::SinceStart {
                    minutes: settings.light_exposure_minutes,
                },
                guards: vec![RuleGuard::EndBefore(Bedtime, 0)],
                description: "Seek bright light to delay sleep".to_string(),
            },
            CircadianRule {
                name: "west-light-avoid",
                kind: EventKind::LightAvoid,
                direction: Some(Direction::West),
                phases: Vec::new(),
                start: TimeExpr::at(Waketime, 0),
                end: TimeExpr::SinceStart {
                    minutes: settings.morning_light_avoid_minutes,
                },
                guards: Vec::new(),
                description: "Avoid bright morning light, wear sunglasses if needed".to_string(),
            },
            CircadianRule {
                name: "caffeine",
                kind: EventKind::Caffeine,
                direction: None,
                phases: Vec::new(),
                start: TimeExpr::at(Waketime, 0),
                end: TimeExpr::at(Bedtime, -settings.caffeine_cutoff_before_bed_minutes),
                guards: vec![RuleGuard::EndAfterStart],
                description: "Caffeine OK (coffee, tea). Stop after this window.".to_string(),
            },
            CircadianRule {
                name: "ground-nap",
                kind: EventKind::Nap,
                direction: None,
                phases: vec![Phase::InTransit, Phase::PostArrival],
                start: TimeExpr::at(Waketime, settings.nap_after_wake_minutes),
                end: TimeExpr::SinceStart {
                    minutes: settings.nap_minutes,
                },
                guards: vec![
                    RuleGuard::StartAfter(Midnight, 0),
                    RuleGuard::StartAfter(Waketime, 0),
                    RuleGuard::StartBefore(Bedtime, -settings.nap_latest_before_bed_minutes),
                ],
                description: format!(
                    "Optional {}-min power nap if drowsy (set alarm!)",
                    settings.nap_minutes
                ),
            },
        ];

        Self { rules }
    }

    /// Appends a rule; it is evaluated after the built-in ones.
    pub fn with_rule(mut self, rule: CircadianRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[CircadianRule] {
        &self.rules
    }

    pub fn rule(&self, name: &str) -> Option<&CircadianRule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    pub fn evaluate(
        &self,
        anchors: &DayAnchors,
        phase: Phase,
        direction: Direction,
    ) -> Vec<PlanEvent> {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(anchors, phase, direction))
            .collect()
    }
}

impl Default for CircadianRuleSet {
    fn default() -> Self {
        Self::from_settings(&PlannerSettings::default())
    }
}
