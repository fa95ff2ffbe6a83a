use std::path::Path;
use std::sync::RwLock;

use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::models::settings::PlannerSettings;

#[derive(Debug, Default, Clone)]
pub struct SettingsUpdateInput {
    pub max_shift_per_day_hours: Option<f64>,
    pub default_days_before_start: Option<u32>,
    pub max_days_before_start: Option<u32>,
    pub fallback_zone: Option<String>,
    pub nap_minutes: Option<i64>,
}

pub struct SettingsService {
    current: RwLock<PlannerSettings>,
}

impl SettingsService {
    pub fn new(settings: PlannerSettings) -> AppResult<Self> {
        settings.validate()?;
        Ok(Self {
            current: RwLock::new(settings),
        })
    }

    /// Loads settings from a YAML file. A missing file yields the defaults.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            warn!(target: "app::settings", path = %path.display(), "settings file missing, using defaults");
            return Self::new(PlannerSettings::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let settings = PlannerSettings::from_yaml_str(&raw)?;
        info!(target: "app::settings", path = %path.display(), "loaded planner settings");
        Self::new(settings)
    }

    pub fn get(&self) -> AppResult<PlannerSettings> {
        self.current
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| AppError::other("settings lock poisoned"))
    }

    pub fn update(&self, input: SettingsUpdateInput) -> AppResult<PlannerSettings> {
        let mut guard = self
            .current
            .write()
            .map_err(|_| AppError::other("settings lock poisoned"))?;
        let mut next = guard.clone();

        if let Some(cap) = input.max_shift_per_day_hours {
            next.max_shift_per_day_hours = cap;
        }
        if let Some(days) = input.default_days_before_start {
            next.default_days_before_start = days;
        }
        if let Some(days) = input.max_days_before_start {
            next.max_days_before_start = days;
        }
        if let Some(zone) = input.fallback_zone {
            next.fallback_zone = zone.trim().to_string();
        }
        if let Some(minutes) = input.nap_minutes {
            next.nap_minutes = minutes;
        }

        next.validate()?;
        *guard = next.clone();
        Ok(next)
    }

    pub fn save_to_path(&self, path: &Path) -> AppResult<()> {
        let settings = self.get()?;
        let yaml = serde_yaml::to_string(&settings)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }
}
