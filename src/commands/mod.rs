pub mod planning;
pub mod settings;
pub mod share;
pub mod timezone;

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{error, warn};

use crate::error::{AppError, AppResult};
use crate::models::settings::PlannerSettings;
use crate::services::jetlag_planner::JetLagPlanner;
use crate::services::settings_service::SettingsService;
use crate::services::timezone_resolver::TimezoneResolver;
use crate::services::zone_catalog::ZoneCatalog;

/// Shared services handed to every command.
#[derive(Clone)]
pub struct AppState {
    resolver: Arc<TimezoneResolver>,
    settings_service: Arc<SettingsService>,
}

impl AppState {
    pub fn new(settings: PlannerSettings) -> AppResult<Self> {
        Self::with_catalog(ZoneCatalog::builtin(), SettingsService::new(settings)?)
    }

    /// Loads settings from a YAML file; a missing file yields the defaults.
    pub fn from_settings_path(path: &Path) -> AppResult<Self> {
        Self::with_catalog(ZoneCatalog::builtin(), SettingsService::from_path(path)?)
    }

    pub fn with_catalog(catalog: ZoneCatalog, settings_service: SettingsService) -> AppResult<Self> {
        let fallback_zone = settings_service.get()?.fallback_zone;
        Ok(Self {
            resolver: Arc::new(TimezoneResolver::new(catalog, fallback_zone)),
            settings_service: Arc::new(settings_service),
        })
    }

    pub fn resolver(&self) -> Arc<TimezoneResolver> {
        Arc::clone(&self.resolver)
    }

    pub fn settings(&self) -> Arc<SettingsService> {
        Arc::clone(&self.settings_service)
    }

    /// A planner configured from the settings in effect right now.
    pub fn planner(&self) -> AppResult<JetLagPlanner> {
        Ok(JetLagPlanner::new(self.resolver(), self.settings_service.get()?))
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<JsonValue>,
}

impl CommandError {
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Option<JsonValue>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details,
        }
    }
}

impl From<AppError> for CommandError {
    fn from(error: AppError) -> Self {
        match error {
            AppError::NoFlights => {
                CommandError::new("NO_FLIGHTS", AppError::NoFlights.to_string(), None)
            }
            AppError::Validation { message, details } => {
                CommandError::new("VALIDATION_ERROR", message, details)
            }
            AppError::Decode { message } => {
                warn!(target: "app::command", %message, "share code rejected in command");
                CommandError::new("DECODE_ERROR", message, None)
            }
            AppError::Serialization(error) => {
                error!(target: "app::command", error = %error, "serialization error in command");
                CommandError::new("UNKNOWN", "Serialization failed", None)
            }
            AppError::Yaml(error) => {
                error!(target: "app::command", error = %error, "settings file error in command");
                CommandError::new("UNKNOWN", "Settings file could not be read", None)
            }
            AppError::Io(error) => {
                error!(target: "app::command", error = %error, "io error in command");
                CommandError::new("UNKNOWN", "File system access failed", None)
            }
            AppError::Other(message) => {
                error!(target: "app::command", %message, "unexpected error in command");
                CommandError::new("UNKNOWN", message, None)
            }
        }
    }
}
