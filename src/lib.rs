pub mod commands;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{AppError, AppResult};
pub use models::plan::Plan;
pub use services::jetlag_planner::JetLagPlanner;
pub use services::timezone_resolver::TimezoneResolver;
