pub mod flight;
pub mod plan;
pub mod profile;
pub mod settings;
