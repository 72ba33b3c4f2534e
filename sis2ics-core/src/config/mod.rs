//! Configuration types for sis2ics.

mod calendar_config;
mod settings;

pub use calendar_config::{CalendarConfig, Flavor};
pub use settings::Settings;
