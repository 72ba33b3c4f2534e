//! Core pipeline for sis2ics.
//!
//! Turns the HTML of a sis-handball.de team page into an iCalendar document:
//! - `extract` finds the game rows in the page
//! - `timestamp` normalizes the German date/time cells
//! - `ics` writes the VCALENDAR text
//!
//! Nothing in here does I/O; fetching and delivery live in sis2ics-cli.

pub mod config;
pub mod error;
pub mod extract;
pub mod ics;
pub mod pipeline;
pub mod schedule;
pub mod timestamp;
pub mod warning;

pub use config::{CalendarConfig, Flavor, Settings};
pub use error::{Sis2IcsError, Sis2IcsResult};
pub use extract::extract;
pub use ics::{CalendarDocument, serialize};
pub use pipeline::{convert, convert_or_empty};
pub use schedule::ScheduleRow;
pub use timestamp::{Normalized, normalize, to_timestamp};
pub use warning::{FieldFormatWarning, WarningKind};
