//! ICS file generation.
//!
//! [`Flavor::Strict`](crate::Flavor) output is built with the icalendar crate
//! and follows RFC 5545. [`Flavor::Legacy`](crate::Flavor) writes the historic
//! sis2ics layout line by line.

mod generate;

pub use generate::{CalendarDocument, serialize};
