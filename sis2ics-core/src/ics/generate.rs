//! VCALENDAR generation.

use std::fmt;

use icalendar::{Calendar, Component, Property};

use crate::config::{CalendarConfig, Flavor};
use crate::schedule::ScheduleRow;
use crate::timestamp::normalize;
use crate::warning::FieldFormatWarning;

const CATEGORIES: &str = "Sport, Handball";
const URL_LINK_TEXT: &str = "zu sis-handball.de";

/// PRODID the icalendar crate writes on its own.
const CRATE_PRODID: &str = "PRODID:ICALENDAR-RS";

/// A finished calendar plus what went wrong on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDocument {
    text: String,
    events: usize,
    warnings: Vec<FieldFormatWarning>,
}

impl CalendarDocument {
    /// The calendar text, CRLF separated, without a trailing line break.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Number of VEVENT blocks.
    pub fn event_count(&self) -> usize {
        self.events
    }

    pub fn warnings(&self) -> &[FieldFormatWarning] {
        &self.warnings
    }
}

impl fmt::Display for CalendarDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Serialize schedule rows into one VCALENDAR, one VEVENT per row in order.
///
/// Malformed dates and times never abort; the degraded DTSTART is written
/// and a warning recorded.
pub fn serialize(rows: &[ScheduleRow], config: &CalendarConfig) -> CalendarDocument {
    let mut warnings = Vec::new();
    let mut events = Vec::with_capacity(rows.len());

    for row in rows {
        let normalized = normalize(&row.date, &row.time);
        for warning in normalized.warnings {
            let warning = warning.with_row(row.id.as_str());
            tracing::warn!(%warning, "malformed schedule field");
            warnings.push(warning);
        }
        events.push((row, normalized.timestamp));
    }

    let text = match config.flavor() {
        Flavor::Legacy => generate_legacy(&events, config),
        Flavor::Strict => generate_strict(&events, config),
    };

    CalendarDocument {
        text,
        events: rows.len(),
        warnings,
    }
}

/// The historic layout, byte for byte: fixed property order, nothing
/// escaped or folded.
fn generate_legacy(events: &[(&ScheduleRow, String)], config: &CalendarConfig) -> String {
    let url = config.source_url();
    let title = config.title();

    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", url),
    ];

    for (row, dtstart) in events {
        lines.extend([
            "BEGIN:VEVENT".to_string(),
            format!("UID:{}@{}", row.id, url),
            format!("DTSTART:{}", dtstart),
            format!("SUMMARY:{} ({})", row.pairing(), title),
            format!(
                "DESCRIPTION:{}\\n{}\\n{}\\n{}\\n{}",
                title,
                row.pairing(),
                row.date,
                row.time,
                row.venue_or_note
            ),
            format!("CATEGORIES:{}", CATEGORIES),
            "TRANSP:OPAC".to_string(),
            "STATUS: CONFIRMED".to_string(),
            format!("URL:<a itemprop=\"url\" href=\"{}\">{}</a>", url, URL_LINK_TEXT),
            "CLASS:PUBLIC".to_string(),
            "END:VEVENT".to_string(),
        ]);
    }

    lines.push("END:VCALENDAR".to_string());
    lines.join("\r\n")
}

/// RFC 5545 output built with the icalendar crate, which escapes and folds.
fn generate_strict(events: &[(&ScheduleRow, String)], config: &CalendarConfig) -> String {
    let url = config.source_url();
    let title = config.title();

    let mut cal = Calendar::new();
    cal.append_property(Property::new("PRODID", url));

    for (row, dtstart) in events {
        let pairing = row.pairing();
        let parts: [&str; 5] = [title, &pairing, &row.date, &row.time, &row.venue_or_note];
        let description = parts.map(text_value).join("\n");

        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&format!("{}@{}", row.id, url));
        ics_event.add_property("DTSTART", dtstart);
        ics_event.summary(&text_value(&format!("{} ({})", pairing, title)));
        ics_event.description(&description);
        ics_event.add_property("TRANSP", "OPAQUE");
        ics_event.add_property("STATUS", "CONFIRMED");
        ics_event.add_property("URL", url);
        ics_event.add_property("CLASS", "PUBLIC");

        cal.push(ics_event.done());
    }

    strip_ics_bloat(&cal.done().to_string())
}

/// Line breaks inside a cell become plain `\n` so they escape as one.
fn text_value(value: &str) -> String {
    value.replace("\r\n", "\n").replace('\r', "\n")
}

/// Clean up the icalendar crate's output
/// - Drop its own PRODID (ours is a calendar property) and CALSCALE:GREGORIAN
/// - Drop DTSTAMP, which would make every run differ
/// - Add CATEGORIES before each END:VEVENT, unescaped so the comma separates
/// - No line break after END:VCALENDAR
fn strip_ics_bloat(ics: &str) -> String {
    let mut lines = Vec::new();

    for line in ics.lines() {
        if line == CRATE_PRODID || line == "CALSCALE:GREGORIAN" || line.starts_with("DTSTAMP:") {
            continue;
        }

        if line == "END:VEVENT" {
            lines.push(format!("CATEGORIES:{}", CATEGORIES));
        }

        lines.push(line.to_string());
    }

    lines.join("\r\n")
}
