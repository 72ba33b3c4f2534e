//! HTML in, calendar out.

use crate::config::CalendarConfig;
use crate::error::{Sis2IcsError, Sis2IcsResult};
use crate::extract::extract;
use crate::ics::{CalendarDocument, serialize};

/// Extract the games from `html` and serialize them.
///
/// A page without any game rows is [`Sis2IcsError::NoGamesFound`] rather than
/// an empty calendar, since that usually means the page layout changed.
pub fn convert(html: &str, config: &CalendarConfig) -> Sis2IcsResult<CalendarDocument> {
    let rows = extract(html, config.flavor()).ok_or(Sis2IcsError::NoGamesFound)?;
    Ok(serialize(&rows, config))
}

/// Like [`convert`], but a page without games yields a calendar with no events.
pub fn convert_or_empty(html: &str, config: &CalendarConfig) -> CalendarDocument {
    let rows = extract(html, config.flavor()).unwrap_or_default();
    serialize(&rows, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Flavor;
    use crate::warning::WarningKind;

    const SCHEDULE: &str = include_str!("../tests/fixtures/schedule.html");

    fn config(flavor: Flavor) -> CalendarConfig {
        CalendarConfig::new("http://example.org", "T", flavor).unwrap()
    }

    fn values<'a>(doc: &'a CalendarDocument, property: &str) -> Vec<&'a str> {
        let prefix = format!("{property}:");
        doc.as_str()
            .split("\r\n")
            .filter_map(|l| l.strip_prefix(prefix.as_str()))
            .collect()
    }

    #[test]
    fn test_convert_fixture_page() {
        for flavor in [Flavor::Legacy, Flavor::Strict] {
            let doc = convert(SCHEDULE, &config(flavor)).unwrap();

            assert_eq!(doc.event_count(), 3, "flavor {:?}", flavor);
            assert_eq!(
                values(&doc, "UID"),
                vec!["101@http://example.org", "102@http://example.org", "103@http://example.org"]
            );
            assert_eq!(
                values(&doc, "DTSTART"),
                vec!["20140903T201500", "20140906T190000", "00000000T00"]
            );
            assert_eq!(
                doc.as_str().matches("BEGIN:VEVENT").count(),
                doc.as_str().matches("END:VEVENT").count()
            );
        }
    }

    #[test]
    fn test_fixture_warnings_point_at_broken_game() {
        let doc = convert(SCHEDULE, &config(Flavor::Strict)).unwrap();

        let kinds: Vec<_> = doc.warnings().iter().map(|w| w.kind).collect();
        assert_eq!(kinds, vec![WarningKind::MalformedTime, WarningKind::UnparseableDate]);
        assert!(
            doc.warnings()
                .iter()
                .all(|w| w.row_id.as_deref() == Some("103"))
        );
    }

    #[test]
    fn test_summary_uses_team_names() {
        let doc = convert(SCHEDULE, &config(Flavor::Legacy)).unwrap();
        assert_eq!(
            values(&doc, "SUMMARY"),
            vec![
                "THW Kiel - SG Flensburg-Handewitt (T)",
                "Füchse Berlin - Rhein-Neckar Löwen (T)",
                "TBV Lemgo - HSG Wetzlar (T)",
            ]
        );
    }

    #[test]
    fn test_page_without_games() {
        let html = "<html><body><p>Keine Spiele angesetzt.</p></body></html>";

        assert_eq!(convert(html, &config(Flavor::Strict)), Err(Sis2IcsError::NoGamesFound));

        let doc = convert_or_empty(html, &config(Flavor::Strict));
        assert_eq!(doc.event_count(), 0);
        assert_eq!(
            doc.as_str(),
            "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:http://example.org\r\nEND:VCALENDAR"
        );
    }

    #[test]
    fn test_repeated_runs_are_byte_identical() {
        for flavor in [Flavor::Legacy, Flavor::Strict] {
            let first = convert(SCHEDULE, &config(flavor)).unwrap();
            let second = convert(SCHEDULE, &config(flavor)).unwrap();
            assert_eq!(first.as_str(), second.as_str());
        }
    }
}
