use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use sis2ics_core::{CalendarConfig, CalendarDocument, convert, convert_or_empty};

use super::{Target, create_spinner};
use crate::render::Render;
use crate::source::Source;

pub async fn run(
    source: &Source,
    config: &CalendarConfig,
    target: &Target,
    allow_empty: bool,
) -> Result<()> {
    let spinner = create_spinner(format!("Reading {}", source));
    let html = source.load().await;
    spinner.finish_and_clear();
    let html = html?;

    let document = build(&html, config, allow_empty)
        .with_context(|| format!("Nothing to export from {}", source))?;
    target.write(&document)?;

    eprintln!("{} {} {}", document.render(), "→".dimmed(), target);
    Ok(())
}

fn build(html: &str, config: &CalendarConfig, allow_empty: bool) -> Result<CalendarDocument> {
    if allow_empty {
        Ok(convert_or_empty(html, config))
    } else {
        Ok(convert(html, config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sis2ics_core::{Flavor, Sis2IcsError};
    use std::io::Write;

    const PAGE: &str = "<table>\n\
        <tr><td><a href=\"#\">7</a></td><td>Sa</td><td><a href=\"#\">14.03.04</a></td>\
        <td>15:00</td><td><a href=\"#\">A</a></td><td><a href=\"#\">B</a></td><td>X</td></tr>\n\
        </table>";

    fn config() -> CalendarConfig {
        CalendarConfig::new("http://example.org", "T", Flavor::Legacy).unwrap()
    }

    fn page_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_convert_saved_page_to_file() {
        let page = page_file(PAGE);
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("games.ics");

        run(
            &Source::File(page.path().to_path_buf()),
            &config(),
            &Target::File(out.clone()),
            false,
        )
        .await
        .unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(written.contains("UID:7@http://example.org\r\n"));
        assert!(written.ends_with("END:VCALENDAR"));
    }

    #[tokio::test]
    async fn test_page_without_games_fails_and_writes_nothing() {
        let page = page_file("<html><body>Keine Spiele</body></html>");
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("games.ics");

        let err = run(
            &Source::File(page.path().to_path_buf()),
            &config(),
            &Target::File(out.clone()),
            false,
        )
        .await
        .unwrap_err();

        assert_eq!(
            err.root_cause().downcast_ref::<Sis2IcsError>(),
            Some(&Sis2IcsError::NoGamesFound)
        );
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn test_allow_empty_writes_bare_calendar() {
        let page = page_file("<html></html>");
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("games.ics");

        run(
            &Source::File(page.path().to_path_buf()),
            &config(),
            &Target::File(out.clone()),
            true,
        )
        .await
        .unwrap();

        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:http://example.org\r\nEND:VCALENDAR"
        );
    }
}
