//! Colored terminal rendering for sis2ics-core types.

use owo_colors::OwoColorize;
use sis2ics_core::CalendarDocument;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for CalendarDocument {
    fn render(&self) -> String {
        let events = self.event_count();
        let games = format!("📅 {} {}", events, pluralize("game", events));

        let warnings = self.warnings().len();
        if warnings == 0 {
            games.green().to_string()
        } else {
            let label = format!("({} {})", warnings, pluralize("warning", warnings));
            format!("{} {}", games.green(), label.yellow())
        }
    }
}

fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 {
        word
    } else {
        match word {
            "game" => "games",
            "warning" => "warnings",
            _ => word,
        }
    }
}
