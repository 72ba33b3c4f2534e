//! Schedule row extraction.
//!
//! The team page lists games in a table whose rows always have the same
//! seven cells:
//!
//! ```text
//! <tr><td><a>id</a></td><td>…</td><td><a>date</a></td><td>time</td>
//!     <td><a>home</a></td><td><a>away</a></td><td>venue</td></tr>
//! ```
//!
//! The HTML is scanned as text against that shape; there is no DOM.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::Flavor;
use crate::schedule::ScheduleRow;

/// The historic pattern. `.` stops at line ends and every wildcard is
/// greedy, so several rows written on one line collapse into one match
/// carrying the last row's cells.
static LEGACY_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)<tr.*><td.*><a.*>(.*)</a></td><td.*>.*</td><td.*><a.*>(.*)",
        r"</a></td><td.*>(.*)</td><td.*><a.*>(.*)</a></td><td.*><a.*>",
        r"(.*)</a></td><td>(.*)</td></tr>",
    ))
    .expect("valid legacy row regex")
});

/// Opening tag of a table row.
static ROW_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<tr\b[^>]*>").expect("valid row start regex"));

/// Where a row's content ends when its `</tr>` is missing.
static ROW_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</(?:tr|tbody|table)\b").expect("valid row end regex"));

/// Text inside one cell: any markup except a `<td` or `</td` tag.
const CELL: &str = r"(?:[^<]|<[^/t]|</[^t]|<t[^d]|</t[^d])*?";

/// The cell layout, anchored to the whole content of a single row.
static ROW_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    let linked = format!(r"<td\b[^>]*>\s*<a\b[^>]*>({CELL})</a>\s*</td>\s*");
    let plain = format!(r"<td\b[^>]*>({CELL})</td>\s*");
    let skipped = format!(r"<td\b[^>]*>{CELL}</td>\s*");
    Regex::new(&format!(
        r"(?is)^\s*{linked}{skipped}{linked}{plain}{linked}{linked}{plain}$"
    ))
    .expect("valid row shape regex")
});

/// Find every schedule row in `html`, in document order.
///
/// Returns `None` when nothing matches, never `Some` of an empty list, so
/// callers cannot mistake a changed page layout for an empty season.
pub fn extract(html: &str, flavor: Flavor) -> Option<Vec<ScheduleRow>> {
    let rows: Vec<ScheduleRow> = match flavor {
        Flavor::Legacy => LEGACY_ROW.captures_iter(html).map(|c| row_from(&c)).collect(),
        Flavor::Strict => row_bodies(html)
            .into_iter()
            .filter_map(|body| ROW_SHAPE.captures(body))
            .map(|c| row_from(&c))
            .collect(),
    };

    tracing::debug!(rows = rows.len(), ?flavor, "extracted schedule rows");

    if rows.is_empty() { None } else { Some(rows) }
}

/// The content of every `<tr>`. A row ends at its `</tr>`, or at the next
/// `<tr>` when the closing tag was left out.
fn row_bodies(html: &str) -> Vec<&str> {
    let starts: Vec<_> = ROW_START.find_iter(html).collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, open)| {
            let next = starts.get(i + 1).map_or(html.len(), |m| m.start());
            let body = &html[open.end()..next];
            ROW_END.find(body).map_or(body, |close| &body[..close.start()])
        })
        .collect()
}

fn row_from(caps: &Captures<'_>) -> ScheduleRow {
    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
    ScheduleRow::new(group(1), group(2), group(3), group(4), group(5), group(6))
}
