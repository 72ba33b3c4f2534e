//! Date/time normalization for schedule cells.
//!
//! sis-handball.de prints dates as `dd.mm.yy` and times as `hh:mm`. DTSTART
//! wants a floating `YYYYMMDDTHHMMSS`.

use chrono::format::{self, Parsed, StrftimeItems};
use chrono::{NaiveDate, NaiveTime};

use crate::warning::{FieldFormatWarning, WarningKind};

/// Two-digit years below this belong to the 2000s, the rest to the 1900s.
pub const CENTURY_PIVOT: u32 = 70;

/// How sis-handball.de prints dates; day and month may be a single digit.
const SHORT_DATE: &str = "%d.%m.%y";

/// Date part emitted when the date cell cannot be read at all.
const UNKNOWN_DATE: &str = "00000000";

/// A timestamp plus whatever was wrong with its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub timestamp: String,
    pub warnings: Vec<FieldFormatWarning>,
}

/// Convert a date and a time cell into `YYYYMMDDTHHMMSS`.
///
/// Colons are stripped from the time and `00` seconds appended; the digits
/// are not repaired, so `9:05` becomes `90500`. Malformed input is carried
/// through and reported in [`Normalized::warnings`].
pub fn normalize(date: &str, time: &str) -> Normalized {
    let date = date.trim();
    let time = time.trim();
    let mut warnings = Vec::new();

    let time_digits = time.replace(':', "");
    if !is_hhmm(&time_digits) {
        warnings.push(FieldFormatWarning::new(WarningKind::MalformedTime, time));
    }

    let date_part = match parse_short_date(date) {
        Some((year, month, day)) => {
            if NaiveDate::from_ymd_opt(year, month, day).is_none() {
                warnings.push(FieldFormatWarning::new(WarningKind::ImpossibleDate, date));
            }
            format!("{year:04}{month:02}{day:02}")
        }
        None => {
            warnings.push(FieldFormatWarning::new(WarningKind::UnparseableDate, date));
            UNKNOWN_DATE.to_string()
        }
    };

    Normalized {
        timestamp: format!("{date_part}T{time_digits}00"),
        warnings,
    }
}

/// [`normalize`] without the warnings.
pub fn to_timestamp(date: &str, time: &str) -> String {
    normalize(date, time).timestamp
}

/// Expand a two-digit year using [`CENTURY_PIVOT`].
pub fn expand_year(yy: u32) -> i32 {
    if yy < CENTURY_PIVOT {
        2000 + yy as i32
    } else {
        1900 + yy as i32
    }
}

/// `d.m.yy`. Day and month are range-checked on their own; whether the
/// combination exists is left to the caller.
fn parse_short_date(date: &str) -> Option<(i32, u32, u32)> {
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, date, StrftimeItems::new(SHORT_DATE)).ok()?;

    let year = expand_year(u32::try_from(parsed.year_mod_100()?).ok()?);
    Some((year, parsed.month()?, parsed.day()?))
}

fn is_hhmm(digits: &str) -> bool {
    digits.len() == 4 && NaiveTime::parse_from_str(digits, "%H%M").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_timestamp_basic() {
        assert_eq!(to_timestamp("14.03.04", "15:00"), "20040314T150000");
    }

    #[test]
    fn test_to_timestamp_pads_day_and_month() {
        assert_eq!(to_timestamp("01.01.04", "09:05"), "20040101T090500");
        assert_eq!(to_timestamp("1.2.04", "09:05"), "20040201T090500");
    }

    #[test]
    fn test_inputs_are_trimmed() {
        let result = normalize("  14.03.04\n", "\t15:00 ");
        assert_eq!(result.timestamp, "20040314T150000");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_century_pivot() {
        assert_eq!(expand_year(0), 2000);
        assert_eq!(expand_year(69), 2069);
        assert_eq!(expand_year(70), 1970);
        assert_eq!(expand_year(99), 1999);
        assert_eq!(to_timestamp("24.12.98", "18:30"), "19981224T183000");
    }

    #[test]
    fn test_short_time_is_carried_through_with_warning() {
        let result = normalize("01.01.04", "9:05");
        assert_eq!(result.timestamp, "20040101T90500");
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].kind, WarningKind::MalformedTime);
        assert_eq!(result.warnings[0].value, "9:05");
    }

    #[test]
    fn test_out_of_range_time_warns() {
        let result = normalize("01.01.04", "25:61");
        assert_eq!(result.timestamp, "20040101T256100");
        assert_eq!(result.warnings[0].kind, WarningKind::MalformedTime);
    }

    #[test]
    fn test_unparseable_date_uses_placeholder() {
        for date in [
            "", "14-03-04", "14.03.2004", "14.03", "a.b.cc", "14.03.04.1", "32.01.04", "1.13.04",
        ] {
            let result = normalize(date, "15:00");
            assert_eq!(result.timestamp, "00000000T150000", "date {:?}", date);
            assert_eq!(result.warnings.len(), 1, "date {:?}", date);
            assert_eq!(result.warnings[0].kind, WarningKind::UnparseableDate);
        }
    }

    #[test]
    fn test_impossible_date_keeps_digits() {
        let result = normalize("31.02.04", "15:00");
        assert_eq!(result.timestamp, "20040231T150000");
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].kind, WarningKind::ImpossibleDate);
    }

    #[test]
    fn test_single_digit_day_and_month() {
        assert_eq!(to_timestamp("6.9.14", "19:00"), "20140906T190000");
        assert_eq!(to_timestamp("06.9.14", "19:00"), "20140906T190000");
        assert!(normalize("6.9.14", "19:00").warnings.is_empty());
    }

    #[test]
    fn test_time_needs_four_digits() {
        for time in ["123", "12345", "24:00", "12:60", "ab:cd"] {
            let result = normalize("01.01.04", time);
            assert_eq!(result.warnings.len(), 1, "time {:?}", time);
            assert_eq!(result.warnings[0].kind, WarningKind::MalformedTime);
        }
    }

    #[test]
    fn test_leap_day() {
        assert!(normalize("29.02.04", "15:00").warnings.is_empty());
        assert_eq!(
            normalize("29.02.05", "15:00").warnings[0].kind,
            WarningKind::ImpossibleDate
        );
    }

    #[test]
    fn test_both_fields_broken() {
        let result = normalize("TBA", "");
        assert_eq!(result.timestamp, "00000000T00");
        let kinds: Vec<_> = result.warnings.iter().map(|w| w.kind).collect();
        assert_eq!(kinds, vec![WarningKind::MalformedTime, WarningKind::UnparseableDate]);
    }
}
