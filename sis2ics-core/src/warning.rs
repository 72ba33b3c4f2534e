//! Non-fatal findings about malformed row data.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// The date cell does not look like `d.m.yy`.
    UnparseableDate,
    /// The date cell has the right shape but names no real day, e.g. `31.02.04`.
    ImpossibleDate,
    /// The time cell does not reduce to `HHMM`.
    MalformedTime,
}

impl WarningKind {
    fn describe(self) -> &'static str {
        match self {
            WarningKind::UnparseableDate => "date is not in dd.mm.yy form",
            WarningKind::ImpossibleDate => "date is not a calendar day",
            WarningKind::MalformedTime => "time is not in hh:mm form",
        }
    }
}

/// A cell whose content was carried into the calendar in degraded form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFormatWarning {
    pub kind: WarningKind,
    pub value: String,
    /// Id of the schedule row, once known.
    pub row_id: Option<String>,
}

impl FieldFormatWarning {
    pub fn new(kind: WarningKind, value: impl Into<String>) -> Self {
        FieldFormatWarning {
            kind,
            value: value.into(),
            row_id: None,
        }
    }

    pub fn with_row(mut self, row_id: impl Into<String>) -> Self {
        self.row_id = Some(row_id.into());
        self
    }
}

impl fmt::Display for FieldFormatWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref id) = self.row_id {
            write!(f, "game {}: ", id)?;
        }
        write!(f, "{} ('{}')", self.kind.describe(), self.value)
    }
}
