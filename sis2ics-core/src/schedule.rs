//! One game as it appears in the schedule table.

/// The six captured cells of a schedule row, untouched.
///
/// Nothing here is validated: `date` is expected as `dd.mm.yy` and `time` as
/// `hh:mm`, but any of the fields may be empty or hold stray markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    pub id: String,
    pub date: String,
    pub time: String,
    pub home_team: String,
    pub away_team: String,
    pub venue_or_note: String,
}

impl ScheduleRow {
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        venue_or_note: impl Into<String>,
    ) -> Self {
        ScheduleRow {
            id: id.into(),
            date: date.into(),
            time: time.into(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            venue_or_note: venue_or_note.into(),
        }
    }

    /// "Home - Away", as used in SUMMARY and DESCRIPTION.
    pub fn pairing(&self) -> String {
        format!("{} - {}", self.home_team, self.away_team)
    }
}

impl std::fmt::Display for ScheduleRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} {} {}", self.id, self.date, self.time, self.pairing())
    }
}
