use chrono::NaiveDateTime;

/// Inclusive instant range used to select entries.
///
/// `Unset` is the explicit "matches nothing" range produced for presets
/// that have no bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    Unset,
    Span {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl DateRange {
    /// Build a span, ordering the bounds so `start <= end`.
    pub fn span(a: NaiveDateTime, b: NaiveDateTime) -> Self {
        if a <= b {
            DateRange::Span { start: a, end: b }
        } else {
            DateRange::Span { start: b, end: a }
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, DateRange::Unset)
    }

    pub fn bounds(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match *self {
            DateRange::Unset => None,
            DateRange::Span { start, end } => Some((start, end)),
        }
    }

    /// Inclusive on both ends. `Unset` contains nothing.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        match *self {
            DateRange::Unset => false,
            DateRange::Span { start, end } => start <= instant && instant <= end,
        }
    }

    /// Short human description for the status bar.
    pub fn describe(&self) -> String {
        match self.bounds() {
            None => "no range".to_string(),
            Some((start, end)) => format!(
                "{} → {}",
                start.format("%Y-%m-%d %H:%M"),
                end.format("%Y-%m-%d %H:%M")
            ),
        }
    }
}
