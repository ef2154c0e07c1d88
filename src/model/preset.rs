use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Named date-range shorthand selectable from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewPreset {
    #[default]
    #[serde(rename = "Month")]
    Month,
    #[serde(rename = "1 Week")]
    OneWeek,
    #[serde(rename = "1 Day")]
    OneDay,
    #[serde(rename = "Previous")]
    Previous,
    #[serde(rename = "Next")]
    Next,
    #[serde(rename = "Today")]
    Today,
    #[serde(rename = "2 Days")]
    TwoDays,
    #[serde(rename = "2 Weeks")]
    TwoWeeks,
}

impl ViewPreset {
    pub const ALL: [ViewPreset; 8] = [
        ViewPreset::Month,
        ViewPreset::OneWeek,
        ViewPreset::OneDay,
        ViewPreset::Previous,
        ViewPreset::Next,
        ViewPreset::Today,
        ViewPreset::TwoDays,
        ViewPreset::TwoWeeks,
    ];

    /// Display name, identical to the name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            ViewPreset::Month => "Month",
            ViewPreset::OneWeek => "1 Week",
            ViewPreset::OneDay => "1 Day",
            ViewPreset::Previous => "Previous",
            ViewPreset::Next => "Next",
            ViewPreset::Today => "Today",
            ViewPreset::TwoDays => "2 Days",
            ViewPreset::TwoWeeks => "2 Weeks",
        }
    }

    /// Whether the range resolver produces a bounded range for this preset.
    pub fn has_range(self) -> bool {
        matches!(
            self,
            ViewPreset::Month
                | ViewPreset::OneWeek
                | ViewPreset::OneDay
                | ViewPreset::Previous
                | ViewPreset::Next
        )
    }
}

impl fmt::Display for ViewPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewPreset {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewPreset::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| AppError::UnknownPreset(s.to_string()))
    }
}
