//! Pivot filtered entries into day labels and per-user count series.

use std::collections::{HashMap, HashSet};
use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::model::{Group, User, UserId};

/// Default label layout, the en-US short date (`6/15/2024`).
pub const DEFAULT_LABEL_FORMAT: &str = "%-m/%-d/%Y";

/// How day labels are ordered along the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelOrder {
    /// Ascending calendar order.
    #[default]
    Chronological,
    /// Order in which days are first met while walking groups and entries.
    FirstSeen,
}

/// Formatting and ordering of day labels.
///
/// The format is validated on construction: rendering a label never fails
/// and distinct calendar days always get distinct texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelOptions {
    format: String,
    pub order: LabelOrder,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            format: DEFAULT_LABEL_FORMAT.to_string(),
            order: LabelOrder::default(),
        }
    }
}

impl LabelOptions {
    pub fn new(format: impl Into<String>, order: LabelOrder) -> Result<Self, AppError> {
        let format = format.into();
        let parses = !format.is_empty()
            && !StrftimeItems::new(&format).any(|item| matches!(item, Item::Error));
        if !parses || !separates_days(&format) {
            return Err(AppError::InvalidLabelFormat(format));
        }
        Ok(Self { format, order })
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    fn label(&self, date: NaiveDate) -> DayLabel {
        DayLabel {
            date,
            text: date.format(&self.format).to_string(),
        }
    }
}

/// Render `date`, or `None` when the format needs data a date lacks (`%H`, `%z`).
fn try_format(format: &str, date: NaiveDate) -> Option<String> {
    let mut text = String::new();
    write!(text, "{}", date.format(format)).ok()?;
    Some(text)
}

/// Whether `format` tells apart neighbouring days, months and years.
fn separates_days(format: &str) -> bool {
    let pairs = [
        ((2024, 6, 14), (2024, 6, 15)),
        ((2024, 6, 15), (2024, 7, 15)),
        ((2025, 6, 15), (2026, 6, 15)),
        ((2024, 12, 31), (2025, 1, 1)),
    ];
    pairs.iter().all(|&((y1, m1, d1), (y2, m2, d2))| {
        let (Some(a), Some(b)) = (
            NaiveDate::from_ymd_opt(y1, m1, d1),
            NaiveDate::from_ymd_opt(y2, m2, d2),
        ) else {
            return false;
        };
        match (try_format(format, a), try_format(format, b)) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    })
}

/// One calendar day on the x axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLabel {
    pub date: NaiveDate,
    pub text: String,
}

/// Per-day entry counts for one roster user, aligned with the labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSeries {
    pub user_id: UserId,
    pub name: String,
    pub counts: Vec<u32>,
}

impl UserSeries {
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

/// Output of the pipeline handed to the chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartData {
    pub labels: Vec<DayLabel>,
    pub series: Vec<UserSeries>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Series for a user; the first match when the roster repeats an id.
    pub fn series_for(&self, id: &UserId) -> Option<&UserSeries> {
        self.series.iter().find(|s| &s.user_id == id)
    }

    /// Largest single count across all series.
    pub fn max_count(&self) -> u32 {
        self.series
            .iter()
            .flat_map(|s| s.counts.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

/// [`build_series`] with default label options.
pub fn build(groups: &[Group], users: &[User]) -> ChartData {
    build_series(groups, users, &LabelOptions::default())
}

/// Derive the day labels present in `groups` and one count series per user.
///
/// Every user in `users` gets a series, all zeros when they have no
/// entries. Entries with unparseable timestamps are skipped.
pub fn build_series(groups: &[Group], users: &[User], options: &LabelOptions) -> ChartData {
    let dated: Vec<(&UserId, NaiveDate)> = groups
        .iter()
        .flat_map(|g| g.layers.iter())
        .filter_map(|e| e.start().map(|t| (&e.user_id, t.date())))
        .collect();

    let mut seen = HashSet::new();
    let mut days: Vec<NaiveDate> = dated
        .iter()
        .map(|(_, day)| *day)
        .filter(|day| seen.insert(*day))
        .collect();
    if options.order == LabelOrder::Chronological {
        days.sort_unstable();
    }

    let column: HashMap<NaiveDate, usize> =
        days.iter().enumerate().map(|(i, day)| (*day, i)).collect();

    let mut counts: HashMap<&UserId, Vec<u32>> = HashMap::new();
    for (user_id, day) in &dated {
        let row = counts
            .entry(*user_id)
            .or_insert_with(|| vec![0; days.len()]);
        row[column[day]] += 1;
    }

    let series = users
        .iter()
        .map(|user| UserSeries {
            user_id: user.id.clone(),
            name: user.name.clone(),
            counts: counts
                .get(&user.id)
                .cloned()
                .unwrap_or_else(|| vec![0; days.len()]),
        })
        .collect();

    let labels = days.into_iter().map(|day| options.label(day)).collect();

    ChartData { labels, series }
}
