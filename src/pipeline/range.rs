//! Preset → date range resolution.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};

use crate::model::{DateRange, ViewPreset};

/// Resolve a preset against the supplied clock value.
///
/// `Today`, `2 Days` and `2 Weeks` have no bounds and resolve to
/// [`DateRange::Unset`].
pub fn resolve(preset: ViewPreset, now: NaiveDateTime) -> DateRange {
    let today = now.date();
    match preset {
        ViewPreset::Month => {
            let first = first_of_month(today);
            DateRange::span(start_of_day(first), end_of_month(first))
        }
        ViewPreset::OneWeek => DateRange::span(shift(now, Duration::days(-7)), now),
        ViewPreset::OneDay => DateRange::span(start_of_day(today), end_of_day(today)),
        ViewPreset::Previous => DateRange::span(shift(now, Duration::days(-14)), now),
        ViewPreset::Next => {
            let start = shift(now, Duration::days(7));
            // End of the month holding `start`; equal to `now`'s month end
            // unless the week crosses into the next month.
            DateRange::span(start, end_of_month(start.date()))
        }
        ViewPreset::Today | ViewPreset::TwoDays | ViewPreset::TwoWeeks => DateRange::Unset,
    }
}

/// Resolve a raw preset name. Unrecognized names match nothing.
pub fn resolve_name(name: &str, now: NaiveDateTime) -> DateRange {
    match name.parse::<ViewPreset>() {
        Ok(preset) => resolve(preset, now),
        Err(_) => DateRange::Unset,
    }
}

/// `now + delta`, saturating at the ends of the representable range.
fn shift(now: NaiveDateTime, delta: Duration) -> NaiveDateTime {
    now.checked_add_signed(delta).unwrap_or(if delta < Duration::zero() {
        NaiveDateTime::MIN
    } else {
        NaiveDateTime::MAX
    })
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// 23:59:59.999 on `date`.
fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.succ_opt()
        .map(|next| start_of_day(next) - Duration::milliseconds(1))
        .unwrap_or(NaiveDateTime::MAX)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// 23:59:59.999 on the last day of `date`'s month.
fn end_of_month(date: NaiveDate) -> NaiveDateTime {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .map(|next| start_of_day(next) - Duration::milliseconds(1))
        .unwrap_or(NaiveDateTime::MAX)
}
