//! Built-in demonstration data, used when no dataset is configured.

use chrono::{Duration, NaiveDateTime};

use super::entry::{Dataset, Entry, Group};
use super::user::{Roster, User};

/// Roster matching [`sample_dataset`].
pub fn sample_roster() -> Roster {
    Roster::new(vec![
        User::new("1", "Alice"),
        User::new("2", "Bob"),
        User::new("3", "Carol"),
        User::new("4", "Dave"),
    ])
}

/// Generate entries spread around `now` so every preset has something to show.
pub fn sample_dataset(now: NaiveDateTime) -> Dataset {
    let stamp = |days: i64, hours: i64| {
        (now + Duration::days(days) + Duration::hours(hours))
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string()
    };

    // (user, day offset, hour offset)
    let design: &[(&str, i64, i64)] = &[
        ("1", -13, 1),
        ("1", -9, -2),
        ("2", -6, 0),
        ("1", -3, 2),
        ("3", -1, -1),
        ("1", 0, 0),
    ];
    let build: &[(&str, i64, i64)] = &[
        ("2", -12, 0),
        ("2", -8, 1),
        ("3", -5, -3),
        ("2", -5, 2),
        ("3", -2, 0),
        ("2", 0, -1),
        ("3", 8, 0),
        ("2", 10, 2),
    ];
    let review: &[(&str, i64, i64)] = &[
        ("1", -7, 0),
        ("3", -4, 1),
        ("1", -4, 3),
        ("2", -1, 0),
        ("1", 9, 0),
    ];

    let to_entries = |rows: &[(&str, i64, i64)]| {
        rows.iter()
            .map(|(user, days, hours)| Entry::new(*user, stamp(*days, *hours)))
            .collect::<Vec<_>>()
    };

    Dataset::new(vec![
        Group::new("Design", to_entries(design)),
        Group::new("Build", to_entries(build)),
        Group::new("Review", to_entries(review)),
    ])
}
