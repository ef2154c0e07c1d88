//! Date-range filtering of the grouped dataset.

use crate::model::{DateRange, Group};

/// Keep entries whose start falls inside `range`, dropping emptied groups.
///
/// Group and entry order is preserved. An unset range, or an entry with an
/// unparseable timestamp, matches nothing.
pub fn filter_groups(groups: &[Group], range: &DateRange) -> Vec<Group> {
    if range.is_unset() {
        return Vec::new();
    }

    groups
        .iter()
        .filter_map(|group| {
            let kept: Vec<_> = group
                .layers
                .iter()
                .filter(|entry| entry.start().is_some_and(|t| range.contains(t)))
                .cloned()
                .collect();
            if kept.is_empty() {
                None
            } else {
                Some(group.with_entries(kept))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(d: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, d)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn groups() -> Vec<Group> {
        vec![
            Group::new(
                "alpha",
                vec![
                    Entry::new("1", "2024-06-14T23:59:59"),
                    Entry::new("1", "2024-06-15T10:00:00"),
                    Entry::new("2", "2024-06-15T11:00:00"),
                ],
            ),
            Group::new("beta", vec![Entry::new("2", "2024-06-01T09:00:00")]),
            Group::new(
                "gamma",
                vec![
                    Entry::new("3", "garbage"),
                    Entry::new("3", "2024-06-15T00:00:00"),
                ],
            ),
        ]
    }

    fn june_15() -> DateRange {
        DateRange::span(
            at(15, 0, 0, 0),
            at(15, 23, 59, 59) + chrono::Duration::milliseconds(999),
        )
    }

    #[test]
    fn keeps_matching_entries_in_order() {
        let out = filter_groups(&groups(), &june_15());
        let names: Vec<_> = out.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["alpha", "gamma"]);
        assert_eq!(
            out[0].layers,
            vec![
                Entry::new("1", "2024-06-15T10:00:00"),
                Entry::new("2", "2024-06-15T11:00:00"),
            ]
        );
        assert_eq!(out[1].layers, vec![Entry::new("3", "2024-06-15T00:00:00")]);
    }

    #[test]
    fn never_grows_or_returns_empty_groups() {
        let input = groups();
        let out = filter_groups(&input, &june_15());
        for group in &out {
            assert!(!group.layers.is_empty());
            let original = input.iter().find(|g| g.name == group.name).unwrap();
            assert!(group.layers.len() <= original.layers.len());
        }
    }

    #[test]
    fn unset_range_matches_nothing() {
        assert!(filter_groups(&groups(), &DateRange::Unset).is_empty());
    }

    #[test]
    fn input_is_left_untouched() {
        let input = groups();
        let before = input.clone();
        let _ = filter_groups(&input, &june_15());
        assert_eq!(input, before);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(filter_groups(&[], &june_15()).is_empty());
    }

    #[test]
    fn malformed_timestamps_never_match() {
        let everything = DateRange::span(NaiveDateTime::MIN, NaiveDateTime::MAX);
        let out = filter_groups(&groups(), &everything);
        let total: usize = out.iter().map(|g| g.layers.len()).sum();
        assert_eq!(total, 5);
        assert!(out
            .iter()
            .flat_map(|g| g.layers.iter())
            .all(|e| e.start_date != "garbage"));
    }
}
