//! Owns the selected preset and recomputes the chart when it changes.

use std::sync::Arc;

use chrono::NaiveDateTime;

use super::filter::filter_groups;
use super::range::resolve;
use super::series::{build_series, ChartData, LabelOptions};
use crate::error::AppError;
use crate::model::{DateRange, Dataset, Group, Roster, User, ViewPreset};

/// Resolve, filter and pivot in one call.
pub fn run_pipeline(
    groups: &[Group],
    users: &[User],
    preset: ViewPreset,
    now: NaiveDateTime,
    options: &LabelOptions,
) -> ChartData {
    let range = resolve(preset, now);
    let filtered = filter_groups(groups, &range);
    build_series(&filtered, users, options)
}

/// What subscribers see after every recompute.
#[derive(Debug, Clone, Copy)]
pub struct ViewSnapshot<'a> {
    pub preset: ViewPreset,
    pub range: &'a DateRange,
    pub chart: &'a ChartData,
}

type Subscriber = Box<dyn FnMut(&ViewSnapshot<'_>)>;

/// View state for the timeline: the current preset and its computed chart.
pub struct ViewController {
    dataset: Arc<Dataset>,
    roster: Arc<Roster>,
    options: LabelOptions,
    current: ViewPreset,
    range: DateRange,
    chart: ChartData,
    subscribers: Vec<Subscriber>,
}

impl ViewController {
    /// Start on `Month` with the chart already computed for `now`.
    pub fn new(
        dataset: Arc<Dataset>,
        roster: Arc<Roster>,
        options: LabelOptions,
        now: NaiveDateTime,
    ) -> Self {
        Self::with_initial(dataset, roster, options, ViewPreset::Month, now)
    }

    pub fn with_initial(
        dataset: Arc<Dataset>,
        roster: Arc<Roster>,
        options: LabelOptions,
        initial: ViewPreset,
        now: NaiveDateTime,
    ) -> Self {
        let mut controller = Self {
            dataset,
            roster,
            options,
            current: initial,
            range: DateRange::Unset,
            chart: ChartData::default(),
            subscribers: Vec::new(),
        };
        controller.recompute(now);
        controller
    }

    /// Switch preset and recompute synchronously.
    pub fn select_preset(&mut self, preset: ViewPreset, now: NaiveDateTime) -> &ChartData {
        log::debug!("view preset {} -> {}", self.current, preset);
        self.current = preset;
        self.recompute(now);
        &self.chart
    }

    /// Switch by display name. Unknown names leave the view untouched.
    pub fn select_preset_name(
        &mut self,
        name: &str,
        now: NaiveDateTime,
    ) -> Result<&ChartData, AppError> {
        let preset = name.parse::<ViewPreset>().inspect_err(|e| {
            log::warn!("{}", e);
        })?;
        Ok(self.select_preset(preset, now))
    }

    /// Recompute the current preset against a new clock value.
    pub fn refresh(&mut self, now: NaiveDateTime) -> &ChartData {
        self.recompute(now);
        &self.chart
    }

    /// Register a callback run after every recompute.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&ViewSnapshot<'_>) + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    pub fn current_preset(&self) -> ViewPreset {
        self.current
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn chart(&self) -> &ChartData {
        &self.chart
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn roster(&self) -> &Arc<Roster> {
        &self.roster
    }

    fn recompute(&mut self, now: NaiveDateTime) {
        self.range = resolve(self.current, now);
        let filtered = filter_groups(self.dataset.groups(), &self.range);
        self.chart = build_series(&filtered, self.roster.users(), &self.options);
        log::debug!(
            "{}: {} groups, {} days in {}",
            self.current,
            filtered.len(),
            self.chart.labels.len(),
            self.range.describe()
        );

        let snapshot = ViewSnapshot {
            preset: self.current,
            range: &self.range,
            chart: &self.chart,
        };
        for subscriber in self.subscribers.iter_mut() {
            subscriber(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn controller() -> ViewController {
        let dataset = Dataset::new(vec![
            Group::new(
                "a",
                vec![
                    Entry::new("1", "2024-06-15T10:00:00"),
                    Entry::new("2", "2024-06-10T10:00:00"),
                ],
            ),
            Group::new("b", vec![Entry::new("1", "2024-06-02T10:00:00")]),
        ]);
        let roster = Roster::new(vec![User::new("1", "Alice"), User::new("2", "Bob")]);
        ViewController::new(
            Arc::new(dataset),
            Arc::new(roster),
            LabelOptions::default(),
            now(),
        )
    }

    #[test]
    fn starts_on_month() {
        let c = controller();
        assert_eq!(c.current_preset(), ViewPreset::Month);
        assert_eq!(c.chart().labels.len(), 3);
    }

    #[test]
    fn selecting_recomputes() {
        let mut c = controller();
        let chart = c.select_preset(ViewPreset::OneDay, now());
        assert_eq!(chart.labels.len(), 1);
        assert_eq!(chart.series[0].counts, [1]);
        assert_eq!(chart.series[1].counts, [0]);
        assert_eq!(c.current_preset(), ViewPreset::OneDay);
        assert!(!c.range().is_unset());
    }

    #[test]
    fn unbounded_preset_empties_the_chart() {
        let mut c = controller();
        let chart = c.select_preset(ViewPreset::Today, now()).clone();
        assert!(chart.labels.is_empty());
        assert_eq!(chart.series.len(), 2);
        assert!(chart.series.iter().all(|s| s.counts.is_empty()));
        assert!(c.range().is_unset());
    }

    #[test]
    fn unknown_name_keeps_state() {
        let mut c = controller();
        c.select_preset(ViewPreset::OneWeek, now());
        let before = c.chart().clone();
        assert!(c.select_preset_name("Yesterday", now()).is_err());
        assert_eq!(c.current_preset(), ViewPreset::OneWeek);
        assert_eq!(c.chart(), &before);

        assert!(c.select_preset_name("1 Day", now()).is_ok());
        assert_eq!(c.current_preset(), ViewPreset::OneDay);
    }

    #[test]
    fn subscribers_see_every_recompute() {
        let mut c = controller();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        c.subscribe(move |snap| {
            sink.borrow_mut().push((snap.preset, snap.chart.labels.len()));
        });

        c.select_preset(ViewPreset::OneDay, now());
        c.select_preset(ViewPreset::Previous, now());
        c.refresh(now());

        assert_eq!(
            *seen.borrow(),
            vec![
                (ViewPreset::OneDay, 1),
                (ViewPreset::Previous, 3),
                (ViewPreset::Previous, 3),
            ]
        );
    }

    #[test]
    fn controller_matches_stateless_pipeline() {
        let mut c = controller();
        for preset in ViewPreset::ALL {
            let expected = run_pipeline(
                c.dataset().groups(),
                c.roster().users(),
                preset,
                now(),
                &LabelOptions::default(),
            );
            assert_eq!(c.select_preset(preset, now()), &expected);
        }
    }

    #[test]
    fn refresh_tracks_the_clock() {
        let mut c = controller();
        c.select_preset(ViewPreset::OneDay, now());
        let later = now() - chrono::Duration::days(5);
        let chart = c.refresh(later);
        assert_eq!(chart.labels[0].text, "6/10/2024");
    }
}
