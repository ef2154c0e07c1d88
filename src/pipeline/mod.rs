//! The timeline pipeline: preset → range → filtered groups → chart series.

pub mod controller;
pub mod filter;
pub mod range;
pub mod series;

pub use controller::{run_pipeline, ViewController, ViewSnapshot};
pub use filter::filter_groups;
pub use range::{resolve, resolve_name};
pub use series::{build, build_series, ChartData, DayLabel, LabelOptions, LabelOrder, UserSeries};
