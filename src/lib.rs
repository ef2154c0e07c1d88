//! Timeline chart of per-user daily entry counts.
//!
//! The [`pipeline`] module holds the pure preset → range → filter → series
//! steps; [`app`] and [`ui`] draw the result with egui.

pub mod app;
pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod pipeline;
pub mod ui;

pub use error::{AppError, AppResult};
