pub mod dialogs;
pub mod line_chart;
pub mod palette;
pub mod theme;
pub mod toolbar;
