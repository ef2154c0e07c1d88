pub mod file;

pub use file::{load_dataset, load_or_sample, load_roster, LoadedData};
