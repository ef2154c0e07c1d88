pub mod entry;
pub mod preset;
pub mod range;
pub mod sample;
pub mod timestamp;
pub mod user;

pub use entry::{Dataset, Entry, Group, UserId};
pub use preset::ViewPreset;
pub use range::DateRange;
pub use user::{Roster, User};
