use egui::Color32;

use crate::model::{Roster, UserId};
use crate::ui::theme::SERIES_COLORS;

/// Per-user line colors, fixed by roster position and computed once.
#[derive(Debug, Clone)]
pub struct UserPalette {
    colors: Vec<(UserId, Color32)>,
}

impl UserPalette {
    pub fn from_roster(roster: &Roster) -> Self {
        let colors = roster
            .users()
            .iter()
            .enumerate()
            .map(|(i, user)| (user.id.clone(), series_color(i)))
            .collect();
        Self { colors }
    }

    /// Color for a user; the first roster slot wins on duplicate ids.
    pub fn color_for(&self, id: &UserId) -> Color32 {
        self.colors
            .iter()
            .find(|(uid, _)| uid == id)
            .map(|(_, c)| *c)
            .unwrap_or(crate::ui::theme::TEXT_DIM)
    }
}

/// Palette slot for a roster index, cycling when the roster is larger.
pub fn series_color(index: usize) -> Color32 {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}
