use crate::app::TimelineApp;
use crate::model::ViewPreset;
use crate::ui::theme;
use egui::{menu, RichText, Ui};
use egui_phosphor::regular as icons;

/// Navigation buttons shown as icons on the left.
const NAV_PRESETS: [(ViewPreset, &str); 2] = [
    (ViewPreset::Previous, icons::CARET_LEFT),
    (ViewPreset::Next, icons::CARET_RIGHT),
];

/// Range buttons in the segmented group on the right.
const RANGE_PRESETS: [ViewPreset; 3] =
    [ViewPreset::OneDay, ViewPreset::OneWeek, ViewPreset::Month];

/// Render the menu bar.
pub fn show_menu_bar(app: &mut TimelineApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  "), |ui| {
            if ui.button("  Open Settings Folder").clicked() {
                app.open_settings_folder();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  "), |ui| {
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(app.data_notice())
                    .size(11.0)
                    .weak(),
            );
        });
    });
}

/// Render the preset buttons.
pub fn show_preset_bar(app: &mut TimelineApp, ui: &mut Ui) {
    let current = app.controller.current_preset();
    let mut clicked = None;

    ui.horizontal(|ui| {
        for (preset, text) in NAV_PRESETS {
            if preset_button(ui, text, preset == current)
                .on_hover_text(preset.name())
                .clicked()
            {
                clicked = Some(preset);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Right-to-left layout, so walk the group backwards.
            for preset in RANGE_PRESETS.into_iter().rev() {
                if preset_button(ui, preset.name(), preset == current).clicked() {
                    clicked = Some(preset);
                }
            }
        });
    });

    if let Some(preset) = clicked {
        app.select_preset(preset);
    }
}

fn preset_button(ui: &mut Ui, text: &str, active: bool) -> egui::Response {
    let (fill, color) = if active {
        (theme::ACCENT, egui::Color32::WHITE)
    } else {
        (theme::BUTTON_IDLE, theme::TEXT_PRIMARY)
    };
    ui.add(egui::Button::new(RichText::new(text).color(color)).fill(fill))
}
