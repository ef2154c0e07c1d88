use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::config::SettingsStore;
use crate::model::ViewPreset;
use crate::pipeline::{ViewController, ViewSnapshot};
use crate::ui;
use crate::ui::palette::UserPalette;

/// Main application state.
pub struct TimelineApp {
    pub controller: ViewController,
    pub palette: UserPalette,
    pub show_about: bool,

    settings: SettingsStore,
    data_notice: String,
    // Written by the controller subscription after every recompute.
    status_message: Rc<RefCell<String>>,
    computed_on: NaiveDate,
}

impl TimelineApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let settings = SettingsStore::load();
        let now = Self::now();
        let loaded = crate::io::load_or_sample(
            settings.settings.data_file.as_deref(),
            settings.settings.users_file.as_deref(),
            now,
        );

        let palette = UserPalette::from_roster(&loaded.roster);
        let mut controller = ViewController::with_initial(
            Arc::new(loaded.dataset),
            Arc::new(loaded.roster),
            settings.settings.label_options(),
            settings.settings.startup_preset(),
            now,
        );

        let status_message = Rc::new(RefCell::new(status_line(&ViewSnapshot {
            preset: controller.current_preset(),
            range: controller.range(),
            chart: controller.chart(),
        })));
        let sink = Rc::clone(&status_message);
        controller.subscribe(move |snapshot| {
            *sink.borrow_mut() = status_line(snapshot);
        });

        Self {
            controller,
            palette,
            show_about: false,
            settings,
            data_notice: loaded.notice,
            status_message,
            computed_on: now.date(),
        }
    }

    fn now() -> NaiveDateTime {
        Local::now().naive_local()
    }

    pub fn select_preset(&mut self, preset: ViewPreset) {
        let now = Self::now();
        self.controller.select_preset(preset, now);
        self.computed_on = now.date();
    }

    pub fn data_notice(&self) -> &str {
        &self.data_notice
    }

    pub fn settings_dir(&self) -> &Path {
        self.settings.config_dir()
    }

    pub fn open_settings_folder(&mut self) {
        let dir = self.settings.config_dir().to_path_buf();
        if let Err(e) = open::that(&dir) {
            log::warn!("Could not open {:?}: {}", dir, e);
            *self.status_message.borrow_mut() = format!("Could not open settings folder: {}", e);
        }
    }

    /// Recompute when the calendar day changed since the last computation.
    fn refresh_on_new_day(&mut self) {
        let now = Self::now();
        if now.date() != self.computed_on {
            log::info!("Day changed, refreshing {}", self.controller.current_preset());
            self.controller.refresh(now);
            self.computed_on = now.date();
        }
    }
}

fn status_line(snapshot: &ViewSnapshot<'_>) -> String {
    if snapshot.range.is_unset() {
        return format!("{}: no date range", snapshot.preset);
    }
    let entries: u32 = snapshot.chart.series.iter().map(|s| s.total()).sum();
    format!(
        "{}: {} entries over {} days ({})",
        snapshot.preset,
        entries,
        snapshot.chart.labels.len(),
        snapshot.range.describe()
    )
}

impl eframe::App for TimelineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);
        self.refresh_on_new_day();

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui::toolbar::show_menu_bar(self, ui);
        });

        egui::TopBottomPanel::top("preset_bar")
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_HEADER)
                    .inner_margin(egui::Margin::symmetric(10.0, 6.0)),
            )
            .show(ctx, |ui| {
                ui::toolbar::show_preset_bar(self, ui);
            });

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::STATUS_BAR_BG)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(self.status_message.borrow().as_str())
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "Users: {}",
                                self.controller.roster().len()
                            ))
                            .size(10.5)
                            .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        let chart_frame = egui::Frame::default()
            .fill(ui::theme::BG_DARK)
            .inner_margin(egui::Margin::ZERO);
        egui::CentralPanel::default().frame(chart_frame).show(ctx, |ui| {
            ui::line_chart::show_line_chart(self.controller.chart(), &self.palette, ui);
        });

        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}
