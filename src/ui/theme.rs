use egui::style::WidgetVisuals;
use egui::{Color32, FontId, Rounding, Stroke, Visuals};

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_DARK: Color32 = Color32::from_rgb(24, 24, 32);
pub const BG_PANEL: Color32 = Color32::from_rgb(30, 30, 40);
pub const BG_HEADER: Color32 = Color32::from_rgb(34, 37, 48);
pub const STATUS_BAR_BG: Color32 = Color32::from_rgb(26, 26, 34);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(50, 52, 64);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 232, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(155, 160, 178);
pub const TEXT_DIM: Color32 = Color32::from_rgb(100, 105, 120);

pub const ACCENT: Color32 = Color32::from_rgb(80, 140, 220);
pub const GRID_LINE: Color32 = Color32::from_rgb(44, 46, 58);
pub const AXIS_LINE: Color32 = Color32::from_rgb(90, 94, 110);
pub const HOVER_LINE: Color32 = Color32::from_rgba_premultiplied(120, 120, 140, 90);

pub const BUTTON_IDLE: Color32 = Color32::from_rgb(42, 44, 56);
pub const BUTTON_HOVER: Color32 = Color32::from_rgb(52, 54, 68);
pub const BUTTON_PRESSED: Color32 = Color32::from_rgb(60, 62, 76);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const STATUS_BAR_HEIGHT: f32 = 24.0;
pub const CHART_MARGIN_LEFT: f32 = 56.0;
pub const CHART_MARGIN_RIGHT: f32 = 24.0;
pub const CHART_MARGIN_TOP: f32 = 44.0;
pub const CHART_MARGIN_BOTTOM: f32 = 64.0;
pub const LINE_WIDTH: f32 = 2.0;
pub const POINT_RADIUS: f32 = 3.5;
pub const LEGEND_SWATCH: f32 = 10.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_axis_title() -> FontId {
    FontId::proportional(12.0)
}

pub fn font_tick() -> FontId {
    FontId::proportional(10.5)
}

pub fn font_legend() -> FontId {
    FontId::proportional(11.5)
}

pub fn font_status() -> FontId {
    FontId::proportional(11.0)
}

// ── Series color palette ─────────────────────────────────────────────────────

pub const SERIES_COLORS: &[Color32] = &[
    Color32::from_rgb(66, 133, 244),  // Google blue
    Color32::from_rgb(52, 168, 83),   // Green
    Color32::from_rgb(171, 71, 188),  // Purple
    Color32::from_rgb(251, 140, 0),   // Orange
    Color32::from_rgb(3, 169, 244),   // Light blue
    Color32::from_rgb(229, 57, 53),   // Red
    Color32::from_rgb(0, 188, 212),   // Cyan
    Color32::from_rgb(255, 193, 7),   // Amber
];

// ── Apply custom visuals ─────────────────────────────────────────────────────

/// Dark visuals for the panels, preset buttons, menus and the About window.
pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.window_rounding = Rounding::same(8.0);

    let widgets = &mut visuals.widgets;
    widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style_button(&mut widgets.inactive, BUTTON_IDLE, BORDER_SUBTLE);
    style_button(&mut widgets.hovered, BUTTON_HOVER, ACCENT);
    style_button(&mut widgets.active, BUTTON_PRESSED, ACCENT);
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 4.0);
        style.spacing.button_padding = egui::vec2(10.0, 5.0);
    });
}

fn style_button(state: &mut WidgetVisuals, fill: Color32, border: Color32) {
    state.bg_fill = fill;
    state.weak_bg_fill = fill;
    state.bg_stroke = Stroke::new(1.0, border);
    state.rounding = Rounding::same(4.0);
}
