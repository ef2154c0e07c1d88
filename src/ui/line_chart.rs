use egui::{Align2, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};

use crate::pipeline::ChartData;
use crate::ui::palette::UserPalette;
use crate::ui::theme;

/// Approximate width reserved for one x-axis label.
const X_LABEL_WIDTH: f32 = 72.0;
const Y_TICK_TARGET: u32 = 5;

/// Render the per-user daily entry chart into the remaining space.
pub fn show_line_chart(chart: &ChartData, palette: &UserPalette, ui: &mut Ui) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let rect = response.rect;
    painter.rect_filled(rect, 0.0, theme::BG_DARK);

    draw_legend(&painter, rect, chart, palette);

    let plot = Rect::from_min_max(
        Pos2::new(
            rect.left() + theme::CHART_MARGIN_LEFT,
            rect.top() + theme::CHART_MARGIN_TOP,
        ),
        Pos2::new(
            rect.right() - theme::CHART_MARGIN_RIGHT,
            rect.bottom() - theme::CHART_MARGIN_BOTTOM,
        ),
    );
    if plot.width() <= 0.0 || plot.height() <= 0.0 {
        return;
    }

    let step = y_axis_step(chart.max_count());
    let y_max = (chart.max_count().max(1)).div_ceil(step) * step;
    let y_of = |count: u32| plot.bottom() - plot.height() * count as f32 / y_max as f32;

    // Horizontal grid + y ticks
    let mut tick = 0;
    while tick <= y_max {
        let y = y_of(tick);
        painter.line_segment(
            [Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)],
            Stroke::new(0.5, theme::GRID_LINE),
        );
        painter.text(
            Pos2::new(plot.left() - 8.0, y),
            Align2::RIGHT_CENTER,
            tick.to_string(),
            theme::font_tick(),
            theme::TEXT_SECONDARY,
        );
        tick += step;
    }

    // Axes
    let axis = Stroke::new(1.0, theme::AXIS_LINE);
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis);
    painter.line_segment([plot.left_top(), plot.left_bottom()], axis);
    painter.text(
        Pos2::new(plot.center().x, rect.bottom() - 14.0),
        Align2::CENTER_CENTER,
        "Days",
        theme::font_axis_title(),
        theme::TEXT_SECONDARY,
    );
    painter.text(
        Pos2::new(plot.left() - 8.0, plot.top() - 14.0),
        Align2::RIGHT_CENTER,
        "Entries",
        theme::font_axis_title(),
        theme::TEXT_SECONDARY,
    );

    if chart.is_empty() {
        painter.text(
            plot.center(),
            Align2::CENTER_CENTER,
            "No entries in this range",
            theme::font_legend(),
            theme::TEXT_DIM,
        );
        return;
    }

    let n = chart.labels.len();
    let x_of = |i: usize| column_x(i, n, plot.left(), plot.width());

    // X labels, thinned out when they would overlap
    let stride = label_stride(n, plot.width(), X_LABEL_WIDTH);
    for (i, label) in chart.labels.iter().enumerate() {
        let x = x_of(i);
        painter.line_segment(
            [Pos2::new(x, plot.bottom()), Pos2::new(x, plot.bottom() + 4.0)],
            axis,
        );
        if i % stride == 0 {
            painter.text(
                Pos2::new(x, plot.bottom() + 8.0),
                Align2::CENTER_TOP,
                &label.text,
                theme::font_tick(),
                theme::TEXT_SECONDARY,
            );
        }
    }

    // Series
    for series in &chart.series {
        let color = palette.color_for(&series.user_id);
        let points: Vec<Pos2> = series
            .counts
            .iter()
            .enumerate()
            .map(|(i, &count)| Pos2::new(x_of(i), y_of(count)))
            .collect();
        if points.len() > 1 {
            painter.add(Shape::line(points.clone(), Stroke::new(theme::LINE_WIDTH, color)));
        }
        for p in points {
            painter.circle_filled(p, theme::POINT_RADIUS, color);
        }
    }

    // Hover: highlight the nearest day and list its counts
    let hovered = response
        .hover_pos()
        .filter(|pos| plot.expand(8.0).contains(*pos))
        .and_then(|pos| nearest_column(pos.x, n, plot.left(), plot.width()));
    if let Some(i) = hovered {
        let x = x_of(i);
        painter.line_segment(
            [Pos2::new(x, plot.top()), Pos2::new(x, plot.bottom())],
            Stroke::new(1.0, theme::HOVER_LINE),
        );
        response.on_hover_ui_at_pointer(|ui| {
            ui.label(egui::RichText::new(&chart.labels[i].text).strong());
            for series in &chart.series {
                ui.horizontal(|ui| {
                    ui.colored_label(palette.color_for(&series.user_id), "●");
                    ui.label(format!("{}: {}", series.name, series.counts[i]));
                });
            }
        });
    }
}

fn draw_legend(painter: &egui::Painter, rect: Rect, chart: &ChartData, palette: &UserPalette) {
    let mut x = rect.left() + theme::CHART_MARGIN_LEFT;
    let y = rect.top() + 16.0;
    for series in &chart.series {
        let color = palette.color_for(&series.user_id);
        let swatch = Rect::from_center_size(
            Pos2::new(x + theme::LEGEND_SWATCH / 2.0, y),
            Vec2::splat(theme::LEGEND_SWATCH),
        );
        painter.rect_filled(swatch, 2.0, color);
        let text_rect = painter.text(
            Pos2::new(swatch.right() + 6.0, y),
            Align2::LEFT_CENTER,
            &series.name,
            theme::font_legend(),
            theme::TEXT_PRIMARY,
        );
        x = text_rect.right() + 18.0;
    }
}

/// Integer tick step giving roughly [`Y_TICK_TARGET`] ticks.
fn y_axis_step(max: u32) -> u32 {
    max.div_ceil(Y_TICK_TARGET).max(1)
}

/// Show every `stride`-th label so labels do not overlap.
fn label_stride(count: usize, width: f32, label_width: f32) -> usize {
    if count == 0 || width <= 0.0 {
        return 1;
    }
    let fits = (width / label_width).floor().max(1.0) as usize;
    count.div_ceil(fits).max(1)
}

/// X position of column `i` out of `count`; a lone column is centered.
fn column_x(i: usize, count: usize, left: f32, width: f32) -> f32 {
    if count <= 1 {
        left + width / 2.0
    } else {
        left + width * i as f32 / (count - 1) as f32
    }
}

fn nearest_column(x: f32, count: usize, left: f32, width: f32) -> Option<usize> {
    if count == 0 {
        return None;
    }
    if count == 1 {
        return Some(0);
    }
    let t = ((x - left) / width).clamp(0.0, 1.0);
    Some((t * (count - 1) as f32).round() as usize)
}
