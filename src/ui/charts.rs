use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{
    pos2, vec2, Align2, Color32, FontId, Rect, RichText, Sense, Shape, Stroke, Ui,
};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::color::{generate_palette, heat_color};
use crate::views::{ChartBody, ChartView, HeatmapGrid};

const CHART_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Render one chart view. `idx` keeps plot ids unique within a page.
pub fn render(ui: &mut Ui, idx: usize, view: &ChartView) {
    match &view.body {
        ChartBody::Line(points) => line_chart(ui, idx, points, view.value_label),
        ChartBody::Bar(bars) => bar_chart(ui, idx, bars, view.value_label),
        ChartBody::Pie(slices) => pie_chart(ui, slices),
        ChartBody::Heatmap(grid) => heatmap(ui, grid),
    }
}

fn empty_note(ui: &mut Ui) {
    ui.label(RichText::new("No data for the current filter selection.").weak());
}

// ---------------------------------------------------------------------------
// Line chart (trend over time)
// ---------------------------------------------------------------------------

fn line_chart(ui: &mut Ui, idx: usize, points: &[[f64; 2]], value_label: &str) {
    if points.is_empty() {
        empty_note(ui);
        return;
    }

    Plot::new(("dashboard_chart", idx))
        .height(CHART_HEIGHT)
        .x_axis_label("year")
        .y_axis_label(value_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line_points: PlotPoints = points.iter().copied().collect();
            plot_ui.line(
                Line::new(line_points)
                    .color(Color32::from_rgb(0xff, 0x63, 0x47))
                    .width(2.0),
            );
            let marker_points: PlotPoints = points.iter().copied().collect();
            plot_ui.points(
                Points::new(marker_points)
                    .color(Color32::from_rgb(0xff, 0x63, 0x47))
                    .radius(3.0),
            );
        });
}

// ---------------------------------------------------------------------------
// Bar chart – one coloured group per category, labelled via the legend
// ---------------------------------------------------------------------------

fn bar_chart(ui: &mut Ui, idx: usize, bars: &[(String, f64)], value_label: &str) {
    if bars.is_empty() {
        empty_note(ui);
        return;
    }

    let palette = generate_palette(bars.len());

    Plot::new(("dashboard_chart", idx))
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .y_axis_label(value_label)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            for (i, (label, value)) in bars.iter().enumerate() {
                let bar = Bar::new(i as f64, *value)
                    .width(0.7)
                    .name(format!("{label}: {value:.2}"));
                plot_ui.bar_chart(
                    BarChart::new(vec![bar])
                        .color(palette[i])
                        .name(label),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Pie chart – donut, painted directly
// ---------------------------------------------------------------------------

fn pie_chart(ui: &mut Ui, slices: &[(String, f64)]) {
    let total: f64 = slices.iter().map(|(_, v)| v).sum();
    if slices.is_empty() || total <= 0.0 {
        empty_note(ui);
        return;
    }

    let palette = generate_palette(slices.len());

    ui.horizontal(|ui: &mut Ui| {
        let (rect, _) = ui.allocate_exact_size(vec2(280.0, 280.0), Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let outer = rect.width().min(rect.height()) * 0.5 - 6.0;
        let inner = outer * 0.4; // donut hole

        let mut start = -FRAC_PI_2;
        for (i, (_, value)) in slices.iter().enumerate() {
            let sweep = (value / total) as f32 * TAU;
            // Arc approximated as a fan of thin quads; each quad is convex
            // so egui tessellates it reliably.
            let steps = ((sweep / 0.05).ceil() as usize).max(1);
            for step in 0..steps {
                let a0 = start + sweep * step as f32 / steps as f32;
                let a1 = start + sweep * (step + 1) as f32 / steps as f32;
                let quad = vec![
                    center + vec2(a0.cos(), a0.sin()) * inner,
                    center + vec2(a0.cos(), a0.sin()) * outer,
                    center + vec2(a1.cos(), a1.sin()) * outer,
                    center + vec2(a1.cos(), a1.sin()) * inner,
                ];
                painter.add(Shape::convex_polygon(quad, palette[i], Stroke::NONE));
            }
            start += sweep;
        }

        // Legend with percentages.
        ui.vertical(|ui: &mut Ui| {
            for (i, (label, value)) in slices.iter().enumerate() {
                let pct = value / total * 100.0;
                ui.label(
                    RichText::new(format!("■ {label}: {pct:.1}%  ({value:.0})"))
                        .color(palette[i]),
                );
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Heatmap – year × sex grid, painted directly
// ---------------------------------------------------------------------------

fn heatmap(ui: &mut Ui, grid: &HeatmapGrid) {
    if grid.cells.is_empty() {
        empty_note(ui);
        return;
    }

    let min = grid.cells.values().copied().fold(f64::INFINITY, f64::min);
    let max = grid
        .cells
        .values()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let span = (max - min).max(f64::EPSILON);

    let row_height = 36.0;
    let left_gutter = 64.0;
    let bottom_gutter = 22.0;
    let n_rows = grid.sexes.len() as f32;
    let n_cols = grid.years.len() as f32;

    let width = ui.available_width();
    let height = n_rows * row_height + bottom_gutter;
    let (rect, _) = ui.allocate_exact_size(vec2(width, height), Sense::hover());

    let text_color = ui.visuals().text_color();
    let painter = ui.painter_at(rect);
    let cell_width = (rect.width() - left_gutter) / n_cols;
    let grid_left = rect.left() + left_gutter;

    for (row, sex) in grid.sexes.iter().enumerate() {
        let top = rect.top() + row as f32 * row_height;

        painter.text(
            pos2(rect.left() + 4.0, top + row_height * 0.5),
            Align2::LEFT_CENTER,
            sex.to_string(),
            FontId::proportional(12.0),
            text_color,
        );

        for (col, year) in grid.years.iter().enumerate() {
            let Some(value) = grid.cells.get(&(*year, *sex)) else {
                continue;
            };
            let t = ((value - min) / span) as f32;
            let cell = Rect::from_min_size(
                pos2(grid_left + col as f32 * cell_width, top),
                vec2(cell_width, row_height),
            );
            painter.rect_filled(cell.shrink(0.5), 0.0, heat_color(t));
        }
    }

    // Year labels along the bottom, thinned to roughly ten.
    let label_step = ((grid.years.len() + 9) / 10).max(1);
    for (col, year) in grid.years.iter().enumerate().step_by(label_step) {
        painter.text(
            pos2(
                grid_left + (col as f32 + 0.5) * cell_width,
                rect.bottom() - bottom_gutter + 4.0,
            ),
            Align2::CENTER_TOP,
            year.to_string(),
            FontId::proportional(10.0),
            text_color,
        );
    }

    // Colour scale reference.
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(format!("{min:.2}")).small());
        let (bar_rect, _) = ui.allocate_exact_size(vec2(120.0, 12.0), Sense::hover());
        let bar_painter = ui.painter_at(bar_rect);
        let steps = 32;
        let step_width = bar_rect.width() / steps as f32;
        for i in 0..steps {
            let t = i as f32 / (steps - 1) as f32;
            let seg = Rect::from_min_size(
                pos2(bar_rect.left() + i as f32 * step_width, bar_rect.top()),
                vec2(step_width, bar_rect.height()),
            );
            bar_painter.rect_filled(seg, 0.0, heat_color(t));
        }
        ui.label(RichText::new(format!("{max:.2}")).small());
    });
}
