//! Native egui chart rendering
//!
//! Area chart for the calorie history using egui's Painter API.

use eframe::egui::{self, Pos2, RichText, Stroke, Vec2};

use crate::domain::CaloriePoint;
use crate::gui::theme::{ACCENT_GREEN, BG_HIGHLIGHT, BG_SECONDARY, TEXT_DIM};

const PADDING: f32 = 16.0;
const LABEL_HEIGHT: f32 = 16.0;
const AXIS_WIDTH: f32 = 36.0;
const GRID_LINES: usize = 4;

/// Calorie burn over time: filled area under a line, with date labels
pub fn calorie_chart(ui: &mut egui::Ui, data: &[CaloriePoint], height: f32) {
    egui::Frame::NONE
        .fill(BG_SECONDARY)
        .corner_radius(24.0)
        .inner_margin(PADDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Queima de Calorias (Últimos 7 dias)").size(17.0).strong());
            ui.add_space(8.0);
            area_chart(ui, data, height);
        });
}

fn area_chart(ui: &mut egui::Ui, data: &[CaloriePoint], height: f32) {
    if data.len() < 2 {
        ui.label(RichText::new("Sem dados suficientes").color(TEXT_DIM));
        return;
    }
    let max_val = data.iter().map(|p| p.calories).max().unwrap_or(0).max(1) as f32;

    let (response, painter) = ui.allocate_painter(Vec2::new(ui.available_width(), height), egui::Sense::hover());
    let rect = response.rect;
    let chart_left = rect.left() + AXIS_WIDTH;
    let chart_top = rect.top();
    let chart_width = rect.width() - AXIS_WIDTH;
    let chart_height = rect.height() - LABEL_HEIGHT;
    let baseline = chart_top + chart_height;

    // Horizontal grid lines with y-axis labels
    for i in 0..=GRID_LINES {
        let frac = i as f32 / GRID_LINES as f32;
        let y = baseline - frac * chart_height;
        painter.line_segment(
            [Pos2::new(chart_left, y), Pos2::new(chart_left + chart_width, y)],
            Stroke::new(1.0, BG_HIGHLIGHT),
        );
        painter.text(
            Pos2::new(chart_left - 6.0, y),
            egui::Align2::RIGHT_CENTER,
            format!("{:.0}", max_val * frac),
            egui::FontId::proportional(10.0),
            TEXT_DIM,
        );
    }

    let step_x = chart_width / (data.len() - 1) as f32;
    let points: Vec<Pos2> = data
        .iter()
        .enumerate()
        .map(|(i, p)| {
            Pos2::new(
                chart_left + i as f32 * step_x,
                baseline - (p.calories as f32 / max_val) * chart_height,
            )
        })
        .collect();

    // Area: one convex quad per segment
    let area_color = ACCENT_GREEN.gamma_multiply(0.25);
    for window in points.windows(2) {
        let quad = vec![
            window[0],
            window[1],
            Pos2::new(window[1].x, baseline),
            Pos2::new(window[0].x, baseline),
        ];
        painter.add(egui::Shape::convex_polygon(quad, area_color, Stroke::NONE));
    }

    painter.add(egui::Shape::line(points.clone(), Stroke::new(2.0, ACCENT_GREEN)));

    for (point, day) in points.iter().zip(data) {
        painter.circle_filled(*point, 3.0, ACCENT_GREEN);
        painter.text(
            Pos2::new(point.x, rect.bottom()),
            egui::Align2::CENTER_BOTTOM,
            day.label(),
            egui::FontId::proportional(10.0),
            TEXT_DIM,
        );
    }

    // Tooltip for the nearest point
    if let Some(hover) = response.hover_pos() {
        let nearest = ((hover.x - chart_left) / step_x).round().clamp(0.0, (data.len() - 1) as f32) as usize;
        let point = &data[nearest];
        response.on_hover_text(format!("{}: {} kcal", point.label(), point.calories));
    }
}
