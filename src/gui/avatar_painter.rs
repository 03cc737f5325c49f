//! Paint an [`AvatarDrawing`] with the egui painter

use eframe::egui::{self, Color32, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::avatar::{parse_color, render, AvatarDrawing, PathCmd, Shape};
use crate::domain::AvatarConfig;

/// How far the glow halo extends, in view box units
const GLOW_SPREAD: f32 = 2.5;
const GLOW_ALPHA: f32 = 0.25;
/// Line segments used to flatten one quadratic curve
const CURVE_SEGMENTS: usize = 16;

/// Allocate a `size` x `size` square and paint the avatar into it
pub fn avatar(ui: &mut egui::Ui, config: &AvatarConfig, size: f32, level: u32) -> egui::Response {
    let drawing = render(config, size, render_level(level));
    let (response, painter) = ui.allocate_painter(Vec2::splat(size), Sense::hover());
    paint(&painter, response.rect.min, &drawing);
    response
}

/// Levels past `i32::MAX` saturate; growth is capped long before that
fn render_level(level: u32) -> i32 {
    i32::try_from(level).unwrap_or(i32::MAX)
}

/// Paint `drawing` with its top-left corner at `origin`
pub fn paint(painter: &Painter, origin: Pos2, drawing: &AvatarDrawing) {
    let to_screen = |x: f32, y: f32| {
        let (px, py) = drawing.project(x, y);
        origin + Vec2::new(px, py)
    };

    for shape in &drawing.shapes {
        match shape {
            Shape::Circle { cx, cy, r, fill, glow } => {
                let color = color32(fill);
                let center = to_screen(*cx, *cy);
                let radius = drawing.project_len(*r);
                if *glow {
                    painter.circle_filled(
                        center,
                        radius + drawing.project_len(GLOW_SPREAD),
                        color.gamma_multiply(GLOW_ALPHA),
                    );
                }
                painter.circle_filled(center, radius, color);
            }
            Shape::Rect {
                x,
                y,
                width,
                height,
                rx,
                fill,
                rotation,
                glow,
            } => {
                let color = color32(fill);
                match rotation {
                    None => {
                        let rect = Rect::from_min_max(to_screen(*x, *y), to_screen(x + width, y + height));
                        let radius = drawing.project_len(*rx);
                        if *glow {
                            let spread = drawing.project_len(GLOW_SPREAD);
                            painter.rect_filled(rect.expand(spread), radius + spread, color.gamma_multiply(GLOW_ALPHA));
                        }
                        painter.rect_filled(rect, radius, color);
                    }
                    Some(_) => {
                        // egui has no rotated rounded rect; corners are dropped
                        let points = Shape::rect_corners(*x, *y, *width, *height, *rotation)
                            .map(|(px, py)| to_screen(px, py))
                            .to_vec();
                        painter.add(egui::Shape::convex_polygon(points, color, Stroke::NONE));
                    }
                }
            }
            Shape::Path {
                commands,
                fill,
                stroke,
                opacity,
            } => {
                let points: Vec<Pos2> = flatten(commands)
                    .into_iter()
                    .map(|(px, py)| to_screen(px, py))
                    .collect();
                if points.len() < 2 {
                    continue;
                }
                if let Some(fill) = fill {
                    painter.add(egui::Shape::convex_polygon(
                        points.clone(),
                        color32(fill).gamma_multiply(*opacity),
                        Stroke::NONE,
                    ));
                }
                if let Some((color, width)) = stroke {
                    let color = color32(color).gamma_multiply(*opacity);
                    let width = drawing.project_len(*width);
                    painter.add(egui::Shape::line(points.clone(), Stroke::new(width, color)));
                    // round caps
                    for end in [points[0], points[points.len() - 1]] {
                        painter.circle_filled(end, width / 2.0, color);
                    }
                }
            }
        }
    }
}

/// Flatten path commands into a polyline (view box coordinates)
fn flatten(commands: &[PathCmd]) -> Vec<(f32, f32)> {
    let mut points = Vec::new();
    let mut current = (0.0, 0.0);
    let mut start = (0.0, 0.0);

    for cmd in commands {
        match *cmd {
            PathCmd::MoveTo(x, y) => {
                current = (x, y);
                start = current;
                points.push(current);
            }
            PathCmd::LineTo(x, y) => {
                current = (x, y);
                points.push(current);
            }
            PathCmd::QuadTo(cx, cy, x, y) => {
                let (x0, y0) = current;
                for i in 1..=CURVE_SEGMENTS {
                    let t = i as f32 / CURVE_SEGMENTS as f32;
                    let u = 1.0 - t;
                    points.push((
                        u * u * x0 + 2.0 * u * t * cx + t * t * x,
                        u * u * y0 + 2.0 * u * t * cy + t * t * y,
                    ));
                }
                current = (x, y);
            }
            PathCmd::Close => {
                if current != start {
                    points.push(start);
                }
                current = start;
            }
        }
    }
    points
}

/// Unparseable colors paint gray
fn color32(color: &str) -> Color32 {
    parse_color(color)
        .map(|(r, g, b)| Color32::from_rgb(r, g, b))
        .unwrap_or(Color32::GRAY)
}
