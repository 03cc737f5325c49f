//! Parametric vector avatar
//!
//! Maps an [`AvatarConfig`] plus a level to an [`AvatarDrawing`]: a flat list of
//! shapes in a fixed 100x100 view box. The same drawing is painted by the GUI
//! and serialized to SVG by the CLI.

mod shapes;
mod svg;

pub use shapes::{parse_color, PathCmd, Rotation, Shape};

use crate::domain::{Accessory, AvatarConfig, Expression};

/// Edge length of the drawing's coordinate space
pub const VIEW_BOX: f32 = 100.0;

/// Default output size in pixels
pub const DEFAULT_SIZE: f32 = 150.0;

/// Level beyond which the avatar stops growing
pub const MAX_GROWTH_LEVEL: i32 = 50;

const HEADBAND_COLOR: &str = "#ef4444";
const DUMBBELL_BAR_COLOR: &str = "#64748b";
const DUMBBELL_WEIGHT_COLOR: &str = "#334155";
const CAPE_COLOR: &str = "#7c3aed";

/// Uniform growth factor for a level: `0.8 + min(level, 50) / 100`.
///
/// Negative levels are not clamped from below.
pub fn scale_for_level(level: i32) -> f32 {
    0.8 + level.min(MAX_GROWTH_LEVEL) as f32 / 100.0
}

/// A rendered avatar, ready to paint or serialize
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarDrawing {
    /// Output edge length in pixels
    pub size: f32,
    /// Growth factor applied around the view box center
    pub scale: f32,
    /// Shapes in paint order, in view box coordinates
    pub shapes: Vec<Shape>,
}

impl AvatarDrawing {
    /// Map a view box point to output pixels, growth scale included
    pub fn project(&self, x: f32, y: f32) -> (f32, f32) {
        let center = VIEW_BOX / 2.0;
        let px_per_unit = self.size / VIEW_BOX;
        (
            (center + (x - center) * self.scale) * px_per_unit,
            (center + (y - center) * self.scale) * px_per_unit,
        )
    }

    /// Pixel length of `units` view box units
    pub fn project_len(&self, units: f32) -> f32 {
        units * self.scale * self.size / VIEW_BOX
    }
}

/// Render an avatar. Pure: identical inputs always yield identical drawings.
pub fn render(config: &AvatarConfig, size: f32, level: i32) -> AvatarDrawing {
    let mut shapes = body_shapes(&config.body_color);
    shapes.extend(eye_shapes());
    shapes.push(expression_mark(config.expression));
    shapes.extend(accessory_shapes(config.accessory));

    AvatarDrawing {
        size,
        scale: scale_for_level(level),
        shapes,
    }
}

fn body_shapes(color: &str) -> Vec<Shape> {
    vec![
        // Head
        Shape::Circle {
            cx: 50.0,
            cy: 40.0,
            r: 20.0,
            fill: color.to_string(),
            glow: true,
        },
        // Torso
        Shape::Rect {
            x: 35.0,
            y: 55.0,
            width: 30.0,
            height: 35.0,
            rx: 10.0,
            fill: color.to_string(),
            rotation: None,
            glow: true,
        },
        // Arms
        Shape::Rect {
            x: 25.0,
            y: 60.0,
            width: 10.0,
            height: 20.0,
            rx: 5.0,
            fill: color.to_string(),
            rotation: Some(Rotation::new(-15.0, 25.0, 60.0)),
            glow: false,
        },
        Shape::Rect {
            x: 65.0,
            y: 60.0,
            width: 10.0,
            height: 20.0,
            rx: 5.0,
            fill: color.to_string(),
            rotation: Some(Rotation::new(15.0, 65.0, 60.0)),
            glow: false,
        },
    ]
}

fn eye_shapes() -> Vec<Shape> {
    let mut eyes = Vec::with_capacity(4);
    for (r, fill) in [(3.0, "white"), (1.5, "black")] {
        for cx in [43.0, 57.0] {
            eyes.push(Shape::circle(cx, 35.0, r, fill));
        }
    }
    eyes
}

/// Exactly one mark per expression tag
fn expression_mark(expression: Expression) -> Shape {
    match expression {
        Expression::Happy => Shape::Path {
            commands: vec![PathCmd::MoveTo(40.0, 45.0), PathCmd::QuadTo(50.0, 50.0, 60.0, 45.0)],
            fill: None,
            stroke: Some(("black".to_string(), 2.0)),
            opacity: 1.0,
        },
        Expression::Determined => Shape::Path {
            commands: vec![PathCmd::MoveTo(40.0, 47.0), PathCmd::LineTo(60.0, 47.0)],
            fill: None,
            stroke: Some(("black".to_string(), 2.0)),
            opacity: 1.0,
        },
        Expression::Exhausted => Shape::circle(50.0, 46.0, 2.0, "black"),
    }
}

fn accessory_shapes(accessory: Accessory) -> Vec<Shape> {
    match accessory {
        Accessory::None => Vec::new(),
        Accessory::Headband => vec![Shape::Rect {
            x: 30.0,
            y: 25.0,
            width: 40.0,
            height: 6.0,
            rx: 2.0,
            fill: HEADBAND_COLOR.to_string(),
            rotation: None,
            glow: false,
        }],
        Accessory::Dumbbells => vec![
            Shape::Rect {
                x: 15.0,
                y: 65.0,
                width: 15.0,
                height: 5.0,
                rx: 0.0,
                fill: DUMBBELL_BAR_COLOR.to_string(),
                rotation: None,
                glow: false,
            },
            Shape::circle(15.0, 67.5, 4.0, DUMBBELL_WEIGHT_COLOR),
            Shape::circle(30.0, 67.5, 4.0, DUMBBELL_WEIGHT_COLOR),
        ],
        Accessory::Cape => vec![Shape::Path {
            commands: vec![
                PathCmd::MoveTo(30.0, 60.0),
                PathCmd::LineTo(10.0, 95.0),
                PathCmd::LineTo(90.0, 95.0),
                PathCmd::LineTo(70.0, 60.0),
                PathCmd::Close,
            ],
            fill: Some(CAPE_COLOR.to_string()),
            stroke: None,
            opacity: 0.6,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(accessory: Accessory, expression: Expression) -> AvatarConfig {
        AvatarConfig::new("#10b981", accessory, expression)
    }

    /// Shapes that are neither body nor eyes
    fn overlays(drawing: &AvatarDrawing) -> &[Shape] {
        &drawing.shapes[8..]
    }

    #[test]
    fn test_scale_grows_then_clamps() {
        assert!((scale_for_level(1) - 0.81).abs() < 1e-6);
        assert!((scale_for_level(5) - 0.85).abs() < 1e-6);
        assert!((scale_for_level(50) - 1.3).abs() < 1e-6);
        assert_eq!(scale_for_level(50), scale_for_level(51));
        assert_eq!(scale_for_level(50), scale_for_level(1000));
    }

    #[test]
    fn test_negative_level_is_not_clamped() {
        assert!((scale_for_level(-30) - 0.5).abs() < 1e-6);
        assert!(scale_for_level(-100) < 0.0);
    }

    #[test]
    fn test_render_is_deterministic() {
        let cfg = config(Accessory::Cape, Expression::Happy);
        assert_eq!(render(&cfg, 250.0, 7), render(&cfg, 250.0, 7));
    }

    #[test]
    fn test_size_only_changes_output_size() {
        let cfg = config(Accessory::Headband, Expression::Determined);
        let small = render(&cfg, 100.0, 12);
        let large = render(&cfg, 250.0, 12);
        assert_eq!(small.shapes, large.shapes);
        assert_eq!(small.scale, large.scale);
        assert_ne!(small.size, large.size);

        let (sx, sy) = small.project(50.0, 40.0);
        let (lx, ly) = large.project(50.0, 40.0);
        assert!((lx / sx - 2.5).abs() < 1e-4);
        assert!((ly / sy - 2.5).abs() < 1e-4);
    }

    #[test]
    fn test_body_uses_config_color() {
        let drawing = render(&config(Accessory::None, Expression::Happy), 150.0, 1);
        let body_fills: Vec<&str> = drawing.shapes[..4].iter().filter_map(Shape::fill).collect();
        assert_eq!(body_fills, vec!["#10b981"; 4]);
    }

    #[test]
    fn test_exactly_one_expression_mark() {
        let happy = render(&config(Accessory::None, Expression::Happy), 150.0, 1);
        assert_eq!(overlays(&happy).len(), 1);
        assert!(matches!(
            &overlays(&happy)[0],
            Shape::Path { commands, .. } if matches!(commands[1], PathCmd::QuadTo(..))
        ));

        let determined = render(&config(Accessory::None, Expression::Determined), 150.0, 1);
        assert_eq!(overlays(&determined).len(), 1);
        assert!(matches!(
            &overlays(&determined)[0],
            Shape::Path { commands, .. } if commands[1] == PathCmd::LineTo(60.0, 47.0)
        ));

        let exhausted = render(&config(Accessory::None, Expression::Exhausted), 150.0, 1);
        assert_eq!(overlays(&exhausted).len(), 1);
        assert!(matches!(&overlays(&exhausted)[0], Shape::Circle { r, .. } if *r == 2.0));
    }

    #[test]
    fn test_accessory_overlays() {
        let count = |acc| overlays(&render(&config(acc, Expression::Happy), 150.0, 1)).len() - 1;
        assert_eq!(count(Accessory::None), 0);
        assert_eq!(count(Accessory::Headband), 1);
        assert_eq!(count(Accessory::Dumbbells), 3);
        assert_eq!(count(Accessory::Cape), 1);

        let cape = render(&config(Accessory::Cape, Expression::Happy), 150.0, 1);
        let last = cape.shapes.last().expect("cape shape");
        assert_eq!(last.fill(), Some(CAPE_COLOR));
        assert!(matches!(last, Shape::Path { opacity, .. } if (*opacity - 0.6).abs() < 1e-6));
    }

    #[test]
    fn test_project_applies_scale_around_center() {
        let drawing = render(&config(Accessory::None, Expression::Happy), 100.0, 20);
        // center is a fixed point
        assert_eq!(drawing.project(50.0, 50.0), (50.0, 50.0));
        let (x, _) = drawing.project(0.0, 50.0);
        assert!((x - (50.0 - 50.0 * 1.0)).abs() < 1e-4);
        assert!((drawing.project_len(10.0) - 10.0).abs() < 1e-4);
    }
}
