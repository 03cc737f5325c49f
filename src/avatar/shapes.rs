//! Drawing primitives in view box coordinates

/// Rotation in degrees around a pivot point (SVG `rotate(deg cx cy)`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
    pub cx: f32,
    pub cy: f32,
}

impl Rotation {
    pub fn new(degrees: f32, cx: f32, cy: f32) -> Self {
        Self { degrees, cx, cy }
    }

    /// Rotate a point around the pivot
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        let (sin, cos) = self.degrees.to_radians().sin_cos();
        let (dx, dy) = (x - self.cx, y - self.cy);
        (self.cx + dx * cos - dy * sin, self.cy + dx * sin + dy * cos)
    }
}

/// A path segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(f32, f32),
    LineTo(f32, f32),
    /// Quadratic curve: control point, then end point
    QuadTo(f32, f32, f32, f32),
    Close,
}

/// A single paintable shape. Colors are hex strings or the names `white`/`black`.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        fill: String,
        glow: bool,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        /// Corner radius
        rx: f32,
        fill: String,
        rotation: Option<Rotation>,
        glow: bool,
    },
    Path {
        commands: Vec<PathCmd>,
        fill: Option<String>,
        /// Stroke color and width (round caps)
        stroke: Option<(String, f32)>,
        opacity: f32,
    },
}

impl Shape {
    pub fn circle(cx: f32, cy: f32, r: f32, fill: &str) -> Self {
        Shape::Circle {
            cx,
            cy,
            r,
            fill: fill.to_string(),
            glow: false,
        }
    }

    pub fn fill(&self) -> Option<&str> {
        match self {
            Shape::Circle { fill, .. } | Shape::Rect { fill, .. } => Some(fill),
            Shape::Path { fill, .. } => fill.as_deref(),
        }
    }

    /// Corner points of a rect after rotation (clockwise from top-left)
    pub fn rect_corners(x: f32, y: f32, width: f32, height: f32, rotation: Option<Rotation>) -> [(f32, f32); 4] {
        let corners = [(x, y), (x + width, y), (x + width, y + height), (x, y + height)];
        match rotation {
            Some(rot) => corners.map(|(px, py)| rot.apply(px, py)),
            None => corners,
        }
    }
}

/// Parse a color into RGB. Accepts `#rgb`, `#rrggbb`, `white` and `black`.
pub fn parse_color(color: &str) -> Option<(u8, u8, u8)> {
    match color.trim() {
        "white" => return Some((255, 255, 255)),
        "black" => return Some((0, 0, 0)),
        _ => {}
    }
    let hex = color.trim().strip_prefix('#')?;
    // `get` keeps non-ASCII input from splitting a char
    let channel = |from: usize, to: usize| u8::from_str_radix(hex.get(from..to)?, 16).ok();
    match hex.len() {
        6 => Some((channel(0, 2)?, channel(2, 4)?, channel(4, 6)?)),
        3 => {
            let expand = |i: usize| channel(i, i + 1).map(|v| v * 17);
            Some((expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#10b981"), Some((0x10, 0xb9, 0x81)));
        assert_eq!(parse_color("#fff"), Some((255, 255, 255)));
        assert_eq!(parse_color("black"), Some((0, 0, 0)));
        assert_eq!(parse_color("10b981"), None);
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#zzzzzz"), None);
        // multi-byte chars never panic
        assert_eq!(parse_color("#aé123"), None);
        assert_eq!(parse_color("#éa"), None);
    }

    #[test]
    fn test_rotation_keeps_pivot_fixed() {
        let rot = Rotation::new(15.0, 65.0, 60.0);
        let (x, y) = rot.apply(65.0, 60.0);
        assert!((x - 65.0).abs() < 1e-5 && (y - 60.0).abs() < 1e-5);

        let quarter = Rotation::new(90.0, 0.0, 0.0);
        let (x, y) = quarter.apply(1.0, 0.0);
        assert!(x.abs() < 1e-5 && (y - 1.0).abs() < 1e-5);
    }
}
