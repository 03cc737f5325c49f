//! SVG serialization for [`AvatarDrawing`]

use std::fmt::Write;

use super::shapes::{PathCmd, Shape};
use super::{AvatarDrawing, VIEW_BOX};

const GLOW_FILTER: &str = r#"<defs><filter id="glow"><feGaussianBlur stdDeviation="2.5" result="coloredBlur"/><feMerge><feMergeNode in="coloredBlur"/><feMergeNode in="SourceGraphic"/></feMerge></filter></defs>"#;

impl AvatarDrawing {
    /// Serialize to a standalone SVG document
    pub fn to_svg(&self) -> String {
        let center = VIEW_BOX / 2.0;
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {vb} {vb}">"#,
            size = fmt_num(self.size),
            vb = fmt_num(VIEW_BOX),
        );
        out.push_str(GLOW_FILTER);
        let _ = write!(
            out,
            r#"<g transform="translate({c} {c}) scale({s}) translate(-{c} -{c})">"#,
            c = fmt_num(center),
            s = fmt_num(self.scale),
        );
        for shape in &self.shapes {
            write_shape(&mut out, shape);
        }
        out.push_str("</g></svg>");
        out
    }
}

fn write_shape(out: &mut String, shape: &Shape) {
    match shape {
        Shape::Circle { cx, cy, r, fill, glow } => {
            let _ = write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}"{}/>"#,
                fmt_num(*cx),
                fmt_num(*cy),
                fmt_num(*r),
                escape(fill),
                glow_attr(*glow),
            );
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
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                fmt_num(*x),
                fmt_num(*y),
                fmt_num(*width),
                fmt_num(*height),
            );
            if *rx > 0.0 {
                let _ = write!(out, r#" rx="{}""#, fmt_num(*rx));
            }
            let _ = write!(out, r#" fill="{}""#, escape(fill));
            if let Some(rot) = rotation {
                let _ = write!(
                    out,
                    r#" transform="rotate({} {} {})""#,
                    fmt_num(rot.degrees),
                    fmt_num(rot.cx),
                    fmt_num(rot.cy),
                );
            }
            out.push_str(glow_attr(*glow));
            out.push_str("/>");
        }
        Shape::Path {
            commands,
            fill,
            stroke,
            opacity,
        } => {
            let _ = write!(out, r#"<path d="{}""#, path_data(commands));
            match fill {
                Some(fill) => {
                    let _ = write!(out, r#" fill="{}""#, escape(fill));
                }
                None => out.push_str(r#" fill="none""#),
            }
            if let Some((color, width)) = stroke {
                let _ = write!(
                    out,
                    r#" stroke="{}" stroke-width="{}" stroke-linecap="round""#,
                    escape(color),
                    fmt_num(*width),
                );
            }
            if *opacity < 1.0 {
                let _ = write!(out, r#" opacity="{}""#, fmt_num(*opacity));
            }
            out.push_str("/>");
        }
    }
}

fn path_data(commands: &[PathCmd]) -> String {
    commands
        .iter()
        .map(|cmd| match cmd {
            PathCmd::MoveTo(x, y) => format!("M {} {}", fmt_num(*x), fmt_num(*y)),
            PathCmd::LineTo(x, y) => format!("L {} {}", fmt_num(*x), fmt_num(*y)),
            PathCmd::QuadTo(cx, cy, x, y) => format!(
                "Q {} {} {} {}",
                fmt_num(*cx),
                fmt_num(*cy),
                fmt_num(*x),
                fmt_num(*y)
            ),
            PathCmd::Close => "Z".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn glow_attr(glow: bool) -> &'static str {
    if glow { r#" filter="url(#glow)""# } else { "" }
}

/// Format without trailing zeros ("50", "67.5", "0.85")
fn fmt_num(v: f32) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Colors come from user config, so keep them from breaking out of the attribute
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
