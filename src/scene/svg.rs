//! Reference translation of a [`Scene`] into SVG, one element per primitive.

use std::fmt::{self, Write};

use crate::math::Point2;

use super::{FillStyle, LineCap, LineJoin, Primitive, Scene};

/// Renders the scene as a standalone SVG document.
#[must_use]
pub fn to_svg(scene: &Scene) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_svg(&mut out, scene);
    out
}

/// Writes the scene as an SVG document into `out`.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_svg<W: Write>(out: &mut W, scene: &Scene) -> fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = num(scene.width),
        h = num(scene.height),
    )?;
    for primitive in scene {
        write_primitive(out, primitive)?;
    }
    writeln!(out, "</svg>")
}

fn write_primitive<W: Write>(out: &mut W, primitive: &Primitive) -> fmt::Result {
    match primitive {
        Primitive::FillPolygon { points, style, .. } => {
            write!(out, r#"  <polygon points="{}""#, point_list(points))?;
            write_fill_style(out, style)?;
            writeln!(out, "/>")
        }
        Primitive::Line { points, style, .. } => {
            let cap = match style.cap {
                LineCap::Butt => "butt",
                LineCap::Round => "round",
            };
            let join = match style.join {
                LineJoin::Miter => "miter",
                LineJoin::Round => "round",
            };
            writeln!(
                out,
                r#"  <polyline points="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="{cap}" stroke-linejoin="{join}"/>"#,
                point_list(points),
                style.color,
                num(style.width),
            )
        }
        Primitive::Label { position, text, style } => writeln!(
            out,
            r#"  <text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            num(position.x),
            num(position.y),
            num(style.font_size),
            style.color,
            escape(text),
        ),
    }
}

fn write_fill_style<W: Write>(out: &mut W, style: &FillStyle) -> fmt::Result {
    write!(
        out,
        r#" fill="{}" fill-opacity="{}""#,
        style.fill,
        num(style.fill_opacity)
    )?;
    match &style.stroke {
        Some(stroke) => {
            write!(
                out,
                r#" stroke="{}" stroke-width="{}""#,
                stroke.color,
                num(stroke.width)
            )?;
            if let Some([dash, gap]) = stroke.dash {
                write!(out, r#" stroke-dasharray="{} {}""#, num(dash), num(gap))?;
            }
            Ok(())
        }
        None => write!(out, r#" stroke="none""#),
    }
}

fn point_list(points: &[Point2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", num(p.x), num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Two decimals, trailing zeros trimmed.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_owned()
    } else {
        s.to_owned()
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
