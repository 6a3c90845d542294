//! SVG backend for [`DrawTarget`].

use super::{Anchor, DrawTarget, Fill, LineCap, LinearGradient, Point, Stroke, TextStyle, Transform};
use std::fmt::Write;

/// In-memory SVG document.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    defs: String,
    body: String,
    depth: usize,
    gradients: usize,
}

impl SvgDocument {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            defs: String::new(),
            body: String::new(),
            depth: 1,
            gradients: 0,
        }
    }

    /// Closes open groups and returns the SVG text.
    pub fn finish(mut self) -> String {
        while self.depth > 1 {
            self.end_group();
        }
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.2} {:.2}">"#,
            self.width, self.height, self.width, self.height
        );
        if !self.defs.is_empty() {
            svg.push_str("  <defs>\n");
            svg.push_str(&self.defs);
            svg.push_str("  </defs>\n");
        }
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.body.push_str("  ");
        }
    }
}

impl DrawTarget for SvgDocument {
    fn begin_group(&mut self, transform: Transform) {
        self.indent();
        let mut attr = format!(
            "translate({:.2} {:.2})",
            transform.translate.x, transform.translate.y
        );
        if transform.scale != 1.0 {
            let _ = write!(attr, " scale({:.4})", transform.scale);
        }
        let _ = writeln!(self.body, r#"<g transform="{attr}">"#);
        self.depth += 1;
    }

    fn end_group(&mut self) {
        if self.depth <= 1 {
            return;
        }
        self.depth -= 1;
        self.indent();
        self.body.push_str("</g>\n");
    }

    fn line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.indent();
        let _ = writeln!(
            self.body,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{:.2}" stroke-linecap="{}"/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            escape(&stroke.color),
            stroke.width,
            linecap_name(stroke.linecap)
        );
    }

    fn rect(&mut self, origin: Point, width: f64, height: f64, fill: &Fill) {
        let paint = match fill {
            Fill::Solid(color) => escape(color),
            Fill::Gradient(id) => format!("url(#{id})"),
        };
        self.indent();
        let _ = writeln!(
            self.body,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
            origin.x, origin.y, width, height, paint
        );
    }

    fn text(&mut self, origin: Point, lines: &[String], line_pitch: f64, style: &TextStyle) {
        self.indent();
        let weight = if style.bold { r#" font-weight="bold""# } else { "" };
        let _ = write!(
            self.body,
            r#"<text fill="{}" font-family="{}" font-size="{:.2}" text-anchor="{}"{}>"#,
            escape(&style.color),
            escape(&style.family),
            style.size,
            anchor_name(style.anchor),
            weight
        );
        for (i, line) in lines.iter().enumerate() {
            let y = origin.y + (i as f64 * line_pitch).floor();
            let _ = write!(
                self.body,
                r#"<tspan x="{:.2}" y="{:.2}">{}</tspan>"#,
                origin.x,
                y,
                escape(line)
            );
        }
        self.body.push_str("</text>\n");
    }

    fn linear_gradient(&mut self, gradient: LinearGradient) -> Fill {
        self.gradients += 1;
        let id = format!("gradient{}", self.gradients);
        let _ = writeln!(
            self.defs,
            r#"    <linearGradient id="{id}" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}">"#,
            gradient.from.x, gradient.from.y, gradient.to.x, gradient.to.y
        );
        for stop in &gradient.stops {
            let _ = writeln!(
                self.defs,
                r#"      <stop offset="{:.4}" stop-color="{}" stop-opacity="{:.2}"/>"#,
                stop.offset,
                escape(&stop.color),
                stop.opacity
            );
        }
        self.defs.push_str("    </linearGradient>\n");
        Fill::Gradient(id)
    }
}

fn linecap_name(cap: LineCap) -> &'static str {
    match cap {
        LineCap::Butt => "butt",
        LineCap::Square => "square",
    }
}

fn anchor_name(anchor: Anchor) -> &'static str {
    match anchor {
        Anchor::Start => "start",
        Anchor::End => "end",
    }
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::SvgDocument;
    use crate::render::{Anchor, DrawTarget, Fill, Point, TextStyle, Transform};

    #[test]
    fn finish_closes_groups_and_escapes_text() {
        let mut doc = SvgDocument::new(100.0, 50.0);
        doc.begin_group(Transform::translate(5.0, 5.0));
        doc.rect(Point::new(0.0, 0.0), 10.0, 20.0, &Fill::Solid("#fff".into()));
        doc.text(
            Point::new(1.0, 2.0),
            &["A & B".to_string(), "<C>".to_string()],
            30.8,
            &TextStyle {
                color: "#000".into(),
                family: "serif".into(),
                size: 28.0,
                bold: false,
                anchor: Anchor::End,
            },
        );
        let svg = doc.finish();

        assert!(svg.contains(r#"<g transform="translate(5.00 5.00)">"#));
        assert!(svg.contains(r#"text-anchor="end""#));
        assert!(svg.contains("A &amp; B"));
        assert!(svg.contains(r#"<tspan x="1.00" y="32.00">&lt;C&gt;</tspan>"#));
        assert_eq!(svg.matches("<g ").count(), svg.matches("</g>").count());
        assert!(!svg.contains("<defs>"));
    }

    #[test]
    fn scaled_groups_emit_scale_after_translate() {
        let mut doc = SvgDocument::new(10.0, 10.0);
        doc.begin_group(Transform::translate(1.0, 2.0).scaled(0.5));
        let svg = doc.finish();

        assert!(svg.contains(r#"<g transform="translate(1.00 2.00) scale(0.5000)">"#));
    }
}
