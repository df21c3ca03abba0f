//! Inline SVG charts for the slides.
//!
//! Every chart is rendered to a self-contained `<svg>` string so a
//! presenter can drop it straight into a page.

mod bar;
mod line;
mod pie;

pub use self::bar::bar_chart;
pub use self::line::line_chart;
pub use self::pie::pie_chart;

use std::fmt::Write;

pub const WIDTH: f64 = 480.0;
pub const HEIGHT: f64 = 300.0;
const MARGIN: f64 = 40.0;
const FONT_SIZE: f64 = 11.0;

/// Fill colours, cycled by series or slice.
const PALETTE: [&str; 6] = [
    "#4c78a8", "#f58518", "#54a24b", "#e45756", "#72b7b2", "#b279a2",
];

pub fn colour(i: usize) -> &'static str {
    PALETTE[i % PALETTE.len()]
}

/// Escape text for use inside SVG/XML content and attributes.
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Accumulates SVG elements and wraps them in a sized `<svg>` root.
#[derive(Debug, Default)]
struct SvgBuilder {
    title: String,
    elements: Vec<String>,
}

impl SvgBuilder {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            elements: Vec::new(),
        }
    }

    fn push(&mut self, element: String) {
        self.elements.push(element);
    }

    fn text(&mut self, x: f64, y: f64, anchor: &str, s: &str) {
        self.push(format!(
            r#"<text x="{x:.1}" y="{y:.1}" font-size="{FONT_SIZE}" text-anchor="{anchor}">{}</text>"#,
            xml_escape(s)
        ));
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.push(format!(
            r##"<line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="#64748b"/>"##
        ));
    }

    /// Horizontal legend along the top edge.
    fn legend<'a>(&mut self, labels: impl Iterator<Item = &'a str>) {
        let mut x = MARGIN;
        for (i, label) in labels.enumerate() {
            self.push(format!(
                r#"<rect x="{x:.1}" y="8" width="10" height="10" fill="{}"/>"#,
                colour(i)
            ));
            self.text(x + 14.0, 17.0, "start", label);
            // rough advance; labels are short
            x += 24.0 + 7.0 * label.chars().count() as f64;
        }
    }

    fn build(self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg viewBox="0 0 {WIDTH} {HEIGHT}" xmlns="http://www.w3.org/2000/svg" role="img">"#
        );
        if !self.title.is_empty() {
            let _ = writeln!(out, "  <title>{}</title>", xml_escape(&self.title));
        }
        for element in self.elements {
            let _ = writeln!(out, "  {element}");
        }
        out.push_str("</svg>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape() {
        assert_eq!(xml_escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
        assert_eq!(xml_escape("세포 치료제"), "세포 치료제");
    }

    #[test]
    fn builder_wraps_elements() {
        let mut b = SvgBuilder::new("t & t");
        b.line(0.0, 0.0, 1.0, 1.0);
        let svg = b.build();
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("<title>t &amp; t</title>"));
        assert!(svg.contains("<line "));
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(colour(0), colour(PALETTE.len()));
    }
}
