use super::{colour, SvgBuilder, HEIGHT, WIDTH};

use std::f64::consts::TAU;

/// Pie chart of each slice's share of the total.
///
/// Slices with a non-positive value are skipped. A single remaining
/// slice is drawn as a full circle.
pub fn pie_chart(title: &str, slices: &[(String, f64)]) -> String {
    let mut svg = SvgBuilder::new(title);

    let slices: Vec<&(String, f64)> = slices.iter().filter(|(_, v)| *v > 0.0).collect();
    let total: f64 = slices.iter().map(|(_, v)| v).sum();
    if slices.is_empty() {
        return svg.build();
    }

    let cx = WIDTH / 2.0;
    let cy = HEIGHT / 2.0 + 10.0;
    let r = HEIGHT / 2.0 - 40.0;

    if slices.len() == 1 {
        svg.push(format!(
            r#"<circle cx="{cx:.1}" cy="{cy:.1}" r="{r:.1}" fill="{}"/>"#,
            colour(0)
        ));
    } else {
        // start at 12 o'clock, go clockwise
        let mut angle = -TAU / 4.0;
        for (i, (label, v)) in slices.iter().enumerate() {
            let sweep = v / total * TAU;
            let (x1, y1) = (cx + r * angle.cos(), cy + r * angle.sin());
            let end = angle + sweep;
            let (x2, y2) = (cx + r * end.cos(), cy + r * end.sin());
            let large = if sweep > TAU / 2.0 { 1 } else { 0 };
            svg.push(format!(
                r#"<path d="M {cx:.1} {cy:.1} L {x1:.2} {y1:.2} A {r:.1} {r:.1} 0 {large} 1 {x2:.2} {y2:.2} Z" fill="{}"><title>{}: {:.1}%</title></path>"#,
                colour(i),
                super::xml_escape(label),
                v / total * 100.0
            ));
            angle = end;
        }
    }

    svg.legend(slices.iter().map(|(label, _)| label.as_str()));
    svg.build()
}

#[cfg(test)]
mod tests {
    use super::pie_chart;

    fn slices(values: &[f64]) -> Vec<(String, f64)> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("s{i}"), *v))
            .collect()
    }

    #[test]
    fn one_path_per_slice() {
        let svg = pie_chart("share", &slices(&[75.0, 85.0, 90.0, 70.0]));
        assert_eq!(svg.matches("<path ").count(), 4);
        assert!(svg.contains(">s3</text>"));
    }

    #[test]
    fn shares_in_tooltips() {
        let svg = pie_chart("", &slices(&[1.0, 3.0]));
        assert!(svg.contains("s0: 25.0%"));
        assert!(svg.contains("s1: 75.0%"));
    }

    #[test]
    fn large_arc_flag_for_majority_slice() {
        let svg = pie_chart("", &slices(&[1.0, 3.0]));
        assert!(svg.contains(" 0 1 1 "));
    }

    #[test]
    fn single_slice_is_a_circle() {
        let svg = pie_chart("", &slices(&[0.0, 5.0]));
        assert!(svg.contains("<circle "));
        assert!(!svg.contains("<path "));
    }

    #[test]
    fn nothing_positive_gives_empty_chart() {
        let svg = pie_chart("", &slices(&[0.0, -1.0]));
        assert!(!svg.contains("<circle"));
        assert!(!svg.contains("<path"));
    }
}
