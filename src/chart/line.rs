use super::{colour, SvgBuilder, HEIGHT, MARGIN, WIDTH};

use itertools::Itertools;

/// Single-series line chart with labelled axes.
pub fn line_chart(title: &str, points: &[(f64, f64)], x_label: &str, y_label: &str) -> String {
    let mut svg = SvgBuilder::new(title);
    if points.is_empty() {
        return svg.build();
    }

    let (x_min, x_max) = bounds(points.iter().map(|p| p.0));
    let (y_min, y_max) = bounds(points.iter().map(|p| p.1));

    let plot_w = WIDTH - 2.0 * MARGIN;
    let plot_h = HEIGHT - 2.0 * MARGIN;
    let base_y = HEIGHT - MARGIN;

    let project = |(x, y): (f64, f64)| {
        (
            MARGIN + (x - x_min) / (x_max - x_min) * plot_w,
            base_y - (y - y_min) / (y_max - y_min) * plot_h,
        )
    };

    svg.line(MARGIN, base_y, WIDTH - MARGIN, base_y);
    svg.line(MARGIN, MARGIN, MARGIN, base_y);
    svg.text(MARGIN, base_y + 14.0, "middle", &format!("{x_min:.0}"));
    svg.text(WIDTH - MARGIN, base_y + 14.0, "middle", &format!("{x_max:.0}"));
    svg.text(MARGIN - 4.0, base_y, "end", &format!("{y_min:.0}"));
    svg.text(MARGIN - 4.0, MARGIN + 4.0, "end", &format!("{y_max:.0}"));
    svg.text(WIDTH / 2.0, HEIGHT - 8.0, "middle", x_label);
    svg.text(MARGIN, MARGIN - 10.0, "middle", y_label);

    let path = points
        .iter()
        .map(|p| {
            let (x, y) = project(*p);
            format!("{x:.1},{y:.1}")
        })
        .join(" ");
    svg.push(format!(
        r#"<polyline points="{path}" fill="none" stroke="{}" stroke-width="2"/>"#,
        colour(0)
    ));

    svg.build()
}

/// Min and max of the values, widened by one unit either side when flat.
fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if max > min {
        (min, max)
    } else {
        (min - 1.0, max + 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{bounds, line_chart};

    #[test]
    fn polyline_has_every_point() {
        let points: Vec<(f64, f64)> = (0..5).map(|h| (h as f64, (h * h) as f64)).collect();
        let svg = line_chart("ATP", &points, "hours", "ATP");
        let polyline = svg
            .lines()
            .find(|l| l.contains("<polyline"))
            .expect("polyline present");
        assert_eq!(polyline.matches(',').count(), 5);
        assert!(svg.contains(">hours</text>"));
    }

    #[test]
    fn endpoints_hit_plot_corners() {
        let svg = line_chart("", &[(0.0, 0.0), (1.0, 1.0)], "", "");
        // bottom-left then top-right of the plot area
        assert!(svg.contains(r#"points="40.0,260.0 440.0,40.0""#));
    }

    #[test]
    fn flat_series_is_finite() {
        let svg = line_chart("", &[(0.0, 3.0), (1.0, 3.0)], "", "");
        assert!(!svg.contains("NaN"));
        assert_eq!(bounds([3.0, 3.0].into_iter()), (2.0, 4.0));
    }

    #[test]
    fn empty_series() {
        let svg = line_chart("", &[], "x", "y");
        assert!(!svg.contains("<polyline"));
    }
}
