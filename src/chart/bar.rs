use super::{colour, SvgBuilder, HEIGHT, MARGIN, WIDTH};

/// Grouped bar chart: one group per category, one bar per series.
///
/// Each series must hold one value per category; missing values are drawn
/// as zero. Negative values are clamped to zero.
pub fn bar_chart(title: &str, categories: &[String], series: &[(String, Vec<f64>)]) -> String {
    let mut svg = SvgBuilder::new(title);
    if categories.is_empty() || series.is_empty() {
        return svg.build();
    }

    let max = series
        .iter()
        .flat_map(|(_, values)| values.iter().copied())
        .fold(0.0_f64, f64::max);
    let scale = if max > 0.0 { max } else { 1.0 };

    let plot_w = WIDTH - 2.0 * MARGIN;
    let plot_h = HEIGHT - 2.0 * MARGIN;
    let base_y = HEIGHT - MARGIN;
    let group_w = plot_w / categories.len() as f64;
    let bar_w = group_w * 0.8 / series.len() as f64;

    svg.line(MARGIN, base_y, WIDTH - MARGIN, base_y);
    svg.line(MARGIN, MARGIN, MARGIN, base_y);
    svg.text(MARGIN - 4.0, MARGIN + 4.0, "end", &format!("{max:.0}"));
    svg.text(MARGIN - 4.0, base_y, "end", "0");

    for (ci, category) in categories.iter().enumerate() {
        let group_x = MARGIN + group_w * ci as f64 + group_w * 0.1;
        for (si, (_, values)) in series.iter().enumerate() {
            let v = values.get(ci).copied().unwrap_or(0.0).max(0.0);
            let h = v / scale * plot_h;
            let x = group_x + bar_w * si as f64;
            svg.push(format!(
                r#"<rect x="{x:.1}" y="{:.1}" width="{bar_w:.1}" height="{h:.1}" fill="{}"><title>{v}</title></rect>"#,
                base_y - h,
                colour(si)
            ));
        }
        svg.text(group_x + group_w * 0.4, base_y + 16.0, "middle", category);
    }

    svg.legend(series.iter().map(|(name, _)| name.as_str()));
    svg.build()
}

#[cfg(test)]
mod tests {
    use super::bar_chart;

    fn cats() -> Vec<String> {
        vec!["CRISPR".to_string(), "백신".to_string()]
    }

    #[test]
    fn one_rect_per_value_plus_legend() {
        let series = vec![
            ("2022".to_string(), vec![45.0, 80.0]),
            ("2025".to_string(), vec![75.0, 90.0]),
        ];
        let svg = bar_chart("growth", &cats(), &series);
        // 4 bars + 2 legend swatches
        assert_eq!(svg.matches("<rect ").count(), 6);
        assert!(svg.contains(">CRISPR</text>"));
        assert!(svg.contains(">백신</text>"));
        assert!(svg.contains(">2025</text>"));
    }

    #[test]
    fn tallest_bar_fills_plot() {
        let series = vec![("only".to_string(), vec![10.0, 20.0])];
        let svg = bar_chart("", &cats(), &series);
        // plot height is 300 - 2 * 40
        assert!(svg.contains(r#"height="220.0""#));
        assert!(svg.contains(r#"height="110.0""#));
    }

    #[test]
    fn empty_input_gives_empty_chart() {
        let svg = bar_chart("nothing", &[], &[]);
        assert!(!svg.contains("<rect"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn all_zero_values_do_not_divide_by_zero() {
        let series = vec![("z".to_string(), vec![0.0, 0.0])];
        let svg = bar_chart("", &cats(), &series);
        assert!(!svg.contains("NaN"));
    }
}
