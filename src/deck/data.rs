use serde::Serialize;

/// Growth figure for one biotechnology field, 2022 against the 2025 projection.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GrowthRecord {
    #[serde(rename = "기술")]
    pub technology: &'static str,
    #[serde(rename = "2022")]
    pub y2022: u32,
    #[serde(rename = "2025 예상")]
    pub y2025: u32,
}

pub const GROWTH_COLUMNS: [&str; 3] = ["기술", "2022", "2025 예상"];

pub fn growth_table() -> Vec<GrowthRecord> {
    vec![
        GrowthRecord { technology: "CRISPR", y2022: 45, y2025: 75 },
        GrowthRecord { technology: "인공 장기", y2022: 60, y2025: 85 },
        GrowthRecord { technology: "백신 플랫폼", y2022: 80, y2025: 90 },
        GrowthRecord { technology: "세포 치료제", y2022: 55, y2025: 70 },
    ]
}

/// Simulated ATP level over one day: `sin(h / 3) * 50 + 100` for each hour.
pub fn atp_series() -> Vec<(f64, f64)> {
    (0..24)
        .map(|h| {
            let h = h as f64;
            (h, (h / 3.0).sin() * 50.0 + 100.0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_fixed_rows() {
        let table = growth_table();
        assert_eq!(table.len(), 4);
        assert_eq!(table[0].technology, "CRISPR");
        assert_eq!(table.iter().map(|r| r.y2025).sum::<u32>(), 320);
    }

    #[test]
    fn serializes_with_column_names() {
        let v = serde_json::to_value(&growth_table()[2]).unwrap();
        assert_eq!(v[GROWTH_COLUMNS[0]], "백신 플랫폼");
        assert_eq!(v[GROWTH_COLUMNS[1]], 80);
        assert_eq!(v[GROWTH_COLUMNS[2]], 90);
    }

    #[test]
    fn atp_series_covers_a_day() {
        let series = atp_series();
        assert_eq!(series.len(), 24);
        assert_eq!(series[0], (0.0, 100.0));
        assert!(series.iter().all(|(_, y)| (50.0..=150.0).contains(y)));
    }
}
