use crate::deck::data::growth_table;
use crate::error::DeckError;

use std::io::Write;

/// Writes the growth table as CSV, header row first.
pub fn write_growth_csv(writer: impl Write) -> Result<(), DeckError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in growth_table() {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_growth_csv;

    #[test]
    fn csv_with_header() {
        let mut out = Vec::new();
        write_growth_csv(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "기술,2022,2025 예상");
        assert_eq!(lines[1], "CRISPR,45,75");
        assert_eq!(lines[4], "세포 치료제,55,70");
    }
}
