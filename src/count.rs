use crate::seq::{Base, BaseTally};

use std::fmt;
use std::io::Write;

use anyhow::{Context, Result};
use bio::io::fasta;
use rayon::prelude::*;
use serde::Serialize;

/// The tally of one named sequence.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TallyRow {
    pub id: String,
    pub counts: BaseTally,
    pub gc_percent: f64,
}

impl TallyRow {
    pub fn new(id: impl Into<String>, counts: BaseTally) -> Self {
        Self {
            id: id.into(),
            gc_percent: counts.gc_percent(),
            counts,
        }
    }

    pub fn display_header() -> &'static str {
        "id\tA\tT\tG\tC\tGC%"
    }
}

impl fmt::Display for TallyRow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{:.2}",
            self.id,
            self.counts.get(Base::A),
            self.counts.get(Base::T),
            self.counts.get(Base::G),
            self.counts.get(Base::C),
            self.gc_percent
        )
    }
}

/// Tally every record of a FASTA file, preserving file order.
///
/// # Errors
///
/// Fails if the file cannot be opened or a record is malformed.
pub fn tally_fasta(path: &str) -> Result<Vec<TallyRow>> {
    let reader = fasta::Reader::from_file(path)
        .with_context(|| format!("Unable to open FASTA file {path}"))?;

    let records = reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("Invalid FASTA record in {path}"))?;
    info!("Read {} records from {path}", records.len());

    // each record is independent; collect keeps the input order
    Ok(records
        .par_iter()
        .map(|r| TallyRow::new(r.id(), BaseTally::from_bytes(r.seq())))
        .collect())
}

/// Write tally rows as TSV (with header) or as one JSON object per line.
pub fn write_rows(writer: &mut impl Write, rows: &[TallyRow], json: bool) -> Result<()> {
    if json {
        for row in rows {
            serde_json::to_writer(&mut *writer, row)?;
            writeln!(writer)?;
        }
    } else {
        writeln!(writer, "{}", TallyRow::display_header())?;
        for row in rows {
            writeln!(writer, "{row}")?;
        }
    }
    writer.flush()?;
    Ok(())
}
