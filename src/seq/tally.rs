use super::dna::Base;

use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Serialize, Serializer};
use std::fmt;

/// Occurrence count of each of the four bases in a sequence.
///
/// All four bases are always present, absent ones at zero. Symbols that
/// are not an exact uppercase `A`, `T`, `G` or `C` are not counted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BaseTally {
    counts: [usize; 4],
}

impl BaseTally {
    /// Tally the bases in a string.
    ///
    /// This is total over every input: the empty string, lowercase input
    /// or input with no recognised symbols all give an all-zero tally.
    ///
    /// ```
    /// let tally = BaseTally::count("ATCGATTGAGCTCTAGCG");
    /// assert_eq!(tally.get(Base::T), 5);
    /// ```
    pub fn count(seq: &str) -> Self {
        // a multi-byte char never contains an ASCII byte, so scanning bytes
        // gives the same result as scanning chars
        Self::from_bytes(seq.as_bytes())
    }

    /// Tally the bases in a raw byte slice, e.g. a FASTA record.
    pub fn from_bytes(seq: &[u8]) -> Self {
        let mut counts = [0usize; 4];
        seq.iter()
            .filter_map(|&b| Base::from_byte(b))
            .for_each(|b| counts[b.index()] += 1);
        Self { counts }
    }

    pub fn get(&self, base: Base) -> usize {
        self.counts[base.index()]
    }

    /// Number of recognised bases. Never exceeds the input length.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Base, usize)> + '_ {
        Base::ALL.into_iter().map(|b| (b, self.get(b)))
    }

    /// Percentage of G and C among the recognised bases (0 when there are none).
    pub fn gc_percent(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let gc = self.get(Base::G) + self.get(Base::C);
        (gc as f64) / (total as f64) * 100.0
    }

    /// The tally as an ordered `symbol -> count` map, keys in `A, T, G, C` order.
    pub fn to_map(&self) -> IndexMap<&'static str, usize> {
        self.iter().map(|(b, n)| (b.as_str(), n)).collect()
    }
}

impl Serialize for BaseTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}

impl fmt::Display for BaseTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.iter().map(|(b, n)| format!("\"{b}\": {n}")).join(", ")
        )
    }
}
