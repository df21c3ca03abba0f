pub mod dna;
pub mod tally;

pub use self::dna::Base;
pub use self::tally::BaseTally;

/// The short example sequence counted on the slides.
pub const SAMPLE_SEQUENCE: &str = "ATCGATTGAGCTCTAGCG";
