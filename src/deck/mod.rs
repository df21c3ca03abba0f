//! The slideshow as plain display values.
//!
//! A `Deck` is built once from a variant and a sample sequence, then handed
//! to a presenter. Nothing in here reads or writes files.

mod build;
pub mod data;
pub mod variant;

pub use self::build::build_deck;
pub use self::variant::DeckVariant;

use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Deck {
    pub title: String,
    pub caption: Option<String>,
    pub blocks: Vec<Block>,
    pub closing: Option<String>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Audio,
    Video,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

/// One piece of the page, tagged by `kind` when serialized.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Header {
        text: String,
    },
    Subheader {
        text: String,
    },
    Prose {
        text: String,
    },
    Divider,
    /// Media is linked, never embedded.
    Media {
        media: MediaKind,
        url: String,
        caption: Option<String>,
    },
    Formula {
        latex: String,
    },
    Table {
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Chart {
        title: String,
        svg: String,
    },
    Code {
        language: String,
        source: String,
    },
    /// Source shown together with the output it produced.
    Echo {
        language: String,
        source: String,
        label: String,
        output: String,
    },
    Callout {
        tone: Tone,
        text: String,
    },
}

impl Deck {
    pub fn charts(&self) -> impl Iterator<Item = &Block> {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Chart { .. }))
    }

    pub fn callouts(&self) -> impl Iterator<Item = (Tone, &str)> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Callout { tone, text } => Some((*tone, text.as_str())),
            _ => None,
        })
    }
}
