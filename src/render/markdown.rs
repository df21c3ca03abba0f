use super::Presenter;
use crate::deck::{Block, Deck, MediaKind, Tone};
use crate::error::DeckError;

use itertools::Itertools;
use std::io::Write;

/// Writes a deck as a Markdown document.
pub struct MarkdownPresenter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_block(&mut self, block: &Block) -> std::io::Result<()> {
        let w = &mut self.writer;
        match block {
            Block::Header { text } => writeln!(w, "## {text}\n"),
            Block::Subheader { text } => writeln!(w, "### {text}\n"),
            Block::Prose { text } => writeln!(w, "{text}\n"),
            Block::Divider => writeln!(w, "---\n"),
            Block::Media { media, url, caption } => {
                let label = match media {
                    MediaKind::Image => "image",
                    MediaKind::Audio => "audio",
                    MediaKind::Video => "video",
                };
                match caption {
                    Some(c) => writeln!(w, "[{label}: {c}]({url})\n"),
                    None => writeln!(w, "[{label}]({url})\n"),
                }
            }
            Block::Formula { latex } => writeln!(w, "$$\n{latex}\n$$\n"),
            Block::Table { columns, rows } => {
                writeln!(w, "| {} |", columns.iter().join(" | "))?;
                writeln!(w, "|{}|", columns.iter().map(|_| "---").join("|"))?;
                for row in rows {
                    writeln!(w, "| {} |", row.iter().join(" | "))?;
                }
                writeln!(w)
            }
            Block::Chart { title, .. } => writeln!(w, "*[chart: {title}]*\n"),
            Block::Code { language, source } => {
                writeln!(w, "```{language}\n{}\n```\n", source.trim_end())
            }
            Block::Echo { language, source, label, output } => {
                writeln!(w, "```{language}\n{}\n```\n", source.trim_end())?;
                writeln!(w, "{label} `{output}`\n")
            }
            Block::Callout { tone, text } => {
                let tag = match tone {
                    Tone::Info => "INFO",
                    Tone::Success => "SUCCESS",
                    Tone::Warning => "WARNING",
                    Tone::Error => "ERROR",
                };
                writeln!(w, "> **{tag}:** {text}\n")
            }
        }
    }
}

impl<W: Write> Presenter for MarkdownPresenter<W> {
    fn present(&mut self, deck: &Deck) -> Result<(), DeckError> {
        writeln!(self.writer, "# {}\n", deck.title)?;
        if let Some(caption) = &deck.caption {
            writeln!(self.writer, "*{caption}*\n")?;
        }
        for block in &deck.blocks {
            self.write_block(block)?;
        }
        if let Some(closing) = &deck.closing {
            writeln!(self.writer, "{closing}")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
