mod html;
mod markdown;

pub use self::html::HtmlPresenter;
pub use self::markdown::MarkdownPresenter;

use crate::deck::Deck;
use crate::error::DeckError;

use std::io::Write;

/// Output formats a deck can be rendered to.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Standalone HTML page with inline SVG charts
    Html,

    /// Markdown document; charts are reduced to their titles
    Markdown,
}

/// Sink for a finished deck. Presenters only display what they are given.
pub trait Presenter {
    fn present(&mut self, deck: &Deck) -> Result<(), DeckError>;
}

/// Build the presenter for `format` around `writer`.
pub fn presenter_for<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Result<Box<dyn Presenter + 'a>, DeckError> {
    Ok(match format {
        OutputFormat::Html => Box::new(HtmlPresenter::new(writer)?),
        OutputFormat::Markdown => Box::new(MarkdownPresenter::new(writer)),
    })
}
