use super::Presenter;
use crate::deck::Deck;
use crate::error::DeckError;

use handlebars::Handlebars;
use serde_json::json;
use std::io::Write;

// encode the template HTML file at compile time as a string literal
const TEMPLATE_HTML: &str = include_str!("slides_template.html");
const TEMPLATE_NAME: &str = "slides";

/// Renders a deck into a single HTML page.
pub struct HtmlPresenter<W: Write> {
    writer: W,
    registry: Handlebars<'static>,
}

impl<W: Write> HtmlPresenter<W> {
    pub fn new(writer: W) -> Result<Self, DeckError> {
        let mut registry = Handlebars::new();
        registry.register_template_string(TEMPLATE_NAME, TEMPLATE_HTML)?;
        Ok(Self { writer, registry })
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Presenter for HtmlPresenter<W> {
    fn present(&mut self, deck: &Deck) -> Result<(), DeckError> {
        let mut data = serde_json::to_value(deck)?;
        data["version"] = json!(crate::cli::VERSION);
        data["generated"] = json!(chrono::Local::now()
            .format("%Y-%m-%d %H:%M:%S")
            .to_string());

        debug!("Rendering {} blocks to HTML", deck.blocks.len());
        self.registry
            .render_to_write(TEMPLATE_NAME, &data, &mut self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
