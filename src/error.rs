use thiserror::Error;

/// Errors raised while turning a deck or a table into output.
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid slide template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Could not render slides: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("Could not serialize slide data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not write CSV: {0}")]
    Csv(#[from] csv::Error),
}
