use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::{Parser, Subcommand};

use crate::deck::DeckVariant;
use crate::render::OutputFormat;
use crate::seq::SAMPLE_SEQUENCE;

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
🧬 biodeck version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   a biotechnology slideshow and DNA base tally";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightGreen.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    arg_required_else_help = true,
    flatten_help = true,
    styles = STYLES
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the slideshow to a file
    Render {
        /// which wording of the slides to use
        #[arg(value_enum, default_value = "classic")]
        variant: DeckVariant,

        /// the output file
        #[arg(short, default_value = "slides.html")]
        output: String,

        #[arg(long, value_enum, default_value = "html")]
        format: OutputFormat,

        /// the sequence counted on the code output slide
        #[arg(long, default_value = SAMPLE_SEQUENCE)]
        sample: String,
    },

    /// Count the A, T, G and C bases of a sequence or of every record in a FASTA file.
    /// Other symbols, including lowercase bases, are not counted.
    #[command(verbatim_doc_comment)]
    Count {
        /// the sequence to count (defaults to the slide sample)
        #[arg(conflicts_with = "fasta")]
        sequence: Option<String>,

        /// a FASTA file; each record is counted separately
        #[arg(long)]
        fasta: Option<String>,

        /// the output file (defaults to standard output)
        #[arg(short)]
        output: Option<String>,

        /// write one JSON object per line instead of TSV
        #[arg(long, action)]
        json: bool,
    },

    /// Write the technology growth table as CSV
    Table {
        /// the output file (defaults to standard output)
        #[arg(short)]
        output: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use crate::deck::DeckVariant;
    use crate::render::OutputFormat;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_defaults() {
        let cli = Cli::parse_from(["biodeck", "render"]);
        match cli.command {
            Commands::Render { variant, output, format, sample } => {
                assert_eq!(variant, DeckVariant::Classic);
                assert_eq!(output, "slides.html");
                assert_eq!(format, OutputFormat::Html);
                assert_eq!(sample, "ATCGATTGAGCTCTAGCG");
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn sequence_and_fasta_conflict() {
        let res = Cli::try_parse_from(["biodeck", "count", "ATGC", "--fasta", "x.fa"]);
        assert!(res.is_err());
    }
}
