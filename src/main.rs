extern crate env_logger;
#[macro_use]
extern crate log;
use std::{
    fs::File,
    io::{prelude::*, stdout, BufWriter},
    path::Path,
};

use anyhow::{Context, Result};
use clap::Parser;

mod chart;
mod cli;
mod count;
mod deck;
mod error;
mod render;
mod seq;
mod table;

use cli::{Cli, Commands};
use count::TallyRow;
use render::Presenter;
use seq::{BaseTally, SAMPLE_SEQUENCE};

/// Creates a `BufWriter` for the given output option. This allows for an output file to be passed
/// or otherwise will default to using standard output.
fn get_writer(output: &Option<String>) -> Result<impl Write> {
    // get output as a BufWriter - equal to stdout if None
    let writer = BufWriter::new(match output {
        Some(ref x) => {
            let file = File::create(Path::new(x))
                .with_context(|| format!("Unable to create output file {x}"))?;
            Box::new(file) as Box<dyn Write + Send>
        }
        None => Box::new(stdout()) as Box<dyn Write + Send>,
    });
    Ok(writer)
}

fn try_main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse();

    info!("biodeck v{}", cli::VERSION);

    match &cli.command {
        Commands::Render {
            variant,
            output,
            format,
            sample,
        } => {
            info!("Rendering {variant:?} slides as {format:?}");
            let deck = deck::build_deck(*variant, sample);
            debug!(
                "Deck has {} blocks, {} charts",
                deck.blocks.len(),
                deck.charts().count()
            );

            let writer = get_writer(&Some(output.clone()))?;
            let mut presenter = render::presenter_for(*format, writer)?;
            presenter
                .present(&deck)
                .with_context(|| format!("Could not write slides to {output}"))?;

            info!("Completed rendering to {output}");
        }
        Commands::Count {
            sequence,
            fasta,
            output,
            json,
        } => {
            let rows = match fasta {
                Some(path) => count::tally_fasta(path)?,
                None => {
                    let seq = sequence.as_deref().unwrap_or(SAMPLE_SEQUENCE);
                    if sequence.is_none() {
                        info!("No sequence given, counting the sample {seq}");
                    }
                    vec![TallyRow::new("sequence", BaseTally::count(seq))]
                }
            };

            let mut writer = get_writer(output)?;
            count::write_rows(&mut writer, &rows, *json)?;
        }
        Commands::Table { output } => {
            let writer = get_writer(output)?;
            table::write_growth_csv(writer).context("Could not write growth table")?;
        }
    };
    Ok(())
}

fn main() {
    if let Err(err) = try_main() {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));

        std::process::exit(1);
    }
}
