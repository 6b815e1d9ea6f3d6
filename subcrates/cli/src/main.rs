use std::{
    fs,
    io::{self, BufWriter, Read, Write},
    path::PathBuf,
};

use clap::Parser;
use cli::CliArguments;
use miette::{Context, IntoDiagnostic, Result};
use rand::rngs::OsRng;
use random_files::{content::RandomReader, RandomTreeGenerator};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;



fn initialize_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}


fn progress_writer(quiet: bool) -> Box<dyn Write> {
    if quiet {
        Box::new(io::sink())
    } else {
        Box::new(BufWriter::new(io::stdout().lock()))
    }
}


/// Creates each root and fills it. All roots share one generator,
/// so a fixed seed reproduces the entire invocation.
fn generate_into_roots<S: Read>(
    mut generator: RandomTreeGenerator<S, Box<dyn Write>>,
    roots: &[PathBuf],
) -> Result<()> {
    info!(seed = generator.seed(), "seeded random generator");

    for root in roots {
        fs::create_dir_all(root)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to create root directory {}.", root.display()))?;

        generator
            .generate(root, 0)
            .wrap_err_with(|| format!("Failed to generate random tree in {}.", root.display()))?;
    }

    Ok(())
}


fn main() -> Result<()> {
    let cli_arguments = CliArguments::parse();
    initialize_logging();

    let options = cli_arguments.fanout_options();
    let progress = progress_writer(cli_arguments.quiet);

    if cli_arguments.cryptographic_content {
        let generator = RandomTreeGenerator::new(options, RandomReader::new(OsRng))
            .wrap_err("Invalid options.")?
            .with_progress(progress);

        generate_into_roots(generator, &cli_arguments.paths)
    } else {
        let generator = RandomTreeGenerator::with_seeded_content(options)
            .wrap_err("Invalid options.")?
            .with_progress(progress);

        generate_into_roots(generator, &cli_arguments.paths)
    }
}
