use clap::Parser;
use tournament_pgn::{cli, config, export, extractor, PgnError};
use cli::Cli;
use config::Config;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    run(&cli).map_err(|err| {
        let context = failure_context(&err, &cli);
        anyhow::Error::new(err).context(context)
    })
}

fn run(cli: &Cli) -> tournament_pgn::Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let options = config.pgn_options(cli.rating_tags, cli.body);
    let mode = cli.name_case();

    println!("[1/2] Reading {}...", cli.file.display());
    let record = extractor::read_tournament(&cli.file, &config.layout, mode)?;
    println!(
        "✔ {}: {} ({} games)",
        record.tournament_name,
        record.player_name,
        record.games.len()
    );

    if cli.dump {
        println!("{}", export::record_to_json(&record)?);
    }

    println!(
        "[2/2] Writing PGN (rating tags: {}, body: {})...",
        options.rating_tags, options.body
    );
    let written = export::generate_pgn(&record, &cli.output, &options)?;
    let skipped = record.games.len() - written;
    if skipped > 0 {
        tracing::info!("{} games without a recognized result code were skipped", skipped);
    }

    println!("✔ PGN file generated: {} ({} games)", cli.output.display(), written);
    Ok(())
}

/// Top-level message naming which stage failed.
fn failure_context(err: &PgnError, cli: &Cli) -> String {
    if err.is_extraction() {
        format!("Error processing file {}", cli.file.display())
    } else if matches!(err, PgnError::Config(_)) {
        "Error loading configuration".to_string()
    } else {
        format!("Error writing PGN file {}", cli.output.display())
    }
}
