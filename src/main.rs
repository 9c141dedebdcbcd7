mod cli;

use plexname::{
    config, fs,
    metadata::Searcher,
    prompt::{FirstMatchPrompter, Prompter, StdinPrompter},
    renamer::{Renamer, RenamerParams},
};
use plexname_parser::{output::plex_path, LookupResult, Parser as ReleaseParser, ParserConfig};

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "plexname=debug,plexname_parser=debug".to_string()
        } else {
            "plexname=info,plexname_parser=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let params = RenamerParams::new(&cli.source_path, cli.target_path.as_deref())
        .overrides(cli.overrides())
        .extensions(&cli.extensions)
        .dry_run(cli.dry_run)
        .mode(cli.mode());

    if cli.parse_only {
        return parse_only(&params, cli.json);
    }

    let config = config::load_config_or_default(cli.config.as_deref())?;
    config::validate_for_lookup(&config)?;

    let prompter: Arc<dyn Prompter> = if cli.yes {
        Arc::new(FirstMatchPrompter)
    } else {
        Arc::new(StdinPrompter::new())
    };
    let searcher = Searcher::from_config(&config, prompter)?;
    let renamer = Renamer::new(params, searcher, fs::for_run(cli.dry_run));

    // Create tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    let summary = rt.block_on(renamer.run())?;

    tracing::info!(
        "Done: {} renamed, {} skipped",
        summary.moved.len(),
        summary.skipped.len()
    );
    Ok(())
}

/// Show how SOURCE would be understood, without any lookup.
///
/// The parsed title stands in for the canonical one.
fn parse_only(params: &RenamerParams, json: bool) -> Result<()> {
    let parser = ReleaseParser::new(
        ParserConfig::builder()
            .mode(params.mode)
            .target_path(params.target.to_string_lossy())
            .overrides(params.overrides.clone())
            .build(),
    );
    let result = parser.parse(&params.source.to_string_lossy());
    tracing::debug!(?result, "parse result");

    let extension = params
        .source
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let lookup = LookupResult::new(result.title.clone(), 0);
    let path = plex_path(&result, &lookup, extension, &params.target);

    if json {
        let output = serde_json::json!({
            "result": result,
            "plex_path": path.as_ref().ok(),
            "error": path.as_ref().err().map(|e| e.to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Title: {}", result.title);
    println!("Media type: {}", result.media_type);
    if result.year > 0 {
        println!("Year: {}", result.year);
    }
    if result.is_tv() {
        println!("Season: {}", result.season);
        println!("Episode: {}", result.episode1);
        if result.episode2 > 0 {
            println!("Episode 2: {}", result.episode2);
        }
        println!("Special: {}", result.special);
    }
    println!("Resolution: {}", result.resolution);
    println!("Source: {}", result.source);
    println!("Language: {}", result.language);
    println!("Remux: {}", result.remux);
    println!("Proper: {}", result.proper);
    println!("Dual language: {}", result.dual_language);
    println!("Version info: {}", result.version_info());

    match path {
        Ok(path) => println!("Plex path: {}", path.file_path().display()),
        Err(e) => println!("Plex path: unavailable ({e})"),
    }

    Ok(())
}
