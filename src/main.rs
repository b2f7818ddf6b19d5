//! semsearch: query a semantic search provider from the command line
//!
//! This is the main entry point for the application.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use semsearch::{
    build_request, config,
    engines::ProviderLoader,
    network::HttpClient,
    results::{render, render_json, OutputFormat, RenderStyle},
    Search,
};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(cli::exit_code(&e))
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    info!("Starting semsearch v{}", semsearch::VERSION);

    // Load configuration
    let settings = config::load(cli.config.as_deref())?;
    let options = settings.search.clone().merge(cli.search_options());
    debug!("Effective search options: {:?}", options);

    let query = match cli.query_text() {
        Some(query) => query,
        None => read_query()?,
    };

    // Validate before touching the network or the credentials
    let request = build_request(&query, &options).map_err(semsearch::Error::from)?;

    let client = HttpClient::with_settings(&settings.outgoing)?;
    let provider = ProviderLoader::load(&settings, client)?;
    let response = Search::new(provider).send(&request).await?;

    let format = cli.format.unwrap_or(settings.output.format);
    let style = if cli.detailed || settings.output.detailed {
        RenderStyle::Detailed
    } else {
        RenderStyle::Compact
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => {
            for line in render(&response, style) {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", render_json(&response)?)?;
        }
    }
    out.flush()?;

    Ok(())
}

/// Read one line of query text from standard input
fn read_query() -> Result<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read query from stdin")?;
    Ok(line)
}

/// Initialize logging on stderr so stdout carries only results
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
