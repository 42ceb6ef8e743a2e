use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use dailp_config::Config;
use dailp_core::IngestContext;
use dailp_io::input_hashes;
use dailp_old::{OldClient, clean_up, create_auxiliary_resources, upload};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod pipeline;
mod report;


use self::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::new();
    cli.apply(&mut config);
    init_tracing(config.dev_mode);

    match cli.command() {
        Command::Run => run(&config, cli.json).await,
        Command::Verify => pipeline::verify(&config.inputs),
        Command::Hashes => hashes(&config),
        Command::Clean => {
            let client = connect(&config).await?;
            let mut ctx = IngestContext::new(config.ingest_tag(&timestamp()));
            clean_up(&client, &mut ctx).await?;
            Ok(())
        }
    }
}

fn init_tracing(dev_mode: bool) {
    let default = if dev_mode { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Seconds since the epoch; names the ingest tag of a run
fn timestamp() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
        .to_string()
}

async fn connect(config: &Config) -> Result<OldClient> {
    let client = OldClient::new(&config.old.url)?;
    client.login(&config.old.username, &config.old.password).await?;
    Ok(client)
}

async fn run(config: &Config, json: bool) -> Result<()> {
    pipeline::verify(&config.inputs)?;

    // Credentials are checked before any processing starts
    let client = if config.dry_run {
        None
    } else {
        Some(connect(config).await?)
    };

    let mut ctx = IngestContext::new(config.ingest_tag(&timestamp()));
    tracing::info!(tag = %ctx.ingest_tag, dry_run = config.dry_run, "starting ingest");

    if let Some(client) = &client {
        clean_up(client, &mut ctx).await?;
    }

    let inputs = pipeline::load(&config.inputs)?;
    let processed = pipeline::process(&inputs, &mut ctx)?;

    match &client {
        Some(client) => {
            create_auxiliary_resources(client, &mut ctx).await?;
            for entries in [&processed.verbs, &processed.pronominal_prefixes] {
                upload(client, entries, &mut ctx).await;
            }
        }
        None => tracing::info!(entries = processed.len(), "dry run, nothing uploaded"),
    }

    if config.dev_mode {
        println!("{}\n", report::prefix_occurrences_text(&ctx.prefix_usage));
    }
    println!("{}", report::prefix_usage_text(&ctx.prefix_usage));

    if json {
        println!("{}", report::diagnostics_json(&ctx.diagnostics)?);
    } else if !ctx.diagnostics.is_empty() {
        println!("\n{}", report::diagnostics_text(&ctx.diagnostics));
    }
    Ok(())
}

fn hashes(config: &Config) -> Result<()> {
    let expected = config.inputs.expected();
    for (path, hash) in input_hashes(expected.iter().map(|file| file.path.as_path()))? {
        println!("{hash}  {}", path.display());
    }
    Ok(())
}
