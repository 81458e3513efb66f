mod ai;
mod config;
mod constants;
mod credentials;
mod draft;
mod error;

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Read;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::credentials::CredentialStore;
use crate::draft::{DraftRequest, Drafter};

fn setup_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,penna=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_usage() {
    eprintln!(
        r#"penna - AI-assisted email drafting with offline fallback

Usage: penna [command]

Commands:
    draft [file]    Draft an email from a JSON request (stdin when no file)
    languages       List languages with built-in fallback templates
    key <api-key>   Store the generation service API key
    setup           Write a starter configuration file
    help            Show this help message

Configuration file: ~/.config/penna/config.toml
API key: PENNA_API_KEY environment variable, keyring, or config file
"#
    );
}

async fn run_draft(path: Option<&str>) -> Result<()> {
    let raw = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file: {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read request from stdin")?;
            buf
        }
    };

    let request: DraftRequest =
        serde_json::from_str(&raw).context("Failed to parse draft request JSON")?;

    let config = Config::load()?;
    let drafter = Drafter::new(&config);

    match drafter.draft(request).await {
        Ok(draft) => {
            println!("{}", serde_json::to_string_pretty(&draft)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("Request rejected: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_languages() {
    for spec in draft::tables::LANGUAGES {
        println!("{}  {}", spec.code, spec.name);
    }
}

fn run_key(key: &str) -> Result<()> {
    if !CredentialStore::is_usable(key) {
        anyhow::bail!("That value looks like a placeholder, not an API key");
    }

    CredentialStore::new().store(key)?;
    println!("API key stored.");
    Ok(())
}

fn run_setup() -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() {
        println!("Configuration already exists at {}", path.display());
        return Ok(());
    }

    Config::default().save()?;
    println!("Configuration written to {}", path.display());
    println!("\nSet your OpenRouter API key with one of:");
    println!("  export PENNA_API_KEY='sk-or-...'");
    println!("  penna key <api-key>");
    println!("\nWithout a key, drafts come from the offline templates.");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("help") | Some("--help") | Some("-h") => {
            print_usage();
            Ok(())
        }
        Some("draft") => {
            setup_logging();
            run_draft(args.get(2).map(|s| s.as_str())).await
        }
        Some("languages") => {
            run_languages();
            Ok(())
        }
        Some("key") => match args.get(2) {
            Some(key) => run_key(key),
            None => {
                eprintln!("Usage: penna key <api-key>");
                std::process::exit(1);
            }
        },
        Some("setup") => run_setup(),
        Some(cmd) => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            std::process::exit(1);
        }
        None => {
            print_usage();
            Ok(())
        }
    }
}
