//! Registrar CLI - Draft filings and name requests
//!
//! Talks to the legal API using the identifiers kept in the local session.

mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Confirm;
use registrar::{FilingApiFacade, FilingDocument, FilingId, REGISTRATION_STEPS};
use registrar_http::{HttpTransport, HttpTransportConfig};
use serde::Serialize;
use std::fs;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use config::Config;

#[derive(Parser)]
#[command(name = "registrar")]
#[command(about = "Registrar CLI - Draft filings and name requests", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage session identifiers
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Draft application for the session's temp number
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },

    /// Draft voluntary dissolution for the session's business
    Dissolution {
        #[command(subcommand)]
        action: DissolutionAction,
    },

    /// Save or submit a filing
    Filing {
        #[command(subcommand)]
        action: FilingAction,
    },

    /// Name requests
    Nr {
        #[command(subcommand)]
        action: NrAction,
    },

    /// Print the registration wizard steps
    Steps,

    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
enum DraftAction {
    /// Fetch and normalize the draft, recording its filing id in the session
    Fetch {
        /// Print compact JSON instead of pretty-printed
        #[arg(long)]
        raw: bool,
    },
}

#[derive(Subcommand)]
enum DissolutionAction {
    /// Fetch the draft dissolution, recording its filing id in the session
    Fetch,
}

#[derive(Subcommand)]
enum FilingAction {
    /// Update the session's filing from a JSON file
    Update {
        /// Business identifier or temp number
        id: String,
        /// Filing JSON, either the filing itself or `{ "filing": ... }`
        #[arg(short, long)]
        file: String,
        /// Save as draft instead of completing the filing
        #[arg(short, long)]
        draft: bool,
    },
}

#[derive(Subcommand)]
enum NrAction {
    /// Look up a name request
    Get {
        /// Name request number (e.g., "NR 1234567")
        number: String,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Show the session identifiers
    Show,
    /// Set session identifiers
    Set {
        /// Permanent business identifier (e.g., "BC1234567")
        #[arg(long)]
        business_id: Option<String>,
        /// Temporary registration number
        #[arg(long)]
        temp_id: Option<String>,
        /// Filing id
        #[arg(long)]
        filing_id: Option<FilingId>,
    },
    /// Forget all session identifiers
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Session { action } => cmd_session(action),
        Commands::Draft { action: DraftAction::Fetch { raw } } => cmd_draft(raw).await,
        Commands::Dissolution { action: DissolutionAction::Fetch } => cmd_dissolution().await,
        Commands::Filing { action: FilingAction::Update { id, file, draft } } => {
            cmd_update(id, file, draft).await
        }
        Commands::Nr { action: NrAction::Get { number } } => cmd_nr(number).await,
        Commands::Steps => cmd_steps(),
        Commands::Config => cmd_config(),
    }
}

// ============================================
// Helpers
// ============================================

fn facade(config: &Config) -> Result<FilingApiFacade<HttpTransport>> {
    let base_url = config.effective_base_url();
    debug!(base_url = %base_url, "Using legal API");
    let transport = HttpTransport::new(
        HttpTransportConfig::new(base_url).with_timeout_secs(config.timeout_secs),
    )?;
    Ok(FilingApiFacade::new(Arc::new(transport)))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to format output")?;
    println!("{}", json);
    Ok(())
}

fn print_json_compact<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value).context("Failed to format output")?;
    println!("{}", json);
    Ok(())
}

/// Read a filing from disk, accepting a bare filing or a `{ filing }` wrapper.
fn read_filing(path: &str) -> Result<FilingDocument> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?;
    let mut value: serde_json::Value =
        serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path))?;

    if let Some(inner) = value.get_mut("filing") {
        value = inner.take();
    }

    FilingDocument::from_value(value).with_context(|| format!("Invalid filing in {}", path))
}

// ============================================
// Command Implementations
// ============================================

fn cmd_session(action: SessionAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        SessionAction::Show => {
            let session = &config.session;
            let show = |v: Option<String>| v.unwrap_or_else(|| "-".dimmed().to_string());

            println!("{}", "Session:".bold());
            println!("  Business ID: {}", show(session.business_id.clone()));
            println!("  Temp ID:     {}", show(session.temp_id.clone()));
            println!("  Filing ID:   {}", show(session.filing_id.map(|id| id.to_string())));
            println!(
                "  Filing type: {}",
                show(session.filing_type.as_ref().map(|k| k.to_string()))
            );
        }

        SessionAction::Set { business_id, temp_id, filing_id } => {
            if business_id.is_none() && temp_id.is_none() && filing_id.is_none() {
                bail!("Nothing to set. Use --business-id, --temp-id or --filing-id.");
            }
            config.set_session(business_id, temp_id, filing_id);
            config.save()?;
            println!("{} Session updated", "✓".green());
        }

        SessionAction::Clear { yes } => {
            let confirmed = yes
                || Confirm::new()
                    .with_prompt("Forget all session identifiers?")
                    .default(false)
                    .interact()
                    .context("Failed to read confirmation")?;

            if confirmed {
                config.clear_session();
                config.save()?;
                println!("{} Session cleared", "✓".green());
            }
        }
    }

    Ok(())
}

async fn cmd_draft(raw: bool) -> Result<()> {
    let mut config = Config::load()?;
    let api = facade(&config)?;

    match api.fetch_draft_application(&config.session).await? {
        Some(draft) => {
            config.session.apply(&draft.session_update);
            config.save()?;
            eprintln!(
                "{} Draft {} ({})",
                "✓".green(),
                draft.filing.filing_id().map(|id| id.to_string()).unwrap_or_default(),
                draft.filing.kind()
            );
            if raw {
                print_json_compact(&draft.filing)?;
            } else {
                print_json(&draft.filing)?;
            }
        }
        None => {
            eprintln!("{} No draft filing found", "!".yellow());
        }
    }

    Ok(())
}

async fn cmd_dissolution() -> Result<()> {
    let mut config = Config::load()?;
    let api = facade(&config)?;

    let draft = api.fetch_draft_dissolution(&config.session).await?;
    config.session.apply(&draft.session_update);
    config.save()?;

    eprintln!("{} Dissolution draft loaded", "✓".green());
    print_json(&draft.filing)
}

async fn cmd_update(id: String, file: String, draft: bool) -> Result<()> {
    let config = Config::load()?;
    let filing = read_filing(&file)?;
    let api = facade(&config)?;
    let saved = api
        .update_filing(&config.session, &id, Some(&filing), draft)
        .await?;

    let what = if draft { "Draft saved" } else { "Filing submitted" };
    eprintln!("{} {}", "✓".green(), what);
    print_json(&saved)
}

async fn cmd_nr(number: String) -> Result<()> {
    let config = Config::load()?;
    let api = facade(&config)?;

    match api.fetch_name_request(&number).await? {
        Some(record) => print_json(&record)?,
        None => eprintln!("{} Name request {} not found", "!".yellow(), number),
    }

    Ok(())
}

fn cmd_steps() -> Result<()> {
    for step in &REGISTRATION_STEPS {
        println!(
            "  {} {}  {}",
            step.step.to_string().cyan(),
            step.text.replace('\n', ""),
            step.route.as_str().dimmed()
        );
    }
    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;
    println!("{} {:?}", "Config file:".bold(), Config::config_path()?);
    if config.effective_base_url() != config.base_url {
        println!(
            "{} {}",
            "Base URL override:".bold(),
            config.effective_base_url().yellow()
        );
    }
    println!();
    print!("{}", config.to_toml()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_filing_accepts_wrapper_and_bare() {
        let dir = tempfile::tempdir().unwrap();

        let wrapped = dir.path().join("wrapped.json");
        let mut f = fs::File::create(&wrapped).unwrap();
        write!(
            f,
            r#"{{"filing":{{"header":{{"name":"registration","filingId":3}},"registration":{{}}}}}}"#
        )
        .unwrap();

        let bare = dir.path().join("bare.json");
        fs::write(
            &bare,
            r#"{"header":{"name":"registration","filingId":3},"registration":{}}"#,
        )
        .unwrap();

        let a = read_filing(wrapped.to_str().unwrap()).unwrap();
        let b = read_filing(bare.to_str().unwrap()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.filing_id(), FilingId::new(3));
    }

    #[test]
    fn test_read_filing_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not json").unwrap();

        assert!(read_filing(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_cli_parses_draft_fetch() {
        let cli = Cli::try_parse_from(["registrar", "draft", "fetch", "--raw"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Draft { action: DraftAction::Fetch { raw: true } }
        ));

        let cli = Cli::try_parse_from(["registrar", "draft", "fetch"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Draft { action: DraftAction::Fetch { raw: false } }
        ));
    }

    #[test]
    fn test_cli_parses_dissolution_fetch() {
        let cli = Cli::try_parse_from(["registrar", "dissolution", "fetch"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Dissolution { action: DissolutionAction::Fetch }
        ));
    }

    #[test]
    fn test_cli_parses_filing_update() {
        let cli = Cli::try_parse_from([
            "registrar", "filing", "update", "BC1234567", "--file", "f.json", "--draft",
        ])
        .unwrap();

        match cli.command {
            Commands::Filing { action: FilingAction::Update { id, file, draft } } => {
                assert_eq!(id, "BC1234567");
                assert_eq!(file, "f.json");
                assert!(draft);
            }
            _ => panic!("Expected filing update command"),
        }
    }

    #[test]
    fn test_cli_filing_update_requires_id_and_file() {
        assert!(Cli::try_parse_from(["registrar", "filing", "update", "--file", "f.json"]).is_err());
        assert!(Cli::try_parse_from(["registrar", "filing", "update", "BC1234567"]).is_err());
    }

    #[test]
    fn test_cli_parses_nr_get() {
        let cli = Cli::try_parse_from(["registrar", "nr", "get", "NR 1234567"]).unwrap();

        match cli.command {
            Commands::Nr { action: NrAction::Get { number } } => assert_eq!(number, "NR 1234567"),
            _ => panic!("Expected nr get command"),
        }
    }

    #[test]
    fn test_cli_parses_session_steps_and_config() {
        let cli = Cli::try_parse_from(["registrar", "session", "set", "--temp-id", "T1"]).unwrap();
        match cli.command {
            Commands::Session { action: SessionAction::Set { temp_id, business_id, filing_id } } => {
                assert_eq!(temp_id.as_deref(), Some("T1"));
                assert!(business_id.is_none() && filing_id.is_none());
            }
            _ => panic!("Expected session set command"),
        }

        assert!(matches!(
            Cli::try_parse_from(["registrar", "steps"]).unwrap().command,
            Commands::Steps
        ));
        assert!(matches!(
            Cli::try_parse_from(["registrar", "config"]).unwrap().command,
            Commands::Config
        ));
    }

    #[test]
    fn test_cli_rejects_zero_filing_id() {
        let result = Cli::try_parse_from(["registrar", "session", "set", "--filing-id", "0"]);
        assert!(result.is_err());
    }
}
