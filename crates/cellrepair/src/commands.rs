//! cellrepair command implementations

use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use tracing::debug;

use cellrepair_client::{
    ClientOptions, CollaborationClient, CredentialPolicy, ReportStyle, API_KEY_ENV, API_KEY_URL,
};
use cellrepair_config::{self, Config};
use cellrepair_toolkit::{register_collaborate_tool, ToolRegistry};

/// Options for `ask`
pub struct AskArgs {
    pub query: String,
    pub context: Option<String>,
    pub timeout: Option<f64>,
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub strict: bool,
    pub detailed: bool,
}

/// Initialize config
pub async fn init_command() -> Result<()> {
    println!("◆ Initializing CellRepair.AI client...");

    let config = cellrepair_config::init().await?;

    println!("✓ Config: {}", cellrepair_config::config_path().display());
    println!("  Endpoint: {}", config.api_url());
    if !config.has_api_key() {
        println!();
        println!("Set your API key with:");
        println!("  export {}='your_key'", API_KEY_ENV);
        println!("Get a free key at: {} (1000 calls/month free)", API_KEY_URL);
    }

    Ok(())
}

/// Parse `--context` into a JSON object
fn parse_context(raw: Option<&str>) -> Result<Option<Map<String, Value>>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let value: Value = serde_json::from_str(raw).context("--context is not valid JSON")?;
    match value {
        Value::Object(map) => Ok(Some(map)),
        Value::Null => Ok(None),
        _ => bail!("--context must be a JSON object"),
    }
}

fn parse_timeout(secs: Option<f64>) -> Result<Option<Duration>> {
    match secs {
        None => Ok(None),
        Some(s) if s.is_finite() && s > 0.0 => match Duration::try_from_secs_f64(s) {
            Ok(d) => Ok(Some(d)),
            Err(_) => bail!("--timeout must be a positive number of seconds, got {}", s),
        },
        Some(s) => bail!("--timeout must be a positive number of seconds, got {}", s),
    }
}

/// Send a query; returns the rendered result or `"Error: ..."` line
pub async fn ask_command(args: AskArgs) -> Result<String> {
    let config = Config::load().await?;
    let context = parse_context(args.context.as_deref())?;
    let timeout = parse_timeout(args.timeout)?;

    let mut options = ClientOptions::from(&config.collaborate);
    options.api_key = args.api_key;
    if let Some(endpoint) = args.endpoint {
        options.endpoint = endpoint;
    }
    if args.strict {
        options.policy = CredentialPolicy::Strict;
    }
    if args.detailed {
        options.style = ReportStyle::Detailed;
    }

    let client = CollaborationClient::new(options)?;
    let timeout = timeout.unwrap_or_else(|| client.timeout());
    debug!(
        "Asking {} as {} ({:?} report, timeout {:?})",
        client.endpoint(),
        client.system(),
        client.style(),
        timeout
    );

    Ok(client.invoke_with_timeout(&args.query, context, timeout).await)
}

/// Show configuration status
pub async fn status_command() -> Result<()> {
    let config_path = cellrepair_config::config_path();

    println!("◆ CellRepair.AI Client Status");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!(
        "Config:   {} {}",
        config_path.display(),
        if config_path.exists() {
            "[OK]"
        } else {
            "[Missing]"
        }
    );

    let config = Config::load().await?;
    let env_key = std::env::var(API_KEY_ENV)
        .map(|v| !v.is_empty())
        .unwrap_or(false);

    println!("Endpoint: {}", config.api_url());
    println!("System:   {}", config.collaborate.system);
    println!("Timeout:  {}s", config.collaborate.timeout_secs);
    println!(
        "API Key:  {}",
        if env_key {
            format!("[Set via {}]", API_KEY_ENV)
        } else if config.has_api_key() {
            "[Set in config]".to_string()
        } else {
            "[Missing]".to_string()
        }
    );
    println!(
        "Policy:   {}",
        match config.collaborate.credential_policy {
            CredentialPolicy::Strict => "strict",
            CredentialPolicy::Lenient => "lenient",
        }
    );

    println!("\n◆ Ready");

    Ok(())
}

/// Print tool definitions as JSON
pub async fn schema_command() -> Result<()> {
    let config = Config::load().await?;

    let mut options = ClientOptions::from(&config.collaborate);
    options.policy = CredentialPolicy::Lenient;
    let client = CollaborationClient::new(options)?;

    let mut registry = ToolRegistry::new();
    register_collaborate_tool(&mut registry, client);

    let json = serde_json::to_string_pretty(&registry.definitions())?;
    println!("{}", json);

    Ok(())
}
