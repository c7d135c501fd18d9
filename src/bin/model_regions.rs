//! model-regions - inspect region-aware chat model resolution
//!
//! Prints how a `provider:model` name resolves under the current environment
//! and builds the client without sending any request.

use std::io::Read;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use model_regions::config::endpoint_for;
use model_regions::models::{apply_base_url, parse_model_name, resolve_base_url, ModelOptions};
use model_regions::providers::OpenAiCompatibleProvider;
use model_regions::runner::{init_logging, AppConfig};
use model_regions::{get_message_text, global_registry, load_chat_model, normalize_region, Message};
use serdes_ai_models::Model;

/// Region-aware chat model resolver
#[derive(Parser, Debug)]
#[command(name = "model-regions")]
#[command(version, about = "Resolve and build DashScope / SiliconFlow chat models")]
#[command(propagate_version = true)]
struct Args {
    /// Enable debug logging
    #[arg(short = 'd', long, global = true)]
    debug: bool,

    /// Enable verbose (trace-level) logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize a region alias (prc, cn, international, en)
    Normalize {
        region: String,
    },
    /// Show the base URL injected for a model name
    Resolve {
        /// Model in provider:model form
        name: String,
    },
    /// Build a chat model client and print its identifier
    Load {
        /// Model in provider:model form
        name: String,
        /// API key, may reference $VARS
        #[arg(long)]
        api_key: Option<String>,
        /// Base URL passed as an option (replaced by a region-derived URL)
        #[arg(long)]
        base_url: Option<String>,
        /// Extra option as key=value; values parse as JSON when possible
        #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
        options: Vec<String>,
    },
    /// List registered providers
    Providers,
    /// Extract the text of a JSON message ("-" reads stdin)
    Text {
        message: String,
    },
}

impl From<&Args> for AppConfig {
    fn from(args: &Args) -> Self {
        AppConfig {
            debug: args.debug,
            verbose: args.verbose,
        }
    }
}

fn parse_option(raw: &str) -> anyhow::Result<(String, serde_json::Value)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("option '{}' is not KEY=VALUE", raw);
    };
    let value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&AppConfig::from(&args));

    match args.command {
        Command::Normalize { region } => match normalize_region(&region) {
            Some(normalized) => println!("{}", normalized),
            None => bail!("unrecognized region '{}'", region),
        },
        Command::Resolve { name } => match resolve_base_url(&name) {
            Some(url) if !url.is_empty() => println!("{}", url),
            _ => println!("(none)"),
        },
        Command::Load {
            name,
            api_key,
            base_url,
            options: raw_options,
        } => {
            let mut options = ModelOptions::new();
            for raw in &raw_options {
                let (key, value) = parse_option(raw)?;
                options.set(key, value);
            }
            if let Some(key) = api_key {
                options = options.with_api_key(key);
            }
            if let Some(url) = base_url {
                options = options.with_base_url(url);
            }

            let (provider, _) = parse_model_name(&name)?;
            let effective = apply_base_url(&name, options.clone(), |key| std::env::var(key).ok());
            let model = load_chat_model(&name, options)
                .with_context(|| format!("failed to load {}", name))?;

            println!("model: {}", model.identifier());
            if let Some(endpoint) = endpoint_for(provider) {
                let url = OpenAiCompatibleProvider::new(endpoint).effective_base_url(&effective)?;
                println!("base_url: {}", url);
            }
        }
        Command::Providers => {
            for provider in global_registry().providers() {
                println!("{}", provider);
            }
        }
        Command::Text { message } => {
            let raw = if message == "-" {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read stdin")?;
                buf
            } else {
                message
            };
            let message: Message =
                serde_json::from_str(&raw).context("message is not valid JSON")?;
            println!("{}", get_message_text(&message));
        }
    }

    Ok(())
}
