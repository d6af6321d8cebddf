//! Triptych - one prompt, three Hugging Face image endpoints.

mod cli;
mod client;
mod config;
mod endpoint;
mod error;
mod output;
mod transport;

use std::path::Path;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, EXAMPLE_PROMPTS};
use crate::client::HuggingFaceGenerator;
use crate::config::Config;
use crate::endpoint::Endpoint;
use crate::error::GenerateError;
use crate::output::{auto_filename, parse_format, save_image};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Route diagnostics to stderr, honoring `RUST_LOG` when set.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

async fn run(cli: Cli) -> Result<(), GenerateError> {
    if cli.examples {
        for prompt in EXAMPLE_PROMPTS {
            println!("{prompt}");
        }
        return Ok(());
    }

    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(GenerateError::Config)?;

    // Resolve prompt. The endpoints accept empty prompts, so the check
    // lives here rather than in the client.
    let prompt = cli.resolve_prompt().map_err(GenerateError::Io)?;
    if prompt.trim().is_empty() {
        return Err(GenerateError::InvalidArgument("Prompt is empty".to_string()));
    }

    let target_format = match cli.format.as_deref() {
        Some(f) => Some(parse_format(f).map_err(GenerateError::InvalidArgument)?),
        None => None,
    };

    let token = config.api_token().ok_or(GenerateError::MissingToken)?;
    let api_base = config.api_base();
    tracing::debug!("Using API base {}", api_base);
    let client = HuggingFaceGenerator::new(token, &api_base)?;

    let out_dir = Path::new(&cli.out_dir);
    std::fs::create_dir_all(out_dir)?;

    // Fan out to all three endpoints
    let triptych = client.generate_all(&prompt).await;

    // Save whatever came back, reporting each absence
    for endpoint in Endpoint::ALL {
        match triptych.get(endpoint) {
            Some(image) => {
                let format = target_format.unwrap_or(image.format);
                let path = out_dir.join(auto_filename(endpoint.label(), &prompt, format));
                save_image(image, target_format, &path)?;
                eprintln!(
                    "Saved: {} ({}x{})",
                    path.display(),
                    image.image.width(),
                    image.image.height()
                );
            }
            None => eprintln!("No image from {}", endpoint.label()),
        }
    }

    if triptych.is_empty() {
        return Err(GenerateError::NoImages);
    }

    Ok(())
}
