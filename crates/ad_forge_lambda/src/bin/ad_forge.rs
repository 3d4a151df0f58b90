use std::process::ExitCode;

use ad_forge_core::catalog::PRODUCT_SKUS;
use ad_forge_core::contract::{MarketingContext, Product};
use ad_forge_lambda::adapters::http_client::HttpForgeClient;
use ad_forge_lambda::config::{ForgeConfig, API_BASE_URL_ENV};
use ad_forge_lambda::handlers::create_ad::create_ad_forge_ad;
use ad_forge_lambda::handlers::job_status::lookup_job_status;
use ad_forge_lambda::telemetry;
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "ad_forge",
    about = "Start Ad-Forge jobs and check on them from the terminal"
)]
struct Cli {
    /// Base URL of the Ad-Forge API stage
    #[arg(long, env = API_BASE_URL_ENV, global = true)]
    api_base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an ad generation job for a product
    Create {
        /// Product name, e.g. GalaxyS24Ultra
        #[arg(long)]
        product: String,
        /// Free-form marketing context for the ad
        #[arg(long)]
        context: String,
        /// Voice-over language (defaults to English)
        #[arg(long)]
        language: Option<String>,
    },
    /// Show the status of a previously started job
    Status { job_id: String },
    /// List the products that map to a backend SKU
    Products,
}

fn main() -> ExitCode {
    telemetry::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, String> {
    let api_base_url = cli.api_base_url.as_deref();

    match cli.command {
        Commands::Create {
            product,
            context,
            language,
        } => {
            let client = forge_client(api_base_url)?;
            let envelope = create_ad_forge_ad(
                Product::named(product),
                MarketingContext::new(context, language),
                &client,
            );
            print_json(&envelope)?;
            Ok(if envelope.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Status { job_id } => {
            let client = forge_client(api_base_url)?;
            let record = lookup_job_status(&job_id, &client).map_err(|error| error.to_string())?;
            print_json(&record)?;
            if let Some(created_at) = record.created_at_utc() {
                eprintln!("created {}", created_at.to_rfc3339());
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Products => {
            for (name, sku) in PRODUCT_SKUS {
                println!("{name}\t{sku}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn forge_client(api_base_url: Option<&str>) -> Result<HttpForgeClient, String> {
    let config = ForgeConfig::from_override(api_base_url).map_err(|error| error.to_string())?;
    HttpForgeClient::new(config).map_err(|error| format!("failed to build forge client: {error}"))
}

fn print_json(value: &impl Serialize) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|error| format!("failed to serialize output: {error}"))?;
    println!("{text}");
    Ok(())
}
