mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mambu_api::{ExecutorConfig, HttpMethod, RequestExecutor};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "mambu")]
#[command(about = "Send authenticated requests to the Mambu REST API")]
struct Cli {
    /// Output format: raw or pretty
    #[arg(long, default_value = "raw", value_parser = ["raw", "pretty"], global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a GET request, parameters go in the query string
    Get(commands::request::RequestArgs),
    /// Send a POST request, parameters go in a form body
    Post(commands::request::RequestArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mambu_api=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "pretty" => OutputFormat::Pretty,
        _ => OutputFormat::Raw,
    };

    let executor = RequestExecutor::new(ExecutorConfig::from_env());

    match &cli.command {
        Commands::Get(args) => commands::request::run(args, HttpMethod::Get, &executor, &format).await?,
        Commands::Post(args) => commands::request::run(args, HttpMethod::Post, &executor, &format).await?,
    }

    Ok(())
}
