use clap::Parser;
use dohq_domain::CliOverrides;
use tracing::{error, info};

mod bootstrap;
mod di;
mod dispatch;

use dispatch::Outcome;

#[derive(Parser)]
#[command(name = "dohq")]
#[command(version)]
#[command(about = "dohq - DNS lookups over a JSON DNS-over-HTTPS resolver")]
struct Cli {
    /// Domain to resolve
    #[arg(long, default_value = "")]
    name: String,

    /// `query` prints the raw JSON response, `resolve` the first answer
    #[arg(long, default_value = "")]
    action: String,

    /// Record type, by name (AAAA) or number (28)
    #[arg(long, default_value = "AAAA")]
    qtype: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DoH JSON endpoint URL
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        endpoint: cli.endpoint.clone(),
        timeout_ms: cli.timeout_ms,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let use_cases = di::UseCases::new(&config.resolver)?;

    match dispatch::run(&use_cases, &cli.action, &cli.name, &cli.qtype).await {
        Ok(Outcome::Answer(result)) => info!("{}", result),
        Ok(Outcome::InvalidOption) => info!("invalid option"),
        Err(e) => {
            error!("error resolving dns query: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
