use clap::Parser;
use loopy_dns_domain::config::LogFormat;
use loopy_dns_domain::CliOverrides;
use std::ffi::OsString;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "loopy-dns")]
#[command(version)]
#[command(about = "Loopy DNS - answers every A/AAAA query with the loopback address")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// The address to listen for DNS queries on (default :53)
    #[arg(short = 'l', long, value_name = "ADDR")]
    listen: Option<String>,

    /// Optionally restrict DNS queries to this zone (must end with a period)
    #[arg(short = 'z', long, value_name = "FQDN")]
    zone: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log output format (text, json)
    #[arg(long, value_parser = parse_log_format)]
    log_format: Option<LogFormat>,
}

fn parse_log_format(s: &str) -> Result<LogFormat, String> {
    s.parse::<LogFormat>().map_err(|e| e.to_string())
}

/// Long flags that are also accepted with a single dash (`-listen :53`).
const SINGLE_DASH_LONG_FLAGS: [&str; 2] = ["listen", "zone"];

fn expand_single_dash_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            let expanded = arg
                .to_str()
                .and_then(|text| text.strip_prefix('-'))
                .filter(|flag| {
                    SINGLE_DASH_LONG_FLAGS.iter().any(|name| {
                        flag.strip_prefix(name)
                            .is_some_and(|rest| rest.is_empty() || rest.starts_with('='))
                    })
                })
                .map(|flag| OsString::from(format!("--{}", flag)));
            expanded.unwrap_or(arg)
        })
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_from(expand_single_dash_flags(std::env::args_os()));

    // Load configuration
    let cli_overrides = CliOverrides {
        listen_address: cli.listen,
        zone: cli.zone,
        log_level: cli.log_level,
        log_format: cli.log_format,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    // Initialize logging
    bootstrap::init_logging(&config.logging);

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(e.into());
    }

    info!("Starting Loopy DNS v{}", env!("CARGO_PKG_VERSION"));

    let shutdown = CancellationToken::new();
    tokio::spawn(bootstrap::shutdown_on_signal(shutdown.clone()));

    if let Err(e) = server::start_dns_server(&config, shutdown).await {
        error!(error = %e, "Failed to listen and serve");
        return Err(e);
    }

    info!("Server shutdown complete");
    Ok(())
}
