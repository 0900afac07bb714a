use clap::{Parser, Subcommand};
use dnstamper_domain::CliOverrides;
use std::process::ExitCode;
use tracing::info;

mod bootstrap;
mod commands;

#[derive(Parser)]
#[command(name = "dnstamper")]
#[command(version)]
#[command(about = "dnstamper - Detect DNS tampering by querying resolvers directly")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the addresses a resolver returns for a hostname
    Resolve {
        /// Resolver address: an IP (port 53) or IP:port
        resolver: String,

        hostname: String,
    },

    /// Compare resolvers against a control resolver
    Check {
        /// Hostnames to look up (comma separated)
        #[arg(long, value_delimiter = ',')]
        hostnames: Option<Vec<String>>,

        /// Resolvers to test (comma separated)
        #[arg(long, value_delimiter = ',')]
        resolvers: Option<Vec<String>>,

        /// Resolver whose answers are trusted
        #[arg(long)]
        control_resolver: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        ..Default::default()
    };
    if let Command::Check {
        hostnames,
        resolvers,
        control_resolver,
    } = &cli.command
    {
        cli_overrides.hostnames = hostnames.clone();
        cli_overrides.resolvers = resolvers.clone();
        cli_overrides.control_resolver = control_resolver.clone();
    }

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting dnstamper v{}", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Command::Resolve { resolver, hostname } => {
            commands::run_resolve(resolver, hostname).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { .. } => {
            if commands::run_check(&config.check).await {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
