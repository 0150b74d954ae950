//! Resolver operations CLI - entry point
//!
//! One subcommand per workflow: deploy the Resolver contract, quote its
//! best-path lookup, or submit a swap. Every run is a single unit of work
//! that either fully succeeds (exit 0) or fully fails (exit 1).
use alloy::primitives::{Address, U256};
use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use log::{error, info};
use resolver_ops::{commands, Settings};
use std::process;

#[derive(Parser)]
#[command(name = "resolver-ops", version, about = "Deploy and drive the Resolver contract")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Deploy the Resolver contract and print its address
    Deploy {
        /// Submit a block-explorer verification request after deployment
        #[arg(long)]
        verify: bool,
    },
    /// Quote the best swap path for an exact input amount
    Quote {
        #[arg(long)]
        from_token: Address,
        #[arg(long)]
        to_token: Address,
        /// Human-readable input amount, scaled by --decimals
        #[arg(long)]
        amount: String,
        /// Decimal precision of the input token
        #[arg(long, default_value_t = 6)]
        decimals: u8,
    },
    /// Execute a swap along a previously quoted path
    Swap {
        #[arg(long)]
        router: Address,
        /// Input amount in base units
        #[arg(long)]
        amount_in: U256,
        /// Minimum acceptable output amount in base units
        #[arg(long)]
        amount_out_min: U256,
        /// Comma-separated token path, starting at the input token
        #[arg(long, value_delimiter = ',')]
        path: Vec<Address>,
        /// Recipient of the output tokens (defaults to the signer address)
        #[arg(long)]
        to: Option<Address>,
        /// Absolute Unix-timestamp deadline (overrides --valid-for)
        #[arg(long)]
        deadline: Option<u64>,
        /// Seconds from now until the swap expires on-chain
        #[arg(long, default_value_t = 1200)]
        valid_for: u64,
    },
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("resolver-ops v{}", resolver_ops::VERSION);

    if let Err(e) = run().await {
        error!("{e:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_env()?;

    match cli.command {
        Command::Deploy { verify } => commands::deploy::run(&settings, verify).await,
        Command::Quote {
            from_token,
            to_token,
            amount,
            decimals,
        } => commands::quote::run(&settings, from_token, to_token, &amount, decimals).await,
        Command::Swap {
            router,
            amount_in,
            amount_out_min,
            path,
            to,
            deadline,
            valid_for,
        } => {
            commands::swap::run(
                &settings,
                router,
                amount_in,
                amount_out_min,
                path,
                to,
                deadline,
                valid_for,
            )
            .await
        }
    }
}
