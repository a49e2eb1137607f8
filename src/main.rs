//! Salon simulator command line.
//!
//! - `generate` runs one simulation and writes the CSV workbook, plus an
//!   optional JSON report.
//! - `serve` exposes `POST /simulate` over HTTP.

use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use salon_sim::api::{AppState, create_router};
use salon_sim::config::ConfigLoader;
use salon_sim::models::Policy;
use salon_sim::report::{build_workbook, write_report_json, write_workbook_csv};
use salon_sim::simulation::{SimulationParams, run_simulation};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Synthetic salon month generator with staff pay and profitability models
#[derive(Parser, Debug)]
#[command(name = "salon-sim", version, about)]
struct Args {
    /// Directory holding catalog.yaml, settings.yaml and simulation.yaml
    #[arg(short, long, global = true, default_value = "config/salon")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a month of transactions and write the report
    Generate {
        /// Pay policy to evaluate
        #[arg(short, long, value_enum, default_value_t = PolicyArg::FlatSplit)]
        policy: PolicyArg,

        /// Seed override
        #[arg(short, long)]
        seed: Option<u64>,

        /// First simulated day override (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Last simulated day override (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<NaiveDate>,

        /// Directory for the CSV sheets
        #[arg(short, long, default_value = "salon_month_simulation")]
        out: PathBuf,

        /// Also write the full report as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyArg {
    /// Percentage split with a nail tech wage floor
    #[value(alias = "v1")]
    FlatSplit,
    /// Base salary, incentive staircase and commission
    #[value(alias = "v2")]
    TieredIncentive,
}

impl From<PolicyArg> for Policy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::FlatSplit => Policy::FlatSplit,
            PolicyArg::TieredIncentive => Policy::TieredIncentive,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = ConfigLoader::load(&args.config)?;
    info!(config_dir = %args.config.display(), "config_loaded");

    match args.command {
        Command::Generate {
            policy,
            seed,
            start_date,
            end_date,
            out,
            json,
        } => {
            let mut params = SimulationParams::from_config(config.simulation(), policy.into());
            if let Some(seed) = seed {
                params.seed = seed;
            }
            if let Some(start) = start_date {
                params.dates.start = start;
            }
            if let Some(end) = end_date {
                params.dates.end = end;
            }

            let report = run_simulation(config.catalog(), config.settings(), params)?;
            let paths = write_workbook_csv(&build_workbook(&report), &out)?;
            if let Some(path) = json {
                write_report_json(&report, path)?;
            }

            for path in &paths {
                println!("{}", path.display());
            }
            println!(
                "{}: {} transactions, total sales {}, owner net income {}",
                report.params.policy.name(),
                report.transactions.len(),
                report.breakdown.total_sales.normalize(),
                report.breakdown.owner_net_income.normalize()
            );
        }
        Command::Serve { addr } => {
            let router = create_router(AppState::new(config));
            let listener = tokio::net::TcpListener::bind(addr).await?;
            info!(addr = %addr, "listening");

            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    tokio::signal::ctrl_c().await.ok();
                    info!("shutdown_signal_received");
                })
                .await?;
        }
    }

    Ok(())
}
