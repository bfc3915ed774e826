use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gridscen::{ClientType, Config, EconomicModel, PlantType, Scenario};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    #[arg(long)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Plants,

    Clients,

    Summary,

    Loss {
        #[arg(long)]
        distance: f64,
    },
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let cfg = Config::from_file(&args.config).context("failed to construct cfg")?;
    log::info!("{cfg:#?}");

    let eco = EconomicModel::standard();

    match args.command {
        Command::Plants => {
            let scenario = Scenario::generate(&cfg).context("failed to generate scenario")?;
            for plant in scenario.plants() {
                println!("{plant}");
            }
        }
        Command::Clients => {
            let scenario = Scenario::generate(&cfg).context("failed to generate scenario")?;
            for client in scenario.clients() {
                println!("{client}");
            }
        }
        Command::Summary => {
            let scenario = Scenario::generate(&cfg).context("failed to generate scenario")?;
            log_summary(&scenario, &eco);
        }
        Command::Loss { distance } => {
            let loss = eco
                .transmission_loss(distance)
                .with_context(|| format!("failed to look up loss at distance {distance}"))?;
            println!("{loss}");
        }
    }

    Ok(())
}

fn log_summary(scenario: &Scenario, eco: &EconomicModel) {
    let summary = scenario.summary();

    for plant_type in PlantType::ALL {
        let report = summary.plants(plant_type);
        log::info!(
            "plants {plant_type:?}: n = {} production = {:.2} ± {:.2} MW (cost/MW {}, daily {}, stop {})",
            report.n_vals,
            report.mean,
            report.std_dev,
            eco.production_cost_per_mw(plant_type),
            eco.daily_running_cost(plant_type),
            eco.stop_cost(plant_type),
        );
    }

    for client_type in ClientType::ALL {
        let report = summary.clients(client_type);
        log::info!(
            "clients {client_type:?}: n = {} consumption = {:.2} ± {:.2} MW (tariff {}/{}, penalty {})",
            report.n_vals,
            report.mean,
            report.std_dev,
            eco.guaranteed_tariff(client_type),
            eco.non_guaranteed_tariff(client_type),
            eco.penalty(client_type),
        );
    }

    log::info!(
        "total production = {} MW, total demand = {} MW, guaranteed clients = {}",
        summary.total_production,
        summary.total_demand,
        summary.n_guaranteed,
    );
}
