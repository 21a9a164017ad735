use log::error;
use petflow::app::{self, month_grid, parse_year_month, run_adoption_demo, run_service_demo};
use petflow::{build_engine, AppConfig, CoreError};
use pet_domain::StaticPetSource;
use serde::Serialize;
use std::io::{self, Write};

const USAGE: &str = "uso: petflow demo service|adoption | petflow calendar <service_id> <YYYY-MM> | petflow catalog";

fn print_json<T: Serialize>(value: &T) -> Result<(), CoreError> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

async fn run(args: &[String]) -> Result<(), CoreError> {
    let config = AppConfig::from_env()?;
    let catalog = app::load(&StaticPetSource).await;
    let mut engine = build_engine(&config, catalog);

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["demo", "service"] => {
            let report = run_service_demo(&mut engine, &config.seed_service, config.seed_offset_days)?;
            print_json(&report)
        }
        ["demo", "adoption"] => {
            let report = run_adoption_demo(&mut engine)?;
            print_json(&report)
        }
        ["calendar", service_id, month] => {
            let grid = month_grid(&engine, service_id, parse_year_month(month)?)?;
            print_json(&grid)
        }
        ["catalog"] => print_json(engine.catalog()),
        _ => Err(CoreError::Usage(USAGE.to_string())),
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args).await {
        error!("{e}");
        eprintln!("{e}");
        let code = match e {
            CoreError::Usage(_) => 2,
            CoreError::Wizard(_) => 4,
            _ => 5,
        };
        std::process::exit(code);
    }
}
