use colored::*;
use migration::runner::run_pending_migrations;
use seeder::{SeedConfig, SeedReport, Seeder, StageOutcome};
use std::process;
use tracing_subscriber::EnvFilter;

const STATUS_COLUMN: usize = 80;

fn print_report(report: &SeedReport) {
    for stage in &report.stages {
        let base_msg = format!("Seeding {}", stage.stage.to_string().bold());
        let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
        let time_str = format!("({:.2?})", stage.elapsed).dimmed();

        let status = match stage.outcome {
            StageOutcome::Seeded(n) => format!("{} {}", "done".green(), format!("[{n} rows]").dimmed()),
            StageOutcome::AlreadyPopulated(n) => {
                format!("{} {}", "skipped".yellow(), format!("[{n} existing]").dimmed())
            }
            StageOutcome::PreconditionUnmet => format!("{}", "nothing to seed from".yellow()),
        };
        println!("{}{} {} {}", base_msg, dots, status, time_str);
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| "warn".into()))
        .init();

    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("{} {}", "Failed to connect:".red(), e);
            process::exit(1);
        }
    };

    if let Err(e) = run_pending_migrations(&db).await {
        eprintln!("{} {}", "Migration failed:".red(), e);
        process::exit(1);
    }

    let seeder = Seeder::new(SeedConfig::from_app_config());
    match seeder.seed(&db).await {
        Ok(report) => {
            print_report(&report);
            println!("{} rows inserted", report.total_inserted().to_string().bold());
        }
        Err(e) => {
            eprintln!("{} {}", "Seeding failed:".red(), e);
            process::exit(1);
        }
    }
}
