use colored::*;
use std::{fs, path::Path, process};
use util::config;

use migration::runner;

#[tokio::main]
async fn main() {
    let db_path = config::database_path();
    let url = format!("sqlite://{}?mode=rwc", db_path);
    let command = std::env::args().nth(1);

    let result = match command.as_deref() {
        Some("clean") => {
            remove_db_file(&db_path);
            return;
        }
        Some("fresh") => {
            remove_db_file(&db_path);
            create_db_dir(&db_path);
            migrate(&url).await
        }
        Some("status") => match sea_orm::Database::connect(&url).await {
            Ok(db) => runner::print_status(&db).await,
            Err(e) => Err(e),
        },
        Some("up") | None => {
            create_db_dir(&db_path);
            migrate(&url).await
        }
        Some(other) => {
            eprintln!("Unknown command '{other}'. Expected one of: up, fresh, clean, status");
            process::exit(2);
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Migration failed:".red(), e);
        process::exit(1);
    }
}

async fn migrate(url: &str) -> Result<(), sea_orm::DbErr> {
    let db = sea_orm::Database::connect(url).await?;
    runner::run_pending_migrations(&db).await
}

fn remove_db_file(path: &str) {
    let db_path = Path::new(path);
    if db_path.exists() {
        match fs::remove_file(db_path) {
            Ok(()) => println!("Deleted DB: {}", db_path.display()),
            Err(e) => {
                eprintln!("Failed to delete DB file {}: {}", db_path.display(), e);
                process::exit(1);
            }
        }
    } else {
        println!("DB file does not exist: {}", db_path.display());
    }
}

fn create_db_dir(path: &str) {
    if let Some(parent) = Path::new(path).parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Failed to create DB directory {}: {}", parent.display(), e);
            process::exit(1);
        }
    }
}
