pub mod models;
pub mod repository;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection, DbErr};
use std::path::Path;
use util::config;

pub use repository::Repository;

/// Turns `DATABASE_PATH` into a connection URL.
///
/// `sqlite:` and `postgres://` URLs are used as-is, any other URL scheme is
/// rejected, and a bare path is opened as a SQLite file in read-write-create
/// mode.
pub fn database_url(path_or_url: &str) -> Result<String, DbErr> {
    if path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("postgresql://")
    {
        return Ok(path_or_url.to_string());
    }

    if let Some((scheme, _)) = path_or_url.split_once("://") {
        return Err(DbErr::Custom(format!(
            "unsupported database scheme '{scheme}', expected sqlite or postgres"
        )));
    }

    Ok(format!("sqlite://{path_or_url}?mode=rwc"))
}

/// Connects using the configured `DATABASE_PATH`.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let path_or_url = config::database_path();
    let url = database_url(&path_or_url)?;

    if !url.starts_with("sqlite::memory:") && url.starts_with("sqlite://") {
        // SQLite won't create intermediate dirs.
        if let Some(parent) = Path::new(&path_or_url).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
    }

    tracing::debug!(url = %url, "connecting to database");
    Database::connect(&url).await
}

#[cfg(test)]
mod tests {
    use super::database_url;
    use sea_orm::{ConnectOptions, Database};
    use std::time::Duration;

    #[test]
    fn file_paths_become_sqlite_urls() {
        assert_eq!(database_url("data/dev.db").unwrap(), "sqlite://data/dev.db?mode=rwc");
        assert_eq!(database_url("/tmp/x.db").unwrap(), "sqlite:///tmp/x.db?mode=rwc");
    }

    #[test]
    fn supported_dsns_pass_through() {
        assert_eq!(database_url("sqlite::memory:").unwrap(), "sqlite::memory:");
        assert_eq!(
            database_url("postgres://u:p@localhost/db").unwrap(),
            "postgres://u:p@localhost/db"
        );
    }

    #[test]
    fn unsupported_schemes_are_rejected() {
        let err = database_url("mysql://u:p@localhost/db").unwrap_err();
        assert!(err.to_string().contains("unsupported database scheme 'mysql'"));
    }

    #[tokio::test]
    async fn postgres_urls_reach_a_driver() {
        let url = database_url("postgres://u:p@127.0.0.1:1/db").unwrap();
        let mut opts = ConnectOptions::new(url);
        opts.connect_timeout(Duration::from_secs(1))
            .acquire_timeout(Duration::from_secs(1))
            .sqlx_logging(false);

        let err = Database::connect(opts).await.unwrap_err();
        assert!(
            !err.to_string().contains("no supporting driver"),
            "unexpected error: {err}"
        );
    }
}
