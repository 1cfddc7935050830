//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from `.env` and environment variables.
//! Binaries read it through the free accessor functions at the bottom of this
//! module; tests override single fields through the setters.

use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock, RwLockReadGuard};

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    pub seed_on_startup: bool,
    pub seed_rng_seed: Option<u64>,
    pub seed_default_password: String,
    /// Origins allowed by CORS. Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.into())
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "invalid value in environment, using default");
            default
        }),
        Err(_) => default,
    }
}

/// Splits a `,` or `;` separated list, dropping blank entries.
fn list(key: &str) -> Vec<String> {
    env::var(key)
        .map(|raw| split_list(&raw))
        .unwrap_or_default()
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn flag(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// `DATABASE_PATH` falls back to `data/dev.db` so the seeder and migration
    /// binaries work from a fresh checkout.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: var_or("APP_ENV", "development"),
            project_name: var_or("PROJECT_NAME", "student-records"),
            log_level: var_or("LOG_LEVEL", "api=info,seeder=info"),
            log_file: var_or("LOG_FILE", "api.log"),
            log_to_stdout: flag("LOG_TO_STDOUT", false),
            database_path: var_or("DATABASE_PATH", "data/dev.db"),
            host: var_or("HOST", "127.0.0.1"),
            port: parse_or("PORT", 3000),
            seed_on_startup: flag("SEED_ON_STARTUP", true),
            seed_rng_seed: env::var("SEED_RNG_SEED")
                .ok()
                .and_then(|s| s.trim().parse().ok()),
            seed_default_password: var_or("SEED_DEFAULT_PASSWORD", "password123"),
            cors_allowed_origins: list("CORS_ALLOWED_ORIGINS"),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn global() -> RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            if let Ok(mut guard) = lock.write() {
                *guard = AppConfig::from_env();
            }
        }
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    pub fn set_env(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.env = value.into());
    }

    pub fn set_database_path(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.database_path = value.into());
    }

    pub fn set_seed_on_startup(value: bool) {
        AppConfig::set_field(|cfg| cfg.seed_on_startup = value);
    }

    pub fn set_seed_rng_seed(value: Option<u64>) {
        AppConfig::set_field(|cfg| cfg.seed_rng_seed = value);
    }

    pub fn set_cors_allowed_origins(value: Vec<String>) {
        AppConfig::set_field(|cfg| cfg.cors_allowed_origins = value);
    }
}

pub fn env() -> String {
    AppConfig::global().env.clone()
}

pub fn is_production() -> bool {
    env().eq_ignore_ascii_case("production")
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn database_path() -> String {
    AppConfig::global().database_path.clone()
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}

pub fn seed_on_startup() -> bool {
    AppConfig::global().seed_on_startup
}

pub fn seed_rng_seed() -> Option<u64> {
    AppConfig::global().seed_rng_seed
}

pub fn seed_default_password() -> String {
    AppConfig::global().seed_default_password.clone()
}

pub fn cors_allowed_origins() -> Vec<String> {
    AppConfig::global().cors_allowed_origins.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn setters_override_loaded_values() {
        AppConfig::set_env("production");
        AppConfig::set_seed_rng_seed(Some(42));
        assert!(is_production());
        assert_eq!(seed_rng_seed(), Some(42));

        AppConfig::set_env("development");
        AppConfig::set_seed_rng_seed(None);
        assert!(!is_production());
    }

    #[test]
    fn origin_lists_accept_both_separators() {
        assert_eq!(
            split_list(" http://a.test, http://b.test;;http://c.test ,"),
            ["http://a.test", "http://b.test", "http://c.test"]
        );
        assert!(split_list(" ; ").is_empty());
    }

    #[test]
    #[serial]
    fn defaults_are_filled_in() {
        let cfg = AppConfig::from_env();
        assert!(!cfg.project_name.is_empty());
        assert!(!cfg.database_path.is_empty());
        assert!(!cfg.seed_default_password.is_empty());
    }
}
