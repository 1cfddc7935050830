//! Populates an empty student-records database with consistent synthetic data.
//!
//! [`Seeder::seed`] walks the entity tables in dependency order. A table that
//! already holds rows is left alone and its rows are read back for the later
//! stages, so the seeder is safe to run on every process start.

pub mod config;
pub mod error;
pub mod report;
mod seed;
pub mod seeds;

pub use config::SeedConfig;
pub use error::SeedError;
pub use report::{SeedReport, Stage, StageOutcome, StageReport};
pub use seed::Seeder;
