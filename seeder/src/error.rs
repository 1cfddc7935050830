use db::models::role::RoleName;
use db::models::user::PasswordError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("database error: {0}")]
    Db(#[from] DbErr),

    #[error("role '{0}' is missing; seed roles before users")]
    MissingRole(RoleName),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error("invalid calendar date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}
