use super::{SeedContext, existing};
use crate::error::SeedError;
use crate::report::StageOutcome;
use chrono::Utc;
use db::models::role::{self, RoleName};
use db::repository::Repository;
use sea_orm::{ActiveValue::Set, ConnectionTrait};

/// Inserts the three built-in roles.
pub async fn seed<C: ConnectionTrait>(
    conn: &C,
    ctx: &mut SeedContext,
) -> Result<StageOutcome, SeedError> {
    if let Some(rows) = existing::<role::Entity, _>(conn).await? {
        ctx.roles = rows;
        return Ok(StageOutcome::AlreadyPopulated(ctx.roles.len() as u64));
    }

    let now = Utc::now();
    let rows = RoleName::ALL
        .iter()
        .map(|name| role::ActiveModel {
            name: Set(name.to_string()),
            description: Set(Some(name.description().to_string())),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
        .collect();

    ctx.roles = Repository::<role::Entity>::insert_many(conn, rows).await?;
    Ok(StageOutcome::Seeded(ctx.roles.len() as u64))
}
