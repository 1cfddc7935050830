use super::{SeedContext, existing, past_within, sentence, upper_alnum};
use crate::config::SeedConfig;
use crate::error::SeedError;
use crate::report::StageOutcome;
use chrono::Utc;
use db::models::group;
use db::repository::Repository;
use rand::Rng;
use sea_orm::{ActiveValue::Set, ConnectionTrait};
use std::collections::HashSet;

pub async fn seed<C, R>(
    conn: &C,
    ctx: &mut SeedContext,
    cfg: &SeedConfig,
    rng: &mut R,
) -> Result<StageOutcome, SeedError>
where
    C: ConnectionTrait,
    R: Rng + ?Sized,
{
    if let Some(rows) = existing::<group::Entity, _>(conn).await? {
        ctx.groups = rows;
        return Ok(StageOutcome::AlreadyPopulated(ctx.groups.len() as u64));
    }

    let now = Utc::now();
    let mut names = HashSet::with_capacity(cfg.groups);
    let mut rows = Vec::with_capacity(cfg.groups);

    while rows.len() < cfg.groups {
        let name = format!("Group {}", upper_alnum(rng, 3));
        if !names.insert(name.clone()) {
            continue;
        }

        rows.push(group::ActiveModel {
            name: Set(name),
            code: Set(format!("{:04}", rng.random_range(0..10_000))),
            description: Set(Some(sentence(rng, 4..10))),
            created_at: Set(past_within(rng, now, 365)),
            updated_at: Set(past_within(rng, now, 1)),
            ..Default::default()
        });
    }

    ctx.groups = Repository::<group::Entity>::insert_many(conn, rows).await?;
    Ok(StageOutcome::Seeded(ctx.groups.len() as u64))
}
