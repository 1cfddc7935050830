use super::{SeedContext, existing};
use crate::error::SeedError;
use crate::report::StageOutcome;
use chrono::Utc;
use db::models::role::RoleName;
use db::models::teacher;
use db::repository::Repository;
use fake::Fake;
use fake::faker::company::en::Industry;
use fake::faker::job::en::Title;
use rand::Rng;
use sea_orm::{ActiveValue::Set, ConnectionTrait};
use tracing::debug;

/// One teacher profile per teacher-role user.
pub async fn seed<C, R>(
    conn: &C,
    ctx: &mut SeedContext,
    rng: &mut R,
) -> Result<StageOutcome, SeedError>
where
    C: ConnectionTrait,
    R: Rng + ?Sized,
{
    if let Some(rows) = existing::<teacher::Entity, _>(conn).await? {
        ctx.teachers = rows;
        return Ok(StageOutcome::AlreadyPopulated(ctx.teachers.len() as u64));
    }

    let users = ctx.users_with_role(RoleName::Teacher);
    if users.is_empty() {
        debug!("no teacher users, skipping teachers");
        return Ok(StageOutcome::PreconditionUnmet);
    }

    let now = Utc::now();
    let rows = users
        .into_iter()
        .map(|user| {
            let department: String = Industry().fake_with_rng(rng);
            let position: String = Title().fake_with_rng(rng);
            teacher::ActiveModel {
                user_id: Set(user.id),
                department: Set(Some(department)),
                position: Set(Some(position)),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
        })
        .collect();

    ctx.teachers = Repository::<teacher::Entity>::insert_many(conn, rows).await?;
    Ok(StageOutcome::Seeded(ctx.teachers.len() as u64))
}
