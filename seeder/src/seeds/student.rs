use super::{SeedContext, existing};
use crate::error::SeedError;
use crate::report::StageOutcome;
use chrono::{Duration, Utc};
use db::models::role::RoleName;
use db::models::student;
use db::repository::Repository;
use rand::Rng;
use rand::seq::IndexedRandom;
use sea_orm::{ActiveValue::Set, ConnectionTrait};
use tracing::debug;

/// One student profile per student-role user, each in a random group.
pub async fn seed<C, R>(
    conn: &C,
    ctx: &mut SeedContext,
    rng: &mut R,
) -> Result<StageOutcome, SeedError>
where
    C: ConnectionTrait,
    R: Rng + ?Sized,
{
    if let Some(rows) = existing::<student::Entity, _>(conn).await? {
        ctx.students = rows;
        return Ok(StageOutcome::AlreadyPopulated(ctx.students.len() as u64));
    }

    let users = ctx.users_with_role(RoleName::Student);
    if users.is_empty() || ctx.groups.is_empty() {
        debug!(
            student_users = users.len(),
            groups = ctx.groups.len(),
            "no student users or no groups, skipping students"
        );
        return Ok(StageOutcome::PreconditionUnmet);
    }

    let now = Utc::now();
    let mut rows = Vec::with_capacity(users.len());
    for user in users {
        let Some(group) = ctx.groups.choose(rng) else {
            break;
        };
        let age_days = rng.random_range(18 * 365..=20 * 365);
        let enrolled_days = rng.random_range(365..=2 * 365);

        rows.push(student::ActiveModel {
            user_id: Set(user.id),
            group_id: Set(group.id),
            date_of_birth: Set(Some(now - Duration::days(age_days))),
            enrollment_date: Set(Some(now - Duration::days(enrolled_days))),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        });
    }

    ctx.students = Repository::<student::Entity>::insert_many(conn, rows).await?;
    Ok(StageOutcome::Seeded(ctx.students.len() as u64))
}
