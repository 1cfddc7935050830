use super::{SeedContext, existing, past_within};
use crate::config::SeedConfig;
use crate::error::SeedError;
use crate::report::StageOutcome;
use chrono::Utc;
use db::models::role::RoleName;
use db::models::user::{self, hash_password};
use db::repository::Repository;
use fake::Fake;
use fake::faker::internet::en::FreeEmailProvider;
use fake::faker::name::en::{FirstName, LastName};
use rand::Rng;
use sea_orm::{ActiveValue::Set, ConnectionTrait};
use std::collections::HashSet;

/// Inserts admin, teacher and student users. Every user shares one argon2
/// hash of the configured placeholder password.
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
    if let Some(rows) = existing::<user::Entity, _>(conn).await? {
        ctx.users = rows;
        return Ok(StageOutcome::AlreadyPopulated(ctx.users.len() as u64));
    }

    let mut plan = Vec::with_capacity(3);
    for (role, count) in [
        (RoleName::Admin, cfg.admin_users),
        (RoleName::Teacher, cfg.teacher_users),
        (RoleName::Student, cfg.student_users),
    ] {
        let role_id = ctx.role_id(role).ok_or(SeedError::MissingRole(role))?;
        plan.push((role_id, count));
    }

    let password_hash = hash_password(&cfg.default_password)?;
    let now = Utc::now();
    let mut taken = HashSet::new();
    let mut rows = Vec::new();

    for (role_id, count) in plan {
        for _ in 0..count {
            let first: String = FirstName().fake_with_rng(rng);
            let last: String = LastName().fake_with_rng(rng);
            let domain: String = FreeEmailProvider().fake_with_rng(rng);
            let username = unique_username(&first, &last, &mut taken);
            let email = format!("{}.{}@{}", slug(&first), slug(&last), domain);

            rows.push(user::ActiveModel {
                username: Set(username),
                password_hash: Set(password_hash.clone()),
                first_name: Set(first),
                last_name: Set(last),
                email: Set(Some(email)),
                role_id: Set(role_id),
                created_at: Set(past_within(rng, now, 365)),
                updated_at: Set(past_within(rng, now, 1)),
                ..Default::default()
            });
        }
    }

    ctx.users = Repository::<user::Entity>::insert_many(conn, rows).await?;
    Ok(StageOutcome::Seeded(ctx.users.len() as u64))
}

fn slug(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase()
}

/// `first.last`, with a numeric suffix when that name is already taken.
fn unique_username(first: &str, last: &str, taken: &mut HashSet<String>) -> String {
    let mut base = format!("{}.{}", slug(first), slug(last));
    if base == "." {
        base = "user".to_string();
    }

    let mut candidate = base.clone();
    let mut n = 1;
    while !taken.insert(candidate.clone()) {
        n += 1;
        candidate = format!("{base}{n}");
    }
    candidate
}
