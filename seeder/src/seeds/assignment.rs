use super::{SeedContext, between, existing_count, future_within, past_within, score, sentence};
use crate::config::SeedConfig;
use crate::error::SeedError;
use crate::report::StageOutcome;
use chrono::Utc;
use db::models::assignment::{self, AssignmentType};
use db::repository::Repository;
use fake::Fake;
use fake::faker::company::en::CatchPhrase;
use rand::Rng;
use rand::seq::IndexedRandom;
use sea_orm::{ActiveValue::Set, ConnectionTrait};
use tracing::debug;

const TYPES: [AssignmentType; 4] = [
    AssignmentType::Quiz,
    AssignmentType::Homework,
    AssignmentType::Project,
    AssignmentType::Exam,
];

/// Coursework spread uniformly over the teaching assignments.
pub async fn seed<C, R>(
    conn: &C,
    ctx: &SeedContext,
    cfg: &SeedConfig,
    rng: &mut R,
) -> Result<StageOutcome, SeedError>
where
    C: ConnectionTrait,
    R: Rng + ?Sized,
{
    if let Some(n) = existing_count::<assignment::Entity, _>(conn).await? {
        return Ok(StageOutcome::AlreadyPopulated(n));
    }

    if ctx.slots.is_empty() {
        debug!("no teaching assignments, skipping assignments");
        return Ok(StageOutcome::PreconditionUnmet);
    }

    let now = Utc::now();
    let mut rows = Vec::with_capacity(cfg.assignments);
    for _ in 0..cfg.assignments {
        let (Some(slot), Some(kind)) = (ctx.slots.choose(rng), TYPES.choose(rng)) else {
            break;
        };
        let title: String = CatchPhrase().fake_with_rng(rng);
        let created_at = past_within(rng, now, 365);
        let due_date = future_within(rng, now, 365);

        rows.push(assignment::ActiveModel {
            teacher_subject_group_assignment_id: Set(slot.id),
            title: Set(title),
            description: Set(Some(sentence(rng, 6..14))),
            assignment_type: Set(*kind),
            max_score: Set(score(rng, 5.0, 100.0)),
            due_date: Set(due_date),
            submission_date: Set(Some(between(rng, created_at, due_date))),
            created_at: Set(created_at),
            updated_at: Set(past_within(rng, now, 1)),
            ..Default::default()
        });
    }

    let inserted = Repository::<assignment::Entity>::insert_many(conn, rows).await?;
    Ok(StageOutcome::Seeded(inserted.len() as u64))
}
