use super::{SeedContext, existing, past_within};
use crate::config::SeedConfig;
use crate::error::SeedError;
use crate::report::StageOutcome;
use chrono::Utc;
use db::models::teacher_subject_group_assignment::{self as slot, SlotKey};
use db::repository::Repository;
use rand::Rng;
use rand::seq::IndexedRandom;
use sea_orm::{ActiveValue::Set, ConnectionTrait};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Draws uniform (teacher, subject, group, semester) tuples and keeps the
/// ones not drawn before, until `target` are kept or `max_attempts` draws
/// have been made. May return fewer than `target` keys.
pub fn sample_unique_slots<R: Rng + ?Sized>(
    teachers: &[i32],
    subjects: &[i32],
    groups: &[i32],
    semesters: &[i32],
    target: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Vec<SlotKey> {
    let mut seen = HashSet::with_capacity(target);
    let mut picked = Vec::with_capacity(target);

    let mut attempts = 0;
    while picked.len() < target && attempts < max_attempts {
        attempts += 1;
        let (Some(&teacher_id), Some(&subject_id), Some(&group_id), Some(&semester_id)) = (
            teachers.choose(rng),
            subjects.choose(rng),
            groups.choose(rng),
            semesters.choose(rng),
        ) else {
            break;
        };

        let key = SlotKey {
            teacher_id,
            subject_id,
            group_id,
            semester_id,
        };
        if seen.insert(key) {
            picked.push(key);
        }
    }

    picked
}

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
    if let Some(rows) = existing::<slot::Entity, _>(conn).await? {
        ctx.slots = rows;
        return Ok(StageOutcome::AlreadyPopulated(ctx.slots.len() as u64));
    }

    if ctx.teachers.is_empty()
        || ctx.subjects.is_empty()
        || ctx.groups.is_empty()
        || ctx.semesters.is_empty()
    {
        debug!("missing teachers, subjects, groups or semesters, skipping teaching assignments");
        return Ok(StageOutcome::PreconditionUnmet);
    }

    let teachers: Vec<i32> = ctx.teachers.iter().map(|t| t.id).collect();
    let subjects: Vec<i32> = ctx.subjects.iter().map(|s| s.id).collect();
    let groups: Vec<i32> = ctx.groups.iter().map(|g| g.id).collect();
    let semesters: Vec<i32> = ctx.semesters.iter().map(|s| s.id).collect();

    let keys = sample_unique_slots(
        &teachers,
        &subjects,
        &groups,
        &semesters,
        cfg.slot_target,
        cfg.slot_max_attempts,
        rng,
    );
    if keys.len() < cfg.slot_target {
        warn!(
            wanted = cfg.slot_target,
            got = keys.len(),
            attempts = cfg.slot_max_attempts,
            "teaching assignment sampling fell short of target"
        );
    }

    let now = Utc::now();
    let rows = keys
        .into_iter()
        .map(|key| slot::ActiveModel {
            teacher_id: Set(key.teacher_id),
            subject_id: Set(key.subject_id),
            group_id: Set(key.group_id),
            semester_id: Set(key.semester_id),
            created_at: Set(past_within(rng, now, 365)),
            updated_at: Set(past_within(rng, now, 1)),
            ..Default::default()
        })
        .collect();

    ctx.slots = Repository::<slot::Entity>::insert_many(conn, rows).await?;
    Ok(StageOutcome::Seeded(ctx.slots.len() as u64))
}

#[cfg(test)]
mod tests {
    use super::sample_unique_slots;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn reaches_target_when_space_is_large() {
        let mut rng = StdRng::seed_from_u64(1);
        let keys = sample_unique_slots(
            &[1, 2, 3],
            &(1..=10).collect::<Vec<_>>(),
            &[1, 2, 3, 4, 5],
            &[1, 2, 3, 4],
            20,
            100,
            &mut rng,
        );

        assert_eq!(keys.len(), 20);
        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), 20);
    }

    #[test]
    fn falls_short_when_space_is_smaller_than_target() {
        let mut rng = StdRng::seed_from_u64(2);
        // 1 * 2 * 1 * 2 = 4 distinct tuples
        let keys = sample_unique_slots(&[7], &[1, 2], &[3], &[1, 2], 20, 100, &mut rng);

        assert_eq!(keys.len(), 4);
        assert!(keys.iter().all(|k| k.teacher_id == 7 && k.group_id == 3));
    }

    #[test]
    fn attempt_cap_bounds_the_search() {
        let mut rng = StdRng::seed_from_u64(3);
        let keys = sample_unique_slots(&[1, 2], &[1, 2], &[1, 2], &[1, 2], 16, 3, &mut rng);
        assert!(keys.len() <= 3);
    }

    #[test]
    fn empty_source_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(4);
        let keys = sample_unique_slots(&[], &[1], &[1], &[1], 5, 100, &mut rng);
        assert!(keys.is_empty());
    }
}
