use super::{SeedContext, existing_count, past_within, score, sentence};
use crate::config::SeedConfig;
use crate::error::SeedError;
use crate::report::StageOutcome;
use chrono::Utc;
use db::models::grade::{self, GradeStatus};
use db::repository::Repository;
use rand::Rng;
use rand::seq::IndexedRandom;
use sea_orm::{ActiveValue::Set, ConnectionTrait};
use std::collections::HashSet;
use tracing::debug;

const CONTROL_TYPES: [&str; 4] = ["Quiz", "Exam", "Lab", "Project"];
const STATUSES: [GradeStatus; 3] = [GradeStatus::Passed, GradeStatus::Failed, GradeStatus::Pending];

/// For every student, 1–3 grades (per config) in each teaching assignment of
/// the student's group. Grades are not tied to a specific assignment.
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
    if let Some(n) = existing_count::<grade::Entity, _>(conn).await? {
        return Ok(StageOutcome::AlreadyPopulated(n));
    }

    if ctx.students.is_empty()
        || ctx.subjects.is_empty()
        || ctx.semesters.is_empty()
        || ctx.teachers.is_empty()
        || ctx.slots.is_empty()
    {
        debug!("missing students, subjects, semesters, teachers or teaching assignments, skipping grades");
        return Ok(StageOutcome::PreconditionUnmet);
    }

    let subjects: HashSet<i32> = ctx.subjects.iter().map(|s| s.id).collect();
    let semesters: HashSet<i32> = ctx.semesters.iter().map(|s| s.id).collect();
    let teachers: HashSet<i32> = ctx.teachers.iter().map(|t| t.id).collect();

    let now = Utc::now();
    let mut rows = Vec::new();

    for student in &ctx.students {
        for slot in ctx.slots.iter().filter(|s| s.group_id == student.group_id) {
            if !subjects.contains(&slot.subject_id)
                || !semesters.contains(&slot.semester_id)
                || !teachers.contains(&slot.teacher_id)
            {
                debug!(slot = slot.id, "teaching assignment references unknown rows, skipping");
                continue;
            }

            let count = if cfg.grades_per_slot.is_empty() {
                0
            } else {
                rng.random_range(cfg.grades_per_slot.clone())
            };

            for _ in 0..count {
                let (Some(control_type), Some(status)) =
                    (CONTROL_TYPES.choose(rng), STATUSES.choose(rng))
                else {
                    break;
                };

                rows.push(grade::ActiveModel {
                    student_id: Set(student.id),
                    teacher_subject_group_assignment_id: Set(slot.id),
                    assignment_id: Set(None),
                    subject_id: Set(Some(slot.subject_id)),
                    semester_id: Set(Some(slot.semester_id)),
                    teacher_id: Set(Some(slot.teacher_id)),
                    value: Set(score(rng, 0.0, 100.0)),
                    control_type: Set(control_type.to_string()),
                    date_received: Set(past_within(rng, now, 60)),
                    status: Set(*status),
                    notes: Set(Some(sentence(rng, 4..10))),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                });
            }
        }
    }

    let inserted = Repository::<grade::Entity>::insert_many(conn, rows).await?;
    Ok(StageOutcome::Seeded(inserted.len() as u64))
}
