use super::{SeedContext, existing_count, past_within, sentence};
use crate::config::SeedConfig;
use crate::error::SeedError;
use crate::report::StageOutcome;
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use db::models::attendance::{self, AttendanceStatus};
use db::repository::Repository;
use rand::Rng;
use rand::seq::IndexedRandom;
use sea_orm::{ActiveValue::Set, ConnectionTrait};
use std::collections::HashSet;
use tracing::{debug, warn};

const STATUSES: [AttendanceStatus; 4] = [
    AttendanceStatus::Present,
    AttendanceStatus::Absent,
    AttendanceStatus::Late,
    AttendanceStatus::Excused,
];

/// Session days are whole UTC days within this many days back.
const LOOKBACK_DAYS: i64 = 30;

/// Attendance records for random (student, slot, day) triples, each triple
/// at most once.
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
    if let Some(n) = existing_count::<attendance::Entity, _>(conn).await? {
        return Ok(StageOutcome::AlreadyPopulated(n));
    }

    if ctx.students.is_empty() || ctx.slots.is_empty() {
        debug!("no students or no teaching assignments, skipping attendances");
        return Ok(StageOutcome::PreconditionUnmet);
    }

    let now = Utc::now();
    let today = now.date_naive();
    let mut seen: HashSet<(i32, i32, NaiveDate)> = HashSet::with_capacity(cfg.attendances);
    let mut rows = Vec::with_capacity(cfg.attendances);

    let mut attempts = 0;
    while rows.len() < cfg.attendances && attempts < cfg.attendance_max_attempts {
        attempts += 1;
        let (Some(student), Some(slot), Some(status)) = (
            ctx.students.choose(rng),
            ctx.slots.choose(rng),
            STATUSES.choose(rng),
        ) else {
            break;
        };
        let day = today - Duration::days(rng.random_range(0..LOOKBACK_DAYS));
        if !seen.insert((student.id, slot.id, day)) {
            continue;
        }

        rows.push(attendance::ActiveModel {
            student_id: Set(student.id),
            teacher_subject_group_assignment_id: Set(slot.id),
            date: Set(day.and_time(NaiveTime::MIN).and_utc()),
            status: Set(*status),
            remarks: Set(Some(sentence(rng, 3..4))),
            created_at: Set(past_within(rng, now, 365)),
            updated_at: Set(past_within(rng, now, 1)),
            ..Default::default()
        });
    }

    if rows.len() < cfg.attendances {
        warn!(
            wanted = cfg.attendances,
            got = rows.len(),
            "attendance sampling fell short of target"
        );
    }

    let inserted = Repository::<attendance::Entity>::insert_many(conn, rows).await?;
    Ok(StageOutcome::Seeded(inserted.len() as u64))
}
