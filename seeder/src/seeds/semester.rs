use super::{SeedContext, existing};
use crate::error::SeedError;
use crate::report::StageOutcome;
use chrono::{DateTime, Datelike, TimeZone, Utc};
use db::models::semester;
use db::repository::Repository;
use sea_orm::{ActiveValue::Set, ConnectionTrait};

fn utc_date(year: i32, month: u32, day: u32) -> Result<DateTime<Utc>, SeedError> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .ok_or(SeedError::InvalidDate { year, month, day })
}

/// Spring and Fall of the current and previous year.
pub(crate) fn calendar(now: DateTime<Utc>) -> Result<Vec<semester::ActiveModel>, SeedError> {
    let current = now.year();
    let mut rows = Vec::with_capacity(4);

    for year in [current, current - 1] {
        for (term, code, start, end) in [
            ("Spring", "SP", (2, 1), (6, 30)),
            ("Fall", "FA", (9, 1), (12, 31)),
        ] {
            let start_date = utc_date(year, start.0, start.1)?;
            let end_date = utc_date(year, end.0, end.1)?;
            rows.push(semester::ActiveModel {
                name: Set(format!("{year} {term}")),
                code: Set(Some(format!("{year}-{code}"))),
                start_date: Set(start_date),
                end_date: Set(end_date),
                is_active: Set(start_date <= now && now <= end_date),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            });
        }
    }

    Ok(rows)
}

pub async fn seed<C: ConnectionTrait>(
    conn: &C,
    ctx: &mut SeedContext,
) -> Result<StageOutcome, SeedError> {
    if let Some(rows) = existing::<semester::Entity, _>(conn).await? {
        ctx.semesters = rows;
        return Ok(StageOutcome::AlreadyPopulated(ctx.semesters.len() as u64));
    }

    let rows = calendar(Utc::now())?;
    ctx.semesters = Repository::<semester::Entity>::insert_many(conn, rows).await?;
    Ok(StageOutcome::Seeded(ctx.semesters.len() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_covers_two_years_and_flags_current_term() {
        let now = utc_date(2025, 3, 15).unwrap();
        let rows = calendar(now).unwrap();

        let names: Vec<_> = rows.iter().map(|r| r.name.clone().unwrap()).collect();
        assert_eq!(names, ["2025 Spring", "2025 Fall", "2024 Spring", "2024 Fall"]);

        let active: Vec<_> = rows.iter().map(|r| r.is_active.clone().unwrap()).collect();
        assert_eq!(active, [true, false, false, false]);
        assert_eq!(rows[1].code.clone().unwrap().as_deref(), Some("2025-FA"));
    }

    #[test]
    fn summer_has_no_active_term() {
        let now = utc_date(2025, 7, 20).unwrap();
        let rows = calendar(now).unwrap();
        assert!(rows.iter().all(|r| !r.is_active.clone().unwrap()));
    }
}
