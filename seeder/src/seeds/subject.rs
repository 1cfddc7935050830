use super::{SeedContext, existing, past_within, sentence, upper_alnum};
use crate::config::SeedConfig;
use crate::error::SeedError;
use crate::report::StageOutcome;
use chrono::Utc;
use db::models::subject;
use db::repository::Repository;
use rand::Rng;
use rand::seq::SliceRandom;
use sea_orm::{ActiveValue::Set, ConnectionTrait};

const CATALOGUE: &[&str] = &[
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "History",
    "Geography",
    "Literature",
    "Computer Science",
    "Economics",
    "Philosophy",
    "Foreign Language",
    "Art",
    "Music",
    "Physical Education",
    "Statistics",
    "Psychology",
];

/// Subject names, drawn without replacement from the catalogue. Once the
/// catalogue is exhausted names repeat with a numeric suffix.
fn subject_names<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<String> {
    let mut pool = CATALOGUE.to_vec();
    pool.shuffle(rng);

    (0..count)
        .map(|i| {
            let base = pool[i % pool.len()];
            match i / pool.len() {
                0 => base.to_string(),
                round => format!("{base} {}", round + 1),
            }
        })
        .collect()
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
    if let Some(rows) = existing::<subject::Entity, _>(conn).await? {
        ctx.subjects = rows;
        return Ok(StageOutcome::AlreadyPopulated(ctx.subjects.len() as u64));
    }

    let now = Utc::now();
    let rows = subject_names(rng, cfg.subjects)
        .into_iter()
        .map(|name| subject::ActiveModel {
            name: Set(name),
            code: Set(Some(upper_alnum(rng, 5))),
            description: Set(Some(sentence(rng, 4..10))),
            created_at: Set(past_within(rng, now, 365)),
            updated_at: Set(past_within(rng, now, 1)),
            ..Default::default()
        })
        .collect();

    ctx.subjects = Repository::<subject::Entity>::insert_many(conn, rows).await?;
    Ok(StageOutcome::Seeded(ctx.subjects.len() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn names_are_distinct_past_catalogue_size() {
        let mut rng = StdRng::seed_from_u64(3);
        let names = subject_names(&mut rng, CATALOGUE.len() * 2 + 1);
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }
}
