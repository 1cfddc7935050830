//! One module per seeding stage.
//!
//! Every stage follows the same shape: if its table already has rows, read
//! them into the [`SeedContext`] and report `AlreadyPopulated`; if a table it
//! draws from is empty, report `PreconditionUnmet`; otherwise generate rows,
//! insert them, and keep the stored rows (with ids) for later stages.

pub mod assignment;
pub mod attendance;
pub mod grade;
pub mod group;
pub mod role;
pub mod semester;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod teaching_assignment;
pub mod user;

use chrono::{DateTime, Duration, Utc};
use db::models::{
    group as group_model, role as role_model, role::RoleName, semester as semester_model,
    student as student_model, subject as subject_model, teacher as teacher_model,
    teacher_subject_group_assignment as slot_model, user as user_model,
};
use db::repository::Repository;
use fake::{Fake, StringFaker};
use fake::faker::lorem::en::Sentence;
use rand::Rng;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
};

/// Rows produced or loaded by earlier stages.
#[derive(Debug, Default)]
pub struct SeedContext {
    pub roles: Vec<role_model::Model>,
    pub users: Vec<user_model::Model>,
    pub groups: Vec<group_model::Model>,
    pub subjects: Vec<subject_model::Model>,
    pub semesters: Vec<semester_model::Model>,
    pub students: Vec<student_model::Model>,
    pub teachers: Vec<teacher_model::Model>,
    pub slots: Vec<slot_model::Model>,
}

impl SeedContext {
    pub fn role_id(&self, name: RoleName) -> Option<i32> {
        let name = name.to_string();
        self.roles.iter().find(|r| r.name == name).map(|r| r.id)
    }

    /// Users holding `name`, in id order. Empty if the role does not exist.
    pub fn users_with_role(&self, name: RoleName) -> Vec<&user_model::Model> {
        match self.role_id(name) {
            Some(role_id) => self.users.iter().filter(|u| u.role_id == role_id).collect(),
            None => Vec::new(),
        }
    }
}

/// All rows of `E` if the table is non-empty, `None` otherwise.
pub(crate) async fn existing<E, C>(conn: &C) -> Result<Option<Vec<E::Model>>, DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    if Repository::<E>::exists_any(conn).await? {
        Ok(Some(Repository::<E>::list_all(conn).await?))
    } else {
        Ok(None)
    }
}

/// Row count of `E` if the table is non-empty. Used by stages whose rows no
/// later stage reads.
pub(crate) async fn existing_count<E, C>(conn: &C) -> Result<Option<u64>, DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    if Repository::<E>::exists_any(conn).await? {
        Ok(Some(Repository::<E>::count(conn).await?))
    } else {
        Ok(None)
    }
}

/// A moment uniformly within the `days` before `now`.
pub(crate) fn past_within<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::seconds(rng.random_range(0..days.max(1) * 86_400))
}

/// A moment uniformly within the `days` after `now`.
pub(crate) fn future_within<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now + Duration::seconds(rng.random_range(1..=days.max(1) * 86_400))
}

/// A moment uniformly between `from` and `to`, inclusive. Returns `from`
/// when the bounds are reversed.
pub(crate) fn between<R: Rng + ?Sized>(
    rng: &mut R,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> DateTime<Utc> {
    let span = (to - from).num_seconds();
    if span <= 0 {
        return from;
    }
    from + Duration::seconds(rng.random_range(0..=span))
}

pub(crate) fn sentence<R: Rng + ?Sized>(rng: &mut R, words: std::ops::Range<usize>) -> String {
    Sentence(words).fake_with_rng(rng)
}

/// `n` random upper-case ASCII letters and digits.
pub(crate) fn upper_alnum<R: Rng + ?Sized>(rng: &mut R, n: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    StringFaker::with(CHARSET.to_vec(), n..n + 1).fake_with_rng(rng)
}

/// Score with two decimals in `[lo, hi]`.
pub(crate) fn score<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    (rng.random_range(lo..=hi) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn time_helpers_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = Utc::now();
        for _ in 0..200 {
            let p = past_within(&mut rng, now, 30);
            assert!(p <= now && p >= now - Duration::days(30));

            let f = future_within(&mut rng, now, 365);
            assert!(f > now && f <= now + Duration::days(365));

            let b = between(&mut rng, p, f);
            assert!(b >= p && b <= f);
        }
        assert_eq!(between(&mut rng, now, now - Duration::days(1)), now);
    }

    #[test]
    fn codes_and_scores_have_expected_shape() {
        let mut rng = StdRng::seed_from_u64(11);
        let code = upper_alnum(&mut rng, 5);
        assert_eq!(code.len(), 5);
        assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));

        for _ in 0..100 {
            let s = score(&mut rng, 5.0, 100.0);
            assert!((5.0..=100.0).contains(&s));
            assert!(((s * 100.0).round() - s * 100.0).abs() < 1e-6);
        }
    }
}
