use rand::SeedableRng;
use rand::rngs::StdRng;
use std::ops::RangeInclusive;
use util::config;

/// Row counts and sampling limits for one seeding run.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub admin_users: usize,
    pub teacher_users: usize,
    pub student_users: usize,
    pub groups: usize,
    pub subjects: usize,
    /// Teaching assignments to aim for.
    pub slot_target: usize,
    /// Draws allowed while looking for distinct teaching assignments.
    pub slot_max_attempts: usize,
    pub assignments: usize,
    pub attendances: usize,
    /// Draws allowed while looking for distinct (student, slot, date) triples.
    pub attendance_max_attempts: usize,
    /// Grades per student for each teaching assignment of the student's group.
    pub grades_per_slot: RangeInclusive<u32>,
    /// Plaintext credential shared by every seeded user.
    pub default_password: String,
    /// Fixed RNG seed for reproducible data. `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            admin_users: 1,
            teacher_users: 3,
            student_users: 20,
            groups: 5,
            subjects: 10,
            slot_target: 20,
            slot_max_attempts: 100,
            assignments: 50,
            attendances: 100,
            attendance_max_attempts: 1_000,
            grades_per_slot: 1..=3,
            default_password: "password123".to_string(),
            rng_seed: None,
        }
    }
}

impl SeedConfig {
    /// Default counts with the password and RNG seed taken from the
    /// application configuration.
    pub fn from_app_config() -> Self {
        Self {
            default_password: config::seed_default_password(),
            rng_seed: config::seed_rng_seed(),
            ..Self::default()
        }
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub(crate) fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SeedConfig;
    use rand::Rng;

    #[test]
    fn defaults_match_seeding_policy() {
        let cfg = SeedConfig::default();
        assert_eq!(cfg.admin_users + cfg.teacher_users + cfg.student_users, 24);
        assert_eq!(cfg.slot_target, 20);
        assert_eq!(cfg.slot_max_attempts, 100);
        assert_eq!(cfg.grades_per_slot, 1..=3);
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let cfg = SeedConfig::default().with_rng_seed(42);
        let a: u64 = cfg.rng().random();
        let b: u64 = cfg.rng().random();
        assert_eq!(a, b);
    }
}
