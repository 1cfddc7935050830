use std::time::Duration;
use strum::{Display, EnumIter, IntoEnumIterator};

/// One seeding stage, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Stage {
    Roles,
    Users,
    Groups,
    Subjects,
    Semesters,
    Students,
    Teachers,
    TeachingAssignments,
    Assignments,
    Attendances,
    Grades,
}

impl Stage {
    pub fn ordered() -> impl Iterator<Item = Stage> {
        Stage::iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutcome {
    /// The table was empty and this many rows were inserted.
    Seeded(u64),
    /// The table already held this many rows; nothing was generated.
    AlreadyPopulated(u64),
    /// A table this stage draws from is empty; nothing was generated.
    PreconditionUnmet,
}

#[derive(Debug, Clone)]
pub struct StageReport {
    pub stage: Stage,
    pub outcome: StageOutcome,
    pub elapsed: Duration,
}

/// What a seeding run did, stage by stage.
#[derive(Debug, Clone, Default)]
pub struct SeedReport {
    pub stages: Vec<StageReport>,
}

impl SeedReport {
    pub(crate) fn push(&mut self, stage: Stage, outcome: StageOutcome, elapsed: Duration) {
        self.stages.push(StageReport {
            stage,
            outcome,
            elapsed,
        });
    }

    pub fn outcome(&self, stage: Stage) -> Option<StageOutcome> {
        self.stages
            .iter()
            .find(|r| r.stage == stage)
            .map(|r| r.outcome)
    }

    /// Rows inserted by `stage`, or `None` if it did not generate anything.
    pub fn seeded(&self, stage: Stage) -> Option<u64> {
        match self.outcome(stage)? {
            StageOutcome::Seeded(n) => Some(n),
            _ => None,
        }
    }

    pub fn total_inserted(&self) -> u64 {
        self.stages
            .iter()
            .filter_map(|r| match r.outcome {
                StageOutcome::Seeded(n) => Some(n),
                _ => None,
            })
            .sum()
    }

    /// `true` when no stage inserted anything.
    pub fn is_noop(&self) -> bool {
        self.total_inserted() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_run_in_dependency_order() {
        let order: Vec<_> = Stage::ordered().collect();
        assert_eq!(order.len(), 11);
        assert_eq!(order[0], Stage::Roles);
        assert_eq!(order[7], Stage::TeachingAssignments);
        assert_eq!(order[10], Stage::Grades);
    }

    #[test]
    fn report_totals_only_seeded_stages() {
        let mut report = SeedReport::default();
        report.push(Stage::Roles, StageOutcome::AlreadyPopulated(3), Duration::ZERO);
        report.push(Stage::Users, StageOutcome::Seeded(24), Duration::ZERO);
        report.push(Stage::Students, StageOutcome::PreconditionUnmet, Duration::ZERO);

        assert_eq!(report.total_inserted(), 24);
        assert_eq!(report.seeded(Stage::Users), Some(24));
        assert_eq!(report.seeded(Stage::Roles), None);
        assert_eq!(
            report.outcome(Stage::Students),
            Some(StageOutcome::PreconditionUnmet)
        );
        assert!(!report.is_noop());
    }
}
