use crate::config::SeedConfig;
use crate::error::SeedError;
use crate::report::{SeedReport, Stage, StageOutcome};
use crate::seeds::{self, SeedContext};
use rand::rngs::StdRng;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::time::Instant;
use tracing::{debug, info};

/// Populates empty tables in dependency order.
pub struct Seeder {
    config: SeedConfig,
}

impl Default for Seeder {
    fn default() -> Self {
        Self::new(SeedConfig::default())
    }
}

impl Seeder {
    pub fn new(config: SeedConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// Runs every stage. Each stage commits its own transaction before the
    /// next one starts, so a failure leaves earlier stages in place.
    pub async fn seed(&self, db: &DatabaseConnection) -> Result<SeedReport, SeedError> {
        let mut rng = self.config.rng();
        let mut ctx = SeedContext::default();
        let mut report = SeedReport::default();

        for stage in Stage::ordered() {
            let start = Instant::now();
            let txn = db.begin().await?;
            let outcome = self.run_stage(stage, &txn, &mut ctx, &mut rng).await?;
            txn.commit().await?;
            let elapsed = start.elapsed();

            match outcome {
                StageOutcome::Seeded(rows) => info!(%stage, rows, ?elapsed, "stage seeded"),
                StageOutcome::AlreadyPopulated(rows) => {
                    debug!(%stage, rows, "table already populated, skipped")
                }
                StageOutcome::PreconditionUnmet => {
                    info!(%stage, "source tables empty, nothing to seed")
                }
            }
            report.push(stage, outcome, elapsed);
        }

        info!(inserted = report.total_inserted(), "seeding finished");
        Ok(report)
    }

    async fn run_stage(
        &self,
        stage: Stage,
        txn: &DatabaseTransaction,
        ctx: &mut SeedContext,
        rng: &mut StdRng,
    ) -> Result<StageOutcome, SeedError> {
        let cfg = &self.config;
        match stage {
            Stage::Roles => seeds::role::seed(txn, ctx).await,
            Stage::Users => seeds::user::seed(txn, ctx, cfg, rng).await,
            Stage::Groups => seeds::group::seed(txn, ctx, cfg, rng).await,
            Stage::Subjects => seeds::subject::seed(txn, ctx, cfg, rng).await,
            Stage::Semesters => seeds::semester::seed(txn, ctx).await,
            Stage::Students => seeds::student::seed(txn, ctx, rng).await,
            Stage::Teachers => seeds::teacher::seed(txn, ctx, rng).await,
            Stage::TeachingAssignments => seeds::teaching_assignment::seed(txn, ctx, cfg, rng).await,
            Stage::Assignments => seeds::assignment::seed(txn, ctx, cfg, rng).await,
            Stage::Attendances => seeds::attendance::seed(txn, ctx, cfg, rng).await,
            Stage::Grades => seeds::grade::seed(txn, ctx, cfg, rng).await,
        }
    }
}
