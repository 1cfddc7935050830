use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202506100001_create_roles::Migration),
            Box::new(migrations::m202506100002_create_users::Migration),
            Box::new(migrations::m202506100003_create_groups::Migration),
            Box::new(migrations::m202506100004_create_subjects::Migration),
            Box::new(migrations::m202506100005_create_semesters::Migration),
            Box::new(migrations::m202506100006_create_students::Migration),
            Box::new(migrations::m202506100007_create_teachers::Migration),
            Box::new(migrations::m202506100008_create_teacher_subject_group_assignments::Migration),
            Box::new(migrations::m202506100009_create_assignments::Migration),
            Box::new(migrations::m202506100010_create_attendances::Migration),
            Box::new(migrations::m202506100011_create_grades::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Database;

    #[tokio::test]
    async fn applies_every_migration_once() {
        let db = Database::connect("sqlite::memory:").await.unwrap();

        Migrator::up(&db, None).await.unwrap();
        let applied = Migrator::get_applied_migrations(&db).await.unwrap();
        assert_eq!(applied.len(), Migrator::migrations().len());

        // A second run has nothing left to do.
        Migrator::up(&db, None).await.unwrap();
        assert!(Migrator::get_pending_migrations(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn down_drops_everything() {
        let db = Database::connect("sqlite::memory:").await.unwrap();

        Migrator::up(&db, None).await.unwrap();
        Migrator::down(&db, None).await.unwrap();
        let pending = Migrator::get_pending_migrations(&db).await.unwrap();
        assert_eq!(pending.len(), Migrator::migrations().len());
    }
}
