use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// The teaching-assignment hub: one teacher teaching one subject to one group
/// in one semester. Assignments, attendances and grades all hang off a row
/// of this table. The 4-tuple is unique.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "teacher_subject_group_assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub teacher_id: i32,
    pub subject_id: i32,
    pub group_id: i32,
    pub semester_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The uniqueness key of a teaching assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey {
    pub teacher_id: i32,
    pub subject_id: i32,
    pub group_id: i32,
    pub semester_id: i32,
}

impl Model {
    pub fn key(&self) -> SlotKey {
        SlotKey {
            teacher_id: self.teacher_id,
            subject_id: self.subject_id,
            group_id: self.group_id,
            semester_id: self.semester_id,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::TeacherId",
        to = "super::teacher::Column::Id"
    )]
    Teacher,
    #[sea_orm(
        belongs_to = "super::subject::Entity",
        from = "Column::SubjectId",
        to = "super::subject::Column::Id"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::group::Entity",
        from = "Column::GroupId",
        to = "super::group::Column::Id"
    )]
    Group,
    #[sea_orm(
        belongs_to = "super::semester::Entity",
        from = "Column::SemesterId",
        to = "super::semester::Column::Id"
    )]
    Semester,
    #[sea_orm(has_many = "super::assignment::Entity")]
    Assignments,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendances,
    #[sea_orm(has_many = "super::grade::Entity")]
    Grades,
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::semester::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Semester.def()
    }
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendances.def()
    }
}

impl Related<super::grade::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grades.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::{ActiveModel, SlotKey};
    use crate::models::{group, role, semester, subject, teacher, user};
    use crate::test_utils::setup_test_db;
    use chrono::{Duration, Utc};
    use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection};

    async fn seed_refs(db: &DatabaseConnection) -> SlotKey {
        let now = Utc::now();
        let role = role::ActiveModel {
            name: Set("Teacher".into()),
            description: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
        let user = user::ActiveModel {
            username: Set("tsmith".into()),
            password_hash: Set("x".into()),
            first_name: Set("Tom".into()),
            last_name: Set("Smith".into()),
            email: Set(None),
            role_id: Set(role.id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
        let teacher = teacher::ActiveModel {
            user_id: Set(user.id),
            department: Set(None),
            position: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
        let subject = subject::ActiveModel {
            name: Set("Algebra".into()),
            code: Set(None),
            description: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
        let group = group::ActiveModel {
            name: Set("Group ABC".into()),
            code: Set("1234".into()),
            description: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
        let semester = semester::ActiveModel {
            name: Set("Spring 2025".into()),
            code: Set(Some("2025-SP".into())),
            start_date: Set(now - Duration::days(30)),
            end_date: Set(now + Duration::days(30)),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();

        SlotKey {
            teacher_id: teacher.id,
            subject_id: subject.id,
            group_id: group.id,
            semester_id: semester.id,
        }
    }

    fn slot(key: SlotKey) -> ActiveModel {
        ActiveModel {
            teacher_id: Set(key.teacher_id),
            subject_id: Set(key.subject_id),
            group_id: Set(key.group_id),
            semester_id: Set(key.semester_id),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn duplicate_slot_tuple_is_rejected() {
        let db = setup_test_db().await;
        let key = seed_refs(&db).await;

        let first = slot(key).insert(&db).await.unwrap();
        assert_eq!(first.key(), key);
        assert!(slot(key).insert(&db).await.is_err());
    }

    #[tokio::test]
    async fn slot_with_unknown_teacher_is_rejected() {
        let db = setup_test_db().await;
        let key = seed_refs(&db).await;

        let dangling = SlotKey {
            teacher_id: key.teacher_id + 100,
            ..key
        };
        assert!(slot(dangling).insert(&db).await.is_err());
    }
}
