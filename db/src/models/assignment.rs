use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Coursework set within a teaching assignment (`assignments` table).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Foreign key to `teacher_subject_group_assignments`.
    pub teacher_subject_group_assignment_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub assignment_type: AssignmentType,
    pub max_score: f64,
    pub due_date: DateTime<Utc>,
    pub submission_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(100))")]
#[strum(ascii_case_insensitive)]
pub enum AssignmentType {
    #[sea_orm(string_value = "Quiz")]
    Quiz,
    #[sea_orm(string_value = "Homework")]
    Homework,
    #[sea_orm(string_value = "Project")]
    Project,
    #[sea_orm(string_value = "Exam")]
    Exam,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teacher_subject_group_assignment::Entity",
        from = "Column::TeacherSubjectGroupAssignmentId",
        to = "super::teacher_subject_group_assignment::Column::Id"
    )]
    TeachingAssignment,
    #[sea_orm(has_many = "super::grade::Entity")]
    Grades,
}

impl Related<super::teacher_subject_group_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeachingAssignment.def()
    }
}

impl Related<super::grade::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grades.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
