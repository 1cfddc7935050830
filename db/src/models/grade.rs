use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A mark received by a student within a teaching assignment.
///
/// `subject_id`, `semester_id` and `teacher_id` duplicate what the slot
/// already references so reports can filter without joining through it.
/// (student, assignment) is unique whenever `assignment_id` is set.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "grades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_id: i32,
    pub teacher_subject_group_assignment_id: i32,
    pub assignment_id: Option<i32>,
    pub subject_id: Option<i32>,
    pub semester_id: Option<i32>,
    pub teacher_id: Option<i32>,
    pub value: f64,
    pub control_type: String,
    pub date_received: DateTime<Utc>,
    pub status: GradeStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
#[strum(ascii_case_insensitive)]
pub enum GradeStatus {
    #[sea_orm(string_value = "Passed")]
    Passed,
    #[sea_orm(string_value = "Failed")]
    Failed,
    #[sea_orm(string_value = "Pending")]
    Pending,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::teacher_subject_group_assignment::Entity",
        from = "Column::TeacherSubjectGroupAssignmentId",
        to = "super::teacher_subject_group_assignment::Column::Id"
    )]
    TeachingAssignment,
    #[sea_orm(
        belongs_to = "super::assignment::Entity",
        from = "Column::AssignmentId",
        to = "super::assignment::Column::Id"
    )]
    Assignment,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::teacher_subject_group_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeachingAssignment.def()
    }
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
