use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202506100011_create_grades"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("grades"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("student_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("teacher_subject_group_assignment_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("assignment_id")).integer())
                    .col(ColumnDef::new(Alias::new("subject_id")).integer())
                    .col(ColumnDef::new(Alias::new("semester_id")).integer())
                    .col(ColumnDef::new(Alias::new("teacher_id")).integer())
                    .col(ColumnDef::new(Alias::new("value")).double().not_null())
                    .col(ColumnDef::new(Alias::new("control_type")).string_len(50).not_null())
                    .col(ColumnDef::new(Alias::new("date_received")).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Alias::new("status")).string_len(50).not_null())
                    .col(ColumnDef::new(Alias::new("notes")).string_len(500))
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp_with_time_zone().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .col(ColumnDef::new(Alias::new("updated_at")).timestamp_with_time_zone().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_grades_student")
                            .from(Alias::new("grades"), Alias::new("student_id"))
                            .to(Alias::new("students"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_grades_tsga")
                            .from(Alias::new("grades"), Alias::new("teacher_subject_group_assignment_id"))
                            .to(Alias::new("teacher_subject_group_assignments"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_grades_assignment")
                            .from(Alias::new("grades"), Alias::new("assignment_id"))
                            .to(Alias::new("assignments"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_grades_subject")
                            .from(Alias::new("grades"), Alias::new("subject_id"))
                            .to(Alias::new("subjects"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_grades_semester")
                            .from(Alias::new("grades"), Alias::new("semester_id"))
                            .to(Alias::new("semesters"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_grades_teacher")
                            .from(Alias::new("grades"), Alias::new("teacher_id"))
                            .to(Alias::new("teachers"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // NULL assignment ids never collide, so only linked grades are constrained.
        manager
            .create_index(
                Index::create()
                    .name("ux_grades_student_assignment")
                    .table(Alias::new("grades"))
                    .col(Alias::new("student_id"))
                    .col(Alias::new("assignment_id"))
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("grades")).to_owned())
            .await
    }
}
