pub mod m202506100001_create_roles;
pub mod m202506100002_create_users;
pub mod m202506100003_create_groups;
pub mod m202506100004_create_subjects;
pub mod m202506100005_create_semesters;
pub mod m202506100006_create_students;
pub mod m202506100007_create_teachers;
pub mod m202506100008_create_teacher_subject_group_assignments;
pub mod m202506100009_create_assignments;
pub mod m202506100010_create_attendances;
pub mod m202506100011_create_grades;
