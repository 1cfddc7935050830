pub mod assignment;
pub mod attendance;
pub mod grade;
pub mod group;
pub mod role;
pub mod semester;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod teacher_subject_group_assignment;
pub mod user;

pub use assignment::Entity as Assignment;
pub use attendance::Entity as Attendance;
pub use grade::Entity as Grade;
pub use group::Entity as Group;
pub use role::Entity as Role;
pub use semester::Entity as Semester;
pub use student::Entity as Student;
pub use subject::Entity as Subject;
pub use teacher::Entity as Teacher;
pub use teacher_subject_group_assignment::Entity as TeacherSubjectGroupAssignment;
pub use user::Entity as User;
