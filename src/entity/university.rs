//! University schema: students, courses, enrollments, professors and
//! course assignments.

use super::{GenContext, Record};
use crate::fake::{years_before, FakeData};
use crate::value::SqlValue;
use chrono::NaiveDate;
use rand::Rng;
use serde_json::json;

pub const GRADES: &[&str] = &["A", "B", "C", "D", "F"];
pub const SEMESTERS: &[&str] = &["Fall", "Spring", "Summer"];

pub const MAJOR_MAX_CHARS: usize = 30;
pub const DEPARTMENT_MAX_CHARS: usize = 20;
pub const SYLLABUS_MAX_CHARS: usize = 100;

#[derive(Debug, Clone)]
pub struct Student {
    pub student_id: String,
    pub full_name: String,
    pub major: String,
    pub email: String,
    pub gpa: f64,
    pub admission_year: i64,
    pub birthdate: NaiveDate,
    pub hobby: String,
}

impl Record for Student {
    const TABLE: &'static str = "Students";
    const COLUMNS: &'static [&'static str] = &[
        "student_id",
        "full_name",
        "major",
        "email",
        "gpa",
        "admission_year",
        "birthdate",
        "metadata",
    ];

    fn fake<R: Rng>(fake: &mut FakeData<R>, ctx: &GenContext) -> Self {
        Self {
            student_id: fake.uuid_v4(),
            full_name: fake.full_name(),
            major: fake.job_title(MAJOR_MAX_CHARS),
            email: fake.email(),
            gpa: fake.decimal(2.0, 4.0),
            admission_year: fake.int_range(2018, 2025),
            birthdate: fake.date_of_birth(ctx.reference_date, 17, 30),
            hobby: fake.word(),
        }
    }

    fn values(&self) -> Vec<SqlValue> {
        let metadata = json!({ "hobby": self.hobby });
        vec![
            SqlValue::string(&self.student_id),
            SqlValue::string(&self.full_name),
            SqlValue::string(&self.major),
            SqlValue::string(&self.email),
            SqlValue::Decimal(self.gpa),
            SqlValue::Int(self.admission_year),
            SqlValue::String(self.birthdate.to_string()),
            SqlValue::String(metadata.to_string()),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Course {
    pub course_id: String,
    pub course_name: String,
    pub credits: i64,
    pub syllabus: String,
    pub outline_unit: String,
}

impl Record for Course {
    const TABLE: &'static str = "Courses";
    const COLUMNS: &'static [&'static str] = &[
        "course_id",
        "course_name",
        "credits",
        "syllabus",
        "course_outline",
    ];

    fn fake<R: Rng>(fake: &mut FakeData<R>, _ctx: &GenContext) -> Self {
        let course_id = fake.course_code();
        let sentence = fake.sentence(3..=8);
        Self {
            course_id,
            course_name: sentence.trim_end_matches('.').to_string(),
            credits: fake.int_range(1, 5),
            syllabus: fake.text(SYLLABUS_MAX_CHARS),
            outline_unit: fake.word(),
        }
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::string(&self.course_id),
            SqlValue::string(&self.course_name),
            SqlValue::Int(self.credits),
            SqlValue::string(&self.syllabus),
            SqlValue::String(format!(
                "<outline><unit>{}</unit></outline>",
                self.outline_unit
            )),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Enrollment {
    /// Fresh UUID, not drawn from generated students
    pub student_id: String,
    pub course_id: String,
    pub grade: &'static str,
    pub semester: &'static str,
    pub attendance: f64,
}

impl Record for Enrollment {
    const TABLE: &'static str = "Enrollments";
    const COLUMNS: &'static [&'static str] =
        &["student_id", "course_id", "grade", "semester", "attendance"];

    fn fake<R: Rng>(fake: &mut FakeData<R>, _ctx: &GenContext) -> Self {
        Self {
            student_id: fake.uuid_v4(),
            course_id: fake.course_code(),
            grade: *fake.pick(GRADES),
            semester: *fake.pick(SEMESTERS),
            attendance: fake.decimal(50.0, 100.0),
        }
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::string(&self.student_id),
            SqlValue::string(&self.course_id),
            SqlValue::from(self.grade),
            SqlValue::from(self.semester),
            SqlValue::Decimal(self.attendance),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Professor {
    pub full_name: String,
    pub department: String,
    pub salary: f64,
    pub join_date: NaiveDate,
    pub experience: i64,
}

impl Record for Professor {
    const TABLE: &'static str = "Professors";
    const COLUMNS: &'static [&'static str] =
        &["full_name", "department", "salary", "join_date", "profile"];

    fn fake<R: Rng>(fake: &mut FakeData<R>, ctx: &GenContext) -> Self {
        let today = ctx.reference_date;
        Self {
            full_name: fake.full_name(),
            department: fake.job_title(DEPARTMENT_MAX_CHARS),
            salary: fake.decimal(30000.0, 150000.0),
            join_date: fake.date_between(years_before(today, 10), today),
            experience: fake.int_range(1, 30),
        }
    }

    fn values(&self) -> Vec<SqlValue> {
        let profile = json!({ "experience": self.experience });
        vec![
            SqlValue::string(&self.full_name),
            SqlValue::string(&self.department),
            SqlValue::Decimal(self.salary),
            SqlValue::String(self.join_date.to_string()),
            SqlValue::String(profile.to_string()),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct CourseAssignment {
    pub prof_id: i64,
    pub course_id: String,
    pub semester: &'static str,
    pub is_active: i64,
}

impl Record for CourseAssignment {
    const TABLE: &'static str = "CourseAssignments";
    const COLUMNS: &'static [&'static str] = &["prof_id", "course_id", "semester", "is_active"];

    fn fake<R: Rng>(fake: &mut FakeData<R>, _ctx: &GenContext) -> Self {
        Self {
            prof_id: fake.int_range(1, 100),
            course_id: fake.course_code(),
            semester: *fake.pick(SEMESTERS),
            is_active: fake.flag(),
        }
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Int(self.prof_id),
            SqlValue::string(&self.course_id),
            SqlValue::from(self.semester),
            SqlValue::Int(self.is_active),
        ]
    }
}
