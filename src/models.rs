use serde_json::{Map, Value};

/// A flat JSON document as held by a collection.
pub type Document = Map<String, Value>;

pub const ID: &str = "id";
pub const CREATED_AT: &str = "createdAt";
pub const UPDATED_AT: &str = "updatedAt";

const TEACHER_FIELDS: &[&str] = &[
    "name",
    "email",
    "phone",
    "department",
    "subject",
    "hireDate",
    "salary",
    "qualification",
    "experience",
];

const STUDENT_FIELDS: &[&str] = &[
    "name",
    "email",
    "phone",
    "grade",
    "section",
    "teacherId",
    "parentName",
    "parentPhone",
];

/// The record kinds addressable through the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Teacher,
    Student,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Teacher, Kind::Student];

    /// Maps the first path segment onto a kind.
    pub fn from_resource(segment: &str) -> Option<Kind> {
        match segment {
            "teachers" => Some(Kind::Teacher),
            "students" => Some(Kind::Student),
            _ => None,
        }
    }

    /// Name of the backing collection, also the plural response key.
    pub fn collection(self) -> &'static str {
        match self {
            Kind::Teacher => "teachers",
            Kind::Student => "students",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            Kind::Teacher => "teacher",
            Kind::Student => "student",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Kind::Teacher => "Teacher",
            Kind::Student => "Student",
        }
    }

    /// Client-writable fields. `id` and the timestamps are never in here.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Kind::Teacher => TEACHER_FIELDS,
            Kind::Student => STUDENT_FIELDS,
        }
    }
}
