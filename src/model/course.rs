use crate::model::UserId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub i64);

impl From<u32> for CourseId {
    fn from(id: u32) -> Self {
        Self(i64::from(id))
    }
}

impl Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a course taken by a user, with its grades.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Course`](#impl-ActorEntity-for-Course) for details on:
/// - Creation parameters ([`CourseCreate`])
/// - Update parameters ([`CourseUpdate`])
/// - List filtering ([`CourseFilter`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub first_grade: f64,
    pub second_grade: f64,
    pub final_grade: f64,
    /// Reference to a [`User`](crate::model::User). Unless user references are checked,
    /// the user may not exist. Deleting the user leaves this course in place.
    pub user_id: UserId,
}

impl Course {
    /// Creates a new Course instance.
    ///
    /// # Arguments
    /// * `id` - Identifier allocated by the course store
    /// * `params` - Name, grades and owning user
    pub fn new(id: CourseId, params: CourseCreate) -> Self {
        Self {
            id,
            name: params.name,
            first_grade: params.first_grade,
            second_grade: params.second_grade,
            final_grade: params.final_grade,
            user_id: params.user_id,
        }
    }
}

/// Payload for creating a course. Any `id` in the body is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseCreate {
    pub name: String,
    pub first_grade: f64,
    pub second_grade: f64,
    pub final_grade: f64,
    pub user_id: UserId,
}

impl CourseCreate {
    pub fn new(name: impl Into<String>, grades: [f64; 3], user_id: UserId) -> Self {
        let [first_grade, second_grade, final_grade] = grades;
        Self {
            name: name.into(),
            first_grade,
            second_grade,
            final_grade,
            user_id,
        }
    }
}

/// Full replacement payload for a course. The path id wins over any `id` in the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseUpdate {
    pub name: String,
    pub first_grade: f64,
    pub second_grade: f64,
    pub final_grade: f64,
    pub user_id: UserId,
}

/// Selects the courses of one user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourseFilter {
    pub user_id: UserId,
}
