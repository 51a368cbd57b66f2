//! # Demo Data
//!
//! Fixed sample data for a fresh service: five students and four graded courses each.
//! The data goes through the normal create path of each store, so ids and usernames are
//! allocated exactly as for records created over HTTP.

use crate::clients::{ActorClient, CourseClient, UserClient};
use crate::course_actor::CourseError;
use crate::model::{CourseCreate, UserCreate, UserId};
use crate::user_actor::UserError;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::{info, instrument};

/// (first name, last name, email, phone, country, city)
const DEMO_USERS: [(&str, &str, &str, &str, &str, &str); 5] = [
    ("Alice", "Johnson", "alice.johnson@university.edu", "+1-555-0101", "USA", "Boston"),
    ("Muhammad", "Ahmad", "muhammad.ahmad@university.edu", "+1-555-0102", "Pakistan", "Karachi"),
    ("Emma", "Williams", "emma.williams@university.edu", "+1-555-0103", "Canada", "Toronto"),
    ("Raj", "Patel", "raj.patel@university.edu", "+1-555-0104", "India", "Mumbai"),
    ("Sofia", "Garcia", "sofia.garcia@university.edu", "+1-555-0105", "Mexico", "Mexico City"),
];

/// (owner, course name, [first, second, final])
const DEMO_COURSES: [(i64, &str, [f64; 3]); 20] = [
    // Computer science
    (1, "Data Structures & Algorithms", [92.0, 88.0, 90.0]),
    (1, "Database Systems", [85.0, 91.0, 88.0]),
    (1, "Software Engineering", [94.0, 96.0, 95.0]),
    (1, "Machine Learning", [78.0, 82.0, 80.0]),
    // Engineering
    (2, "Calculus III", [87.0, 84.0, 85.0]),
    (2, "Physics II", [91.0, 89.0, 90.0]),
    (2, "Engineering Mechanics", [79.0, 83.0, 81.0]),
    (2, "Materials Science", [88.0, 92.0, 90.0]),
    // Business
    (3, "Financial Accounting", [93.0, 91.0, 92.0]),
    (3, "Marketing Management", [86.0, 88.0, 87.0]),
    (3, "Operations Research", [82.0, 85.0, 83.0]),
    (3, "Business Strategy", [89.0, 94.0, 91.0]),
    // Medicine
    (4, "Anatomy & Physiology", [88.0, 92.0, 90.0]),
    (4, "Biochemistry", [84.0, 86.0, 85.0]),
    (4, "Pathology", [91.0, 89.0, 90.0]),
    (4, "Pharmacology", [87.0, 90.0, 88.0]),
    // Arts
    (5, "Art History", [95.0, 93.0, 94.0]),
    (5, "Digital Design", [89.0, 91.0, 90.0]),
    (5, "Creative Writing", [92.0, 88.0, 90.0]),
    (5, "Philosophy of Art", [86.0, 84.0, 85.0]),
];

/// The demo user payloads, in creation order.
pub fn demo_users() -> Vec<UserCreate> {
    DEMO_USERS
        .iter()
        .map(|&(first, last, email, phone, country, city)| UserCreate {
            first_name: first.to_string(),
            last_name: last.to_string(),
            phone: phone.to_string(),
            country: country.to_string(),
            city: city.to_string(),
            email: email.to_string(),
        })
        .collect()
}

/// The demo course payloads, in creation order. Owners are the ids the demo users get
/// in a freshly cleared user store.
pub fn demo_courses() -> Vec<CourseCreate> {
    DEMO_COURSES
        .iter()
        .map(|&(owner, name, grades)| CourseCreate::new(name, grades, UserId(owner)))
        .collect()
}

/// Errors raised while seeding or resetting.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DemoError {
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Course(#[from] CourseError),
}

/// Store sizes after a seed or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoCounts {
    pub users: usize,
    pub courses: usize,
}

/// Seeds and resets both stores.
///
/// Seed and reset span two actors, so they hold the write half of a gate for their
/// whole duration. Store traffic that must not interleave with them (every HTTP CRUD
/// request) holds the read half through [`DemoData::enter`].
#[derive(Clone)]
pub struct DemoData {
    users: UserClient,
    courses: CourseClient,
    gate: Arc<RwLock<()>>,
}

impl DemoData {
    pub fn new(users: UserClient, courses: CourseClient) -> Self {
        Self {
            users,
            courses,
            gate: Arc::new(RwLock::new(())),
        }
    }

    /// Shared access to the stores. Seed and reset wait until every holder is gone,
    /// and nothing enters while they run.
    pub async fn enter(&self) -> RwLockReadGuard<'_, ()> {
        self.gate.read().await
    }

    /// Inserts the demo data unless either store already holds records.
    #[instrument(skip(self))]
    pub async fn seed(&self) -> Result<DemoCounts, DemoError> {
        let _exclusive = self.gate.write().await;
        let existing = self.counts().await?;
        if existing.users > 0 || existing.courses > 0 {
            info!(
                users = existing.users,
                courses = existing.courses,
                "Stores not empty, skipping demo data"
            );
            return Ok(existing);
        }
        self.insert_demo().await
    }

    /// Clears both stores, rewinds both id counters, then inserts the demo data.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<DemoCounts, DemoError> {
        let _exclusive = self.gate.write().await;
        self.users.clear().await?;
        self.courses.clear().await?;
        info!("Stores cleared");
        self.insert_demo().await
    }

    async fn insert_demo(&self) -> Result<DemoCounts, DemoError> {
        for params in demo_users() {
            self.users.create_user(params).await?;
        }
        for params in demo_courses() {
            self.courses.create_course(params).await?;
        }

        let counts = self.counts().await?;
        info!(users = counts.users, courses = counts.courses, "Demo data initialized");
        Ok(counts)
    }

    async fn counts(&self) -> Result<DemoCounts, DemoError> {
        Ok(DemoCounts {
            users: self.users.count().await?,
            courses: self.courses.count().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_four_courses_per_demo_user() {
        let users = demo_users();
        let courses = demo_courses();
        assert_eq!(users.len(), 5);
        assert_eq!(courses.len(), 20);

        let mut per_user: HashMap<UserId, usize> = HashMap::new();
        for course in &courses {
            *per_user.entry(course.user_id).or_default() += 1;
        }
        for id in 1..=5 {
            assert_eq!(per_user[&UserId(id)], 4);
        }
    }

    #[test]
    fn test_demo_user_fields() {
        let sofia = &demo_users()[4];
        assert_eq!(sofia.first_name, "Sofia");
        assert_eq!(sofia.city, "Mexico City");
        assert_eq!(sofia.phone, "+1-555-0105");
    }
}
