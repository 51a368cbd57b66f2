//! # Course Actor
//!
//! This module implements the Course store: course records with grades, each pointing at a
//! user through `user_id`.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Course`]
//! - [`error`] - [`CourseError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## User references
//!
//! `user_id` is a plain tag. By default the store never looks at the user store, so
//! courses may point at users that do not exist (yet, or anymore). Starting the actor
//! with [`CourseContext::checked`] makes create and update verify the user first.
//!
//! ```rust,ignore
//! let (course_actor, course_client) = course_actor::new(32);
//! tokio::spawn(course_actor.run(CourseContext::checked(user_client.clone())));
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::{CourseClient, UserClient};
use crate::framework::ResourceActor;
use crate::model::Course;

/// Dependencies injected into the course store.
#[derive(Clone, Default)]
pub struct CourseContext {
    users: Option<UserClient>,
}

impl CourseContext {
    /// `user_id` is stored as given.
    pub fn unchecked() -> Self {
        Self { users: None }
    }

    /// `user_id` must name an existing user on create and update.
    pub fn checked(users: UserClient) -> Self {
        Self { users: Some(users) }
    }
}

/// Creates a new Course actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Course>, CourseClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = CourseClient::new(generic_client);

    (actor, client)
}
