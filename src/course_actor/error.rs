//! Error types for the Course actor.

use crate::model::UserId;
use thiserror::Error;

/// Errors that can occur during course operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CourseError {
    /// The requested course was not found.
    #[error("Course not found: {0}")]
    NotFound(String),

    /// The course references a user that does not exist.
    /// Only raised when user references are checked.
    #[error("Unknown user: {0}")]
    UnknownUser(UserId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
