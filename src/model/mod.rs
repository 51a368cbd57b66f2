//! Pure data structures (records and DTOs) managed through the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod course;
pub mod user;

pub use course::*;
pub use user::*;
