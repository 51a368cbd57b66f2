//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod course_client;
pub mod user_client;

pub use actor_client::ActorClient;
pub use course_client::*;
pub use user_client::*;
