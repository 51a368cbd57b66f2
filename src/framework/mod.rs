//! Generic actor framework for in-memory record stores.
//!
//! This module provides the building blocks for type-safe stores that own their records
//! in a dedicated task and expose CRUD operations over message passing.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be managed by a store
//! - [`ResourceActor`] - Generic actor that owns the records and the id counter
//! - [`ResourceClient`] - Typed, cloneable handle for sending requests to an actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
