//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every record type (User, Course) implements to be
//! managed by the generic [`ResourceActor`](crate::framework::ResourceActor). It names the
//! associated types for ids, payloads, list queries, context and errors, and provides the
//! lifecycle hooks (`on_create`, `on_update`).
//!
//! # Architecture Note
//! The store logic (id allocation, ordering, lookup, replacement) lives in the actor and is
//! written *once*. Each entity only decides how it is built from a payload, how an update
//! rewrites it, and which records a list query selects.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by a `ResourceActor`.
///
/// # Async & Context
/// The hooks are `#[async_trait]` so they can call other actors. The `Context` type is
/// injected into every hook when the actor is started with `run(context)`, which lets a
/// store receive its dependencies after construction ("late binding").
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The identifier for this entity. Built from the actor's `u32` counter.
    type Id: Eq + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing record.
    type Update: Send + Sync + Debug;

    /// Filter applied by `List` requests.
    type Query: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per store, not one per operation: clients deal with a single error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The record's identifier.
    fn id(&self) -> &Self::Id;

    /// Construct the full record from the allocated id and the payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this record is selected by `query`.
    fn matches(&self, query: &Self::Query) -> bool;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the record is built and before it is stored.
    /// An error here aborts the create; the allocated id is still consumed.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received for this record.
    ///
    /// Implementations must leave `self` untouched when they return an error.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;
}
