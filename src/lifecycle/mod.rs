//! # System Lifecycle & Orchestration
//!
//! This module starts, wires and stops the two stores, and owns the demo data that
//! bootstraps them.
//!
//! ## The RosterSystem Pattern
//!
//! [`RosterSystem`] is the "conductor":
//!
//! 1. **Actor Creation** - instantiate both actors and their clients
//! 2. **Dependency Injection** - wire them via context injection at `run()` time
//! 3. **Demo Data** - expose [`DemoData`] for startup seeding and the reset endpoint
//! 4. **Graceful Shutdown** - drop the clients, then await the actor tasks
//!
//! ## Dependency Injection via Context
//!
//! Stores are constructed without dependencies and receive them when started:
//!
//! ```rust,ignore
//! impl ActorEntity for User {
//!     type Context = UsernameClock;
//! }
//!
//! // Holds a UserClient only when course owners are checked
//! impl ActorEntity for Course {
//!     type Context = CourseContext;
//! }
//! ```
//!
//! The dependency graph is acyclic (courses may read users, never the reverse), so
//! closing the channels is enough to shut everything down.
//!
//! ## Observability
//!
//! See [`tracing`](self::tracing) for the logging setup.

pub mod demo;
pub mod roster_system;
pub mod tracing;

pub use demo::*;
pub use roster_system::*;
pub use self::tracing::setup_tracing;
