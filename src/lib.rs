//! # Gradebook API
//!
//! > **A small in-memory users-and-courses backend for a web frontend.**
//!
//! The service keeps two stores, Users and Courses, entirely in memory and exposes CRUD
//! over JSON/HTTP. A fixed demo dataset (5 students, 20 graded courses) is loaded at
//! startup and can be restored at any time through `POST /reset-demo-data`.
//!
//! ## 🏗️ Design
//!
//! Each store is a **resource actor**: a Tokio task that owns its records and id counter
//! and handles requests one at a time. Handlers never touch the records directly; they
//! talk to the stores through cheap, cloneable typed clients. This gives every store a
//! single serialization point without any lock around the data.
//!
//! - **Users** get a derived username, `first.last.<timestamp>`, at creation.
//! - **Courses** point at users through an unchecked `user_id`. Deleting a user does not
//!   touch its courses.
//! - **Updates** are full replacements. The id never changes, and a user's username is
//!   kept unless the update supplies a new one.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`ResourceActor`](framework::ResourceActor) and the
//! [`ActorEntity`](framework::ActorEntity) trait the record types implement.
//!
//! ### 2. The Records ([`model`], [`user_actor`], [`course_actor`])
//! Data types, payloads and the per-store behavior (username derivation, search,
//! course filtering, optional user reference checks).
//!
//! ### 3. The Interface ([`clients`])
//! [`UserClient`](clients::UserClient) and [`CourseClient`](clients::CourseClient) hide
//! the message passing behind async methods with per-store error types.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`RosterSystem`](lifecycle::RosterSystem) starts and stops the actors;
//! [`DemoData`](lifecycle::DemoData) seeds and resets them.
//!
//! ### 5. The Edge ([`api`], [`config`])
//! The axum router, error bodies, CORS, and command-line/environment configuration.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! curl 'http://127.0.0.1:8000/users?search=alice'
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod course_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod user_actor;
