//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the whole service.
//!
//! The format is compact and hides the module prefix (`with_target(false)`): store logs
//! carry an `entity_type` field instead, and HTTP logs come from `tower-http`'s trace
//! layer.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown and final store size
//! - **Store Operations**: Create, Get, List, Update, Delete, Clear
//! - **Client Calls**: `#[instrument]` spans on the typed clients
//! - **HTTP Requests**: one span per request with method, path and status
//!
//! ## Usage
//!
//! ```bash
//! # Store mutations and request summaries
//! RUST_LOG=info cargo run
//!
//! # Full payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the store actors
//! RUST_LOG=gradebook_api::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info`, seeding and one create look like:
//!
//! ```text
//! INFO Actor started entity_type="User"
//! INFO seed: Created entity_type="User" id=1 size=1
//! ...
//! INFO seed: Demo data initialized users=5 courses=20
//! INFO request: Created entity_type="User" id=6 size=6
//! ```

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "seed:Created")
        .init();
}
