//! Service configuration.
//!
//! Every setting is a command-line flag with an environment variable fallback, so the
//! service runs with no arguments at all during development.

use crate::lifecycle::StoreOptions;
use axum::http::StatusCode;
use clap::{Parser, ValueEnum};
use std::net::SocketAddr;

/// How a lookup or update of an unknown id is answered.
///
/// The body is `{"error": "<Entity> not found"}` in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NotFoundMode {
    /// HTTP 200 with the error body.
    Payload,
    /// HTTP 404 with the error body.
    Status,
}

impl NotFoundMode {
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::Payload => StatusCode::OK,
            Self::Status => StatusCode::NOT_FOUND,
        }
    }
}

/// Command-line arguments for the gradebook service.
#[derive(Debug, Clone, Parser)]
#[command(name = "gradebook-api", version, about = "In-memory users and courses API with demo data")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "GRADEBOOK_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Frontend origins allowed to make credentialed cross-origin calls
    #[arg(
        long = "allowed-origin",
        env = "GRADEBOOK_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values = ["http://localhost:3000", "http://localhost:3001"]
    )]
    pub allowed_origins: Vec<String>,

    /// Status used for "not found" answers
    #[arg(long = "not-found", env = "GRADEBOOK_NOT_FOUND", value_enum, default_value_t = NotFoundMode::Payload)]
    pub not_found: NotFoundMode,

    /// Reject courses whose user_id does not name an existing user
    #[arg(long, env = "GRADEBOOK_CHECK_USER_REFS")]
    pub check_user_refs: bool,

    /// Request queue size of each store
    #[arg(long, env = "GRADEBOOK_CHANNEL_CAPACITY", default_value_t = 32)]
    pub channel_capacity: usize,
}

impl Config {
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            channel_capacity: self.channel_capacity,
            check_user_refs: self.check_user_refs,
        }
    }
}
