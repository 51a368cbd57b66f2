//! # HTTP API
//!
//! JSON routes over the two stores plus the demo reset:
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET, POST | `/users` | [`users::list_users`], [`users::create_user`] |
//! | GET, PUT, DELETE | `/users/{user_id}` | [`users::get_user`], [`users::update_user`], [`users::delete_user`] |
//! | GET, POST | `/courses` | [`courses::list_courses`], [`courses::create_course`] |
//! | GET | `/courses/{user_id}` | [`courses::courses_for_user`] |
//! | PUT, DELETE | `/courses/{course_id}` | [`courses::update_course`], [`courses::delete_course`] |
//! | POST | `/reset-demo-data` | [`demo::reset_demo_data`] |
//!
//! Handlers only translate between HTTP and the typed clients; the store semantics live
//! in the actors. Malformed bodies and non-integer ids are rejected by the extractors
//! before a handler runs.
//!
//! Every route except the reset runs inside [`DemoData::enter`], so a reset never
//! interleaves with other requests.

pub mod courses;
pub mod demo;
pub mod error;
pub mod users;

pub use error::ApiError;

use crate::clients::{CourseClient, UserClient};
use crate::config::NotFoundMode;
use crate::course_actor::CourseError;
use crate::lifecycle::{DemoData, RosterSystem};
use crate::user_actor::UserError;
use axum::extract::{Request, State};
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub users: UserClient,
    pub courses: CourseClient,
    pub demo: DemoData,
    not_found: StatusCode,
}

impl AppState {
    pub fn new(system: &RosterSystem, not_found: NotFoundMode) -> Self {
        Self {
            users: system.user_client.clone(),
            courses: system.course_client.clone(),
            demo: system.demo.clone(),
            not_found: not_found.status_code(),
        }
    }

    pub fn not_found(&self, entity: &'static str) -> ApiError {
        ApiError::NotFound {
            entity,
            status: self.not_found,
        }
    }

    pub fn user_error(&self, e: UserError) -> ApiError {
        match e {
            UserError::NotFound(_) => self.not_found("User"),
            UserError::ActorCommunicationError(message) => ApiError::Internal(message),
        }
    }

    pub fn course_error(&self, e: CourseError) -> ApiError {
        match e {
            CourseError::NotFound(_) => self.not_found("Course"),
            CourseError::UnknownUser(_) => self.not_found("User"),
            CourseError::ActorCommunicationError(message) => ApiError::Internal(message),
        }
    }
}

/// Body of a delete answer: `{"status": "deleted"}`.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub status: &'static str,
}

impl Deleted {
    pub fn new() -> Self {
        Self { status: "deleted" }
    }
}

impl Default for Deleted {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{user_id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route(
            "/courses",
            get(courses::list_courses).post(courses::create_course),
        )
        // GET takes a user id, PUT and DELETE a course id.
        .route(
            "/courses/{id}",
            get(courses::courses_for_user)
                .put(courses::update_course)
                .delete(courses::delete_course),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), enter_stores))
        // Takes the gate exclusively itself.
        .route("/reset-demo-data", post(demo::reset_demo_data))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn enter_stores(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let _shared = state.demo.enter().await;
    next.run(request).await
}

/// CORS for the given frontend origins: any method, any header, credentials allowed.
///
/// Methods and headers are mirrored from the preflight request since wildcards are not
/// allowed together with credentials.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, axum::http::header::InvalidHeaderValue> {
    let origins = origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
