//! `/courses` handlers.

use super::{ApiError, AppState, Deleted};
use crate::clients::ActorClient;
use crate::model::{Course, CourseCreate, CourseId, CourseUpdate, UserId};
use axum::extract::{Path, State};
use axum::Json;

/// `GET /courses`
pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, ApiError> {
    let courses = state
        .courses
        .list_courses()
        .await
        .map_err(|e| state.course_error(e))?;
    Ok(Json(courses))
}

/// `GET /courses/{user_id}` - empty for users without courses, known or not.
pub async fn courses_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Vec<Course>>, ApiError> {
    let courses = state
        .courses
        .courses_for_user(user_id)
        .await
        .map_err(|e| state.course_error(e))?;
    Ok(Json(courses))
}

/// `POST /courses`
pub async fn create_course(
    State(state): State<AppState>,
    Json(params): Json<CourseCreate>,
) -> Result<Json<Course>, ApiError> {
    let course = state
        .courses
        .create_course(params)
        .await
        .map_err(|e| state.course_error(e))?;
    Ok(Json(course))
}

/// `PUT /courses/{course_id}` - full replace except the id.
pub async fn update_course(
    State(state): State<AppState>,
    Path(course_id): Path<CourseId>,
    Json(update): Json<CourseUpdate>,
) -> Result<Json<Course>, ApiError> {
    let course = state
        .courses
        .update_course(course_id, update)
        .await
        .map_err(|e| state.course_error(e))?;
    Ok(Json(course))
}

/// `DELETE /courses/{course_id}` - always answers `{"status": "deleted"}`.
pub async fn delete_course(
    State(state): State<AppState>,
    Path(course_id): Path<CourseId>,
) -> Result<Json<Deleted>, ApiError> {
    state
        .courses
        .delete(course_id)
        .await
        .map_err(|e| state.course_error(e))?;
    Ok(Json(Deleted::new()))
}
