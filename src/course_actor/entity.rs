//! ActorEntity trait implementation for the Course domain type.
//!
//! This module contains the [`ActorEntity`] implementation that enables [`Course`] to be
//! managed by the generic [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See the trait implementation on [`Course`] for method documentation.

use super::{CourseContext, CourseError};
use crate::clients::ActorClient;
use crate::model::{Course, CourseCreate, CourseFilter, CourseId, CourseUpdate, UserId};
use crate::framework::ActorEntity;
use async_trait::async_trait;
use tracing::debug;

impl CourseContext {
    /// Fails with `UnknownUser` when references are checked and `user_id` does not exist.
    async fn ensure_user(&self, user_id: UserId) -> Result<(), CourseError> {
        let Some(users) = &self.users else {
            return Ok(());
        };
        debug!(%user_id, "Checking course owner");
        match users.get(user_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(CourseError::UnknownUser(user_id)),
            Err(e) => Err(CourseError::ActorCommunicationError(e.to_string())),
        }
    }
}

#[async_trait]
impl ActorEntity for Course {
    type Id = CourseId;
    type Create = CourseCreate;
    type Update = CourseUpdate;
    type Query = CourseFilter;
    type Context = CourseContext;
    type Error = CourseError;

    fn id(&self) -> &CourseId {
        &self.id
    }

    fn from_create_params(id: CourseId, params: CourseCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params))
    }

    fn matches(&self, filter: &CourseFilter) -> bool {
        self.user_id == filter.user_id
    }

    async fn on_create(&mut self, ctx: &CourseContext) -> Result<(), Self::Error> {
        ctx.ensure_user(self.user_id).await
    }

    /// Replaces every field except `id`.
    async fn on_update(&mut self, update: CourseUpdate, ctx: &CourseContext) -> Result<(), Self::Error> {
        ctx.ensure_user(update.user_id).await?;
        *self = Course {
            id: self.id,
            name: update.name,
            first_grade: update.first_grade,
            second_grade: update.second_grade,
            final_grade: update.final_grade,
            user_id: update.user_id,
        };
        Ok(())
    }
}
