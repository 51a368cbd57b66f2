//! # User Client
//!
//! High-level API over the user store. Wraps a `ResourceClient<User>` and exposes
//! the user operations with [`UserError`] as the single error type.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{User, UserCreate, UserId, UserSearch, UserUpdate};
use crate::user_actor::UserError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<UserError>() {
                Ok(user_error) => *user_error,
                Err(other) => UserError::ActorCommunicationError(other.to_string()),
            },
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl UserClient {
    /// Stores a new user. The returned record carries the allocated id and derived username.
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// All users in insertion order, filtered by `search` when it is non-empty.
    #[instrument(skip(self))]
    pub async fn list_users(&self, search: Option<&str>) -> Result<Vec<User>, UserError> {
        let query = search.and_then(UserSearch::new);
        self.inner.list(query).await.map_err(Self::map_error)
    }

    /// Full replacement of a user; fails with `UserError::NotFound` for an unknown id.
    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}
