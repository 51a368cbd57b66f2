use crate::clients::actor_client::ActorClient;
use crate::course_actor::CourseError;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Course, CourseCreate, CourseFilter, CourseId, CourseUpdate, UserId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Course actor.
#[derive(Clone)]
pub struct CourseClient {
    inner: ResourceClient<Course>,
}

impl CourseClient {
    pub fn new(inner: ResourceClient<Course>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_course(&self, params: CourseCreate) -> Result<Course, CourseError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    pub async fn list_courses(&self) -> Result<Vec<Course>, CourseError> {
        self.inner.list(None).await.map_err(Self::map_error)
    }

    /// Courses whose `user_id` is `user_id`. The user store is not consulted.
    #[instrument(skip(self))]
    pub async fn courses_for_user(&self, user_id: UserId) -> Result<Vec<Course>, CourseError> {
        self.inner
            .list(Some(CourseFilter { user_id }))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_course(
        &self,
        id: CourseId,
        update: CourseUpdate,
    ) -> Result<Course, CourseError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Course> for CourseClient {
    type Error = CourseError;

    fn inner(&self) -> &ResourceClient<Course> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CourseError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<CourseError>() {
                Ok(course_error) => *course_error,
                Err(other) => CourseError::ActorCommunicationError(other.to_string()),
            },
            other => CourseError::ActorCommunicationError(other.to_string()),
        }
    }
}
