use crate::clients::{CourseClient, UserClient};
use crate::course_actor::CourseContext;
use crate::lifecycle::DemoData;
use crate::user_actor::UsernameClock;
use tracing::{error, info};

/// Settings the stores are started with.
#[derive(Debug, Clone, Copy)]
pub struct StoreOptions {
    /// Capacity of each store's request channel.
    pub channel_capacity: usize,
    /// Make the course store verify `user_id` against the user store.
    pub check_user_refs: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            check_user_refs: false,
        }
    }
}

/// The runtime orchestrator for the gradebook stores.
///
/// `RosterSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the User and Course actors
/// - **Dependency Wiring**: handing the course store a user client when references are checked
/// - **Demo Data**: owning the [`DemoData`] seeder shared by startup and the reset endpoint
///
/// # Example
///
/// ```ignore
/// let system = RosterSystem::new(StoreOptions::default());
/// system.demo.seed().await?;
///
/// let users = system.user_client.list_users(None).await?;
///
/// system.shutdown().await?;
/// ```
pub struct RosterSystem {
    /// Client for interacting with the User actor
    pub user_client: UserClient,

    /// Client for interacting with the Course actor
    pub course_client: CourseClient,

    /// Seed / reset for both stores
    pub demo: DemoData,

    /// Task handles for the running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RosterSystem {
    /// Creates both actors and spawns them, each in its own Tokio task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(options: StoreOptions) -> Self {
        // 1. Create actors (no dependencies)
        let (user_actor, user_client) = crate::user_actor::new(options.channel_capacity);
        let (course_actor, course_client) = crate::course_actor::new(options.channel_capacity);

        // 2. Start actors with injected context
        let user_handle = tokio::spawn(user_actor.run(UsernameClock::new()));

        let course_context = if options.check_user_refs {
            CourseContext::checked(user_client.clone())
        } else {
            CourseContext::unchecked()
        };
        let course_handle = tokio::spawn(course_actor.run(course_context));

        let demo = DemoData::new(user_client.clone(), course_client.clone());

        Self {
            user_client,
            course_client,
            demo,
            handles: vec![user_handle, course_handle],
        }
    }

    /// Gracefully shuts down both stores.
    ///
    /// Dropping every client closes the channels; each actor drains its queue and exits.
    /// Clones handed out elsewhere (for instance to the HTTP router) must be dropped
    /// first, otherwise this waits for them.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // The course actor may hold a user client in its context, so it has to
        // exit before the user actor can.
        drop(self.demo);
        drop(self.course_client);
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
