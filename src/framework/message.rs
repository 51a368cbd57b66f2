//! # Generic Messages
//!
//! The message types exchanged between a [`ResourceClient`](crate::framework::ResourceClient)
//! and its [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a store actor.
///
/// # The CRUD Pattern
/// The variants map onto the store operations every record type supports:
///
/// - **Create**: allocates an id, builds the record from [`ActorEntity::Create`], appends it.
///   Answers with the stored record.
/// - **Get**: looks a record up by id.
/// - **List**: every record in insertion order, optionally filtered by [`ActorEntity::Query`].
/// - **Update**: rewrites a record in place from [`ActorEntity::Update`].
/// - **Delete**: removes every record with the id. Answers with how many were removed,
///   which may be zero.
/// - **Count**: number of stored records.
/// - **Clear**: drops every record and rewinds the id counter to 1.
///
/// The enum is generic over `T: ActorEntity`, so a `Course` payload can never reach the
/// `User` store.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        query: Option<T::Query>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<usize>,
    },
    Count {
        respond_to: Response<usize>,
    },
    Clear {
        respond_to: Response<()>,
    },
}
