//! User-specific store logic: username derivation, search and full-replace updates.

pub mod entity;
pub mod error;
pub mod username;

pub use error::*;
pub use username::UsernameClock;

use crate::clients::UserClient;
use crate::framework::ResourceActor;
use crate::model::User;

/// Creates a new User actor and its client.
///
/// Start it with `actor.run(UsernameClock::new())`.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = UserClient::new(generic_client);

    (actor, client)
}
