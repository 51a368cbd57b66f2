//! ActorEntity trait implementation for the User domain type.
//!
//! This module contains the [`ActorEntity`] implementation that enables [`User`] to be
//! managed by the generic [`ResourceActor`](crate::framework::ResourceActor).
//!
//! The user store's context is its [`UsernameClock`]: usernames are derived in
//! `on_create`, inside the actor, so stamps are issued in creation order.

use super::username::{derive_username, UsernameClock};
use super::UserError;
use crate::framework::ActorEntity;
use crate::model::{User, UserCreate, UserId, UserSearch, UserUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Query = UserSearch;
    type Context = UsernameClock;
    type Error = UserError;

    fn id(&self) -> &UserId {
        &self.id
    }

    /// Builds the record with an empty username; `on_create` fills it in.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        Ok(Self::from_payload(id, params, String::new()))
    }

    fn matches(&self, query: &UserSearch) -> bool {
        query.matches(self)
    }

    async fn on_create(&mut self, clock: &UsernameClock) -> Result<(), Self::Error> {
        self.username = derive_username(&self.first_name, &self.last_name, &clock.next_stamp());
        Ok(())
    }

    /// Replaces every field. `id` is kept, and so is `username` unless the payload
    /// carries a non-empty one. Names changing does not re-derive the username.
    async fn on_update(
        &mut self,
        update: UserUpdate,
        _clock: &UsernameClock,
    ) -> Result<(), Self::Error> {
        let username = match update.username {
            Some(username) if !username.is_empty() => username,
            _ => std::mem::take(&mut self.username),
        };
        *self = User {
            id: self.id,
            first_name: update.first_name,
            last_name: update.last_name,
            username,
            phone: update.phone,
            country: update.country,
            city: update.city,
            email: update.email,
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_payload() -> UserCreate {
        UserCreate {
            first_name: "Emma".into(),
            last_name: "Williams".into(),
            phone: "+1-555-0103".into(),
            country: "Canada".into(),
            city: "Toronto".into(),
            email: "emma.williams@university.edu".into(),
        }
    }

    fn stored() -> User {
        User::from_payload(
            UserId(3),
            stored_payload(),
            "emma.williams.20250101000000000001".into(),
        )
    }

    fn replacement(username: Option<&str>) -> UserUpdate {
        UserUpdate {
            first_name: "Emily".into(),
            last_name: "Watson".into(),
            username: username.map(str::to_string),
            phone: "1".into(),
            country: "UK".into(),
            city: "Leeds".into(),
            email: "emily@x.com".into(),
        }
    }

    #[tokio::test]
    async fn test_on_create_derives_username() {
        let mut user = User::from_create_params(UserId(1), stored_payload()).unwrap();
        assert!(user.username.is_empty());
        user.on_create(&UsernameClock::new()).await.unwrap();
        assert!(user.username.starts_with("emma.williams."));
        assert_eq!(user.username.len(), "emma.williams.".len() + 20);
    }

    #[tokio::test]
    async fn test_update_carries_username_forward() {
        let clock = UsernameClock::new();
        for username in [None, Some("")] {
            let mut user = stored();
            user.on_update(replacement(username), &clock).await.unwrap();
            assert_eq!(user.username, "emma.williams.20250101000000000001");
            assert_eq!(user.id, UserId(3));
            assert_eq!(user.first_name, "Emily");
            assert_eq!(user.city, "Leeds");
        }
    }

    #[tokio::test]
    async fn test_update_with_username_replaces_it() {
        let mut user = stored();
        user.on_update(replacement(Some("emily.w")), &UsernameClock::new())
            .await
            .unwrap();
        assert_eq!(user.username, "emily.w");
    }
}
