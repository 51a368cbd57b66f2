use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Users.
///
/// Serialized as a bare integer. Any `i64` is accepted; the store only hands out positive ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(i64::from(id))
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a registered user.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for User`](#impl-ActorEntity-for-User) for details on:
/// - Creation parameters ([`UserCreate`])
/// - Update parameters ([`UserUpdate`])
/// - List filtering ([`UserSearch`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub email: String,
}

impl User {
    /// Builds a stored user from a create payload and an already derived username.
    pub fn from_payload(id: UserId, params: UserCreate, username: String) -> Self {
        Self {
            id,
            first_name: params.first_name,
            last_name: params.last_name,
            username,
            phone: params.phone,
            country: params.country,
            city: params.city,
            email: params.email,
        }
    }
}

/// Payload for creating a new user.
///
/// `id` and `username` are assigned by the store; if a client sends them anyway they are
/// ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub email: String,
}

/// Full replacement payload for an existing user.
///
/// Every field is required except `username`. An absent or empty `username` keeps the
/// stored one. Any `id` in the body is ignored; the path id wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub username: Option<String>,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub email: String,
}

/// Case-insensitive substring search over name, email and phone.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSearch(String);

impl UserSearch {
    /// Returns `None` for an empty term, which lists every user.
    pub fn new(term: &str) -> Option<Self> {
        if term.is_empty() {
            None
        } else {
            Some(Self(term.to_lowercase()))
        }
    }

    /// City and country are not searched.
    pub fn matches(&self, user: &User) -> bool {
        [&user.first_name, &user.last_name, &user.email, &user.phone]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User {
            id: UserId(1),
            first_name: "Alice".into(),
            last_name: "Johnson".into(),
            username: "alice.johnson.20250101000000000000".into(),
            phone: "+1-555-0101".into(),
            country: "USA".into(),
            city: "Boston".into(),
            email: "alice.johnson@university.edu".into(),
        }
    }

    #[test]
    fn test_search_fields() {
        let user = alice();
        assert!(UserSearch::new("ALICE").unwrap().matches(&user));
        assert!(UserSearch::new("john").unwrap().matches(&user));
        assert!(UserSearch::new("university.edu").unwrap().matches(&user));
        assert!(UserSearch::new("0101").unwrap().matches(&user));
        assert!(!UserSearch::new("boston").unwrap().matches(&user));
        assert!(!UserSearch::new("usa").unwrap().matches(&user));
    }

    #[test]
    fn test_empty_search_is_no_filter() {
        assert!(UserSearch::new("").is_none());
        assert!(UserSearch::new("Bob").unwrap().matches(&User {
            last_name: "Bobson".into(),
            ..alice()
        }));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(alice()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["city"], "Boston");

        let update: UserUpdate = serde_json::from_value(serde_json::json!({
            "id": 99,
            "first_name": "A", "last_name": "B", "phone": "1",
            "country": "C", "city": "D", "email": "e@f"
        }))
        .unwrap();
        assert!(update.username.is_none());
    }
}
