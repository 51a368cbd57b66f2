//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the store half of the framework. It owns the
//! records of one entity type plus the id counter, and processes requests sequentially so
//! that every operation on a store is serialized.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages an ordered collection of records.
///
/// # Architecture Note
/// The actor owns the state (`store`, `next_id`) and the receiving end of the channel.
/// Each actor runs in its own Tokio task and handles one message at a time, so the
/// "allocate id, then append" sequence of a create can never interleave with another
/// request. No `Mutex` is needed around the store.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor (server) and a client.
/// 2. **Wire**: pass the entity's dependencies into `actor.run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// # Implementation Details
///
/// Records live in a `Vec` in insertion order. Ids come from a `u32` counter starting at 1.
///
/// * **Create**: allocate id (post-increment), `T::from_create_params`, `on_create`, append.
/// * **Get**: linear lookup, returns a clone.
/// * **List**: clones every record accepted by the query, in order.
/// * **Update**: `on_update` on the stored record; its position does not change.
/// * **Delete**: removes every record carrying the id. Never fails.
/// * **Clear**: empties the store and rewinds the counter.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full, client
    /// calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every entity hook. It can hold clients for
    /// other actors that were created *after* this actor but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "User" instead of "gradebook_api::model::user::User")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, %id, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.push(item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.iter().find(|item| item.id() == &id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { query, respond_to } => {
                    let items: Vec<T> = match &query {
                        Some(query) => self
                            .store
                            .iter()
                            .filter(|item| item.matches(query))
                            .cloned()
                            .collect(),
                        None => self.store.clone(),
                    };
                    debug!(entity_type, ?query, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.iter_mut().find(|item| item.id() == &id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let before = self.store.len();
                    self.store.retain(|item| item.id() != &id);
                    let removed = before - self.store.len();
                    if removed == 0 {
                        debug!(entity_type, %id, "Delete matched nothing");
                    } else {
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                    }
                    let _ = respond_to.send(Ok(removed));
                }
                ResourceRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
                ResourceRequest::Clear { respond_to } => {
                    let dropped = self.store.len();
                    self.store.clear();
                    self.next_id = 1;
                    info!(entity_type, dropped, "Cleared");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u32,
        text: String,
    }

    #[derive(Debug)]
    struct NoteText(String);

    #[derive(Debug, thiserror::Error)]
    #[error("rejected: {0}")]
    struct NoteError(String);

    #[async_trait]
    impl ActorEntity for Note {
        type Id = u32;
        type Create = NoteText;
        type Update = NoteText;
        type Query = String;
        type Context = ();
        type Error = NoteError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create_params(id: u32, params: NoteText) -> Result<Self, NoteError> {
            Ok(Self { id, text: params.0 })
        }

        fn matches(&self, query: &String) -> bool {
            self.text.contains(query.as_str())
        }

        async fn on_update(&mut self, update: NoteText, _ctx: &()) -> Result<(), NoteError> {
            if update.0.is_empty() {
                return Err(NoteError("empty".into()));
            }
            self.text = update.0;
            Ok(())
        }
    }

    fn spawn_notes() -> ResourceClient<Note> {
        let (actor, client) = ResourceActor::<Note>::new(8);
        tokio::spawn(actor.run(()));
        client
    }

    #[tokio::test]
    async fn test_ids_are_sequential_and_order_is_kept() {
        let client = spawn_notes();
        for text in ["a", "b", "c"] {
            client.create(NoteText(text.into())).await.unwrap();
        }

        let all = client.list(None).await.unwrap();
        let ids: Vec<u32> = all.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        // Deleted ids are not handed out again.
        client.delete(3).await.unwrap();
        let next = client.create(NoteText("d".into())).await.unwrap();
        assert_eq!(next.id, 4);
    }

    #[tokio::test]
    async fn test_update_keeps_position_and_rejects_unknown_id() {
        let client = spawn_notes();
        client.create(NoteText("first".into())).await.unwrap();
        client.create(NoteText("second".into())).await.unwrap();

        let updated = client.update(1, NoteText("changed".into())).await.unwrap();
        assert_eq!(updated.text, "changed");
        let all = client.list(None).await.unwrap();
        assert_eq!(all[0].text, "changed");
        assert_eq!(all[1].text, "second");

        let missing = client.update(42, NoteText("x".into())).await;
        assert!(matches!(missing, Err(FrameworkError::NotFound(id)) if id == "42"));

        let rejected = client.update(2, NoteText(String::new())).await;
        assert!(matches!(rejected, Err(FrameworkError::EntityError(_))));
        assert_eq!(client.get(2).await.unwrap().unwrap().text, "second");
    }

    #[tokio::test]
    async fn test_list_query_delete_and_clear() {
        let client = spawn_notes();
        client.create(NoteText("apple".into())).await.unwrap();
        client.create(NoteText("banana".into())).await.unwrap();
        client.create(NoteText("pineapple".into())).await.unwrap();

        let apples = client.list(Some("apple".into())).await.unwrap();
        assert_eq!(apples.len(), 2);

        assert_eq!(client.delete(2).await.unwrap(), 1);
        assert_eq!(client.delete(2).await.unwrap(), 0);
        assert_eq!(client.count().await.unwrap(), 2);

        client.clear().await.unwrap();
        assert_eq!(client.count().await.unwrap(), 0);
        let fresh = client.create(NoteText("again".into())).await.unwrap();
        assert_eq!(fresh.id, 1);
    }
}
