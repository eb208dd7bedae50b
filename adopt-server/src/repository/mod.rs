//! Repository Module
//!
//! Data access layer over the in-memory store.
//! `Repository<T>` provides CRUD for any `Entity`; the entity submodules add
//! their own lookups on top of it.

pub mod pet;
pub mod shelter;
pub mod user;

use std::marker::PhantomData;
use std::sync::Arc;

use adopt_core::domain::{Pet, Shelter, User};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::Store;

/// A record type stored in its own sequence of the `Store`, keyed by a unique id
pub trait Entity: Clone + Send + Sync + 'static {
    /// Creation payload: every field except `id`
    type New: Send;
    /// Partial update payload
    type Patch: Send;

    /// Singular name used in log and error messages
    const NAME: &'static str;

    fn id(&self) -> &str;

    fn from_new(id: String, new: Self::New) -> Self;

    fn apply(&mut self, patch: Self::Patch);

    /// Select this entity's sequence in the store
    fn collection(store: &Store) -> &RwLock<Vec<Self>>;
}

/// Generic CRUD repository over one entity sequence
///
/// Each method takes the sequence lock once, so every operation is atomic
/// with respect to the others. Nothing spans two calls.
pub struct Repository<T> {
    store: Arc<Store>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity> Repository<T> {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    fn items(&self) -> &RwLock<Vec<T>> {
        T::collection(&self.store)
    }

    /// All records in insertion order
    pub async fn find_all(&self) -> Vec<T> {
        self.items().read().await.clone()
    }

    /// First record with the given id
    pub async fn find_by_id(&self, id: &str) -> Option<T> {
        self.items()
            .read()
            .await
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    /// Linear scan keeping insertion order
    pub async fn find_where<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.items()
            .read()
            .await
            .iter()
            .filter(|item| predicate(*item))
            .cloned()
            .collect()
    }

    /// Assign a fresh id, append, and return the stored record
    pub async fn create(&self, new: T::New) -> T {
        let mut items = self.items().write().await;

        let mut id = Uuid::new_v4().to_string();
        while items.iter().any(|item| item.id() == id) {
            id = Uuid::new_v4().to_string();
        }

        let item = T::from_new(id, new);
        items.push(item.clone());

        tracing::debug!("{} stored with id {}", T::NAME, item.id());

        item
    }

    /// Merge `patch` into the record in place; `None` if the id is unknown
    pub async fn update(&self, id: &str, patch: T::Patch) -> Option<T> {
        let mut items = self.items().write().await;
        let item = items.iter_mut().find(|item| item.id() == id)?;
        item.apply(patch);

        Some(item.clone())
    }

    /// Remove the record with the given id; false if nothing was removed
    pub async fn delete(&self, id: &str) -> bool {
        let mut items = self.items().write().await;

        match items.iter().position(|item| item.id() == id) {
            Some(index) => {
                items.remove(index);
                true
            }
            None => false,
        }
    }
}

/// One shared repository per entity, all backed by the same store
///
/// Built once at startup and handed to the router as state.
#[derive(Clone)]
pub struct Repositories {
    pub pets: Repository<Pet>,
    pub shelters: Repository<Shelter>,
    pub users: Repository<User>,
}

impl Repositories {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            pets: Repository::new(Arc::clone(&store)),
            shelters: Repository::new(Arc::clone(&store)),
            users: Repository::new(store),
        }
    }
}

/// Case-insensitive equality used by the textual filters
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
