//! In-memory store for rendezvous.
//!
//! Holds one [`Collection`] per entity kind. Nothing is persisted; the data
//! lives as long as the process.
//!
//! ## Components
//!
//! - [`Store`]: CRUD over the four collections plus the foreign-key lookups
//!   used by relational fields
//! - [`StoreHandle`]: shared, lock-guarded store passed to resolvers
//! - [`Collection`]: id-indexed, insertion-ordered records of one kind
//! - [`SeedData`]: initial records read from a YAML or JSON file
//!
//! Foreign keys are never checked. Removing a user or an event leaves the
//! records pointing at it alone, and lookups through the dangling key come
//! back empty.

mod collection;
mod seed;

pub use collection::Collection;
pub use seed::SeedData;

use crate::{
    error::{RendezvousError, Result},
    model::{Entity, Event, Location, Participant, User},
};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Default length of generated ids, the same as nanoid's.
pub const DEFAULT_ID_LENGTH: usize = 21;

/// Shortest id length a config may ask for.
pub const MIN_ID_LENGTH: usize = 8;

/// Draws per `add` before giving up on finding an unused id.
const MAX_ID_ATTEMPTS: usize = 32;

/// Access to the collection holding records of type `T`.
pub trait Table<T: Entity> {
    fn table(&self) -> &Collection<T>;
    fn table_mut(&mut self) -> &mut Collection<T>;
}

#[derive(Debug, Clone)]
pub struct Store {
    events: Collection<Event>,
    locations: Collection<Location>,
    users: Collection<User>,
    participants: Collection<Participant>,
    id_length: usize,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH)
    }
}

macro_rules! impl_table {
    ($entity:ty, $field:ident) => {
        impl Table<$entity> for Store {
            fn table(&self) -> &Collection<$entity> {
                &self.$field
            }

            fn table_mut(&mut self) -> &mut Collection<$entity> {
                &mut self.$field
            }
        }
    };
}

impl_table!(Event, events);
impl_table!(Location, locations);
impl_table!(User, users);
impl_table!(Participant, participants);

impl Store {
    pub fn new(id_length: usize) -> Self {
        Self {
            events: Collection::new(),
            locations: Collection::new(),
            users: Collection::new(),
            participants: Collection::new(),
            id_length,
        }
    }

    /// Build a store pre-filled with `seed`, keeping the seed ids and order.
    pub fn from_seed(seed: SeedData, id_length: usize) -> Result<Self> {
        let mut store = Self::new(id_length);
        store.seed_all(seed.events)?;
        store.seed_all(seed.locations)?;
        store.seed_all(seed.users)?;
        store.seed_all(seed.participants)?;
        tracing::debug!(
            events = store.count::<Event>(),
            locations = store.count::<Location>(),
            users = store.count::<User>(),
            participants = store.count::<Participant>(),
            "Store seeded"
        );
        Ok(store)
    }

    fn seed_all<T: Entity>(&mut self, records: Vec<T>) -> Result<()>
    where
        Self: Table<T>,
    {
        for record in records {
            let id = record.id().to_string();
            if !<Self as Table<T>>::table_mut(self).insert(record) {
                return Err(RendezvousError::DuplicateSeedId { kind: T::KIND, id });
            }
        }
        Ok(())
    }

    /// A random id not yet used in the collection for `T`.
    fn fresh_id<T: Entity>(&self) -> Result<String>
    where
        Self: Table<T>,
    {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = nanoid::format(
                nanoid::rngs::default,
                &nanoid::alphabet::SAFE,
                self.id_length,
            );
            if !<Self as Table<T>>::table(self).contains(&id) {
                return Ok(id);
            }
        }
        tracing::warn!(kind = T::KIND, id_length = self.id_length, "No unused id found");
        Err(RendezvousError::IdSpaceExhausted {
            kind: T::KIND,
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    pub fn add<T: Entity>(&mut self, data: T::New) -> Result<T>
    where
        Self: Table<T>,
    {
        let id = self.fresh_id::<T>()?;
        let record = T::create(id, data);
        <Self as Table<T>>::table_mut(self).insert(record.clone());
        tracing::debug!(kind = T::KIND, id = record.id(), "Record added");
        Ok(record)
    }

    pub fn update<T: Entity>(&mut self, id: &str, patch: T::Patch) -> Result<T>
    where
        Self: Table<T>,
    {
        let result = <Self as Table<T>>::table_mut(self).update(id, patch);
        match &result {
            Ok(_) => tracing::debug!(kind = T::KIND, id, "Record updated"),
            Err(e) => tracing::debug!(kind = T::KIND, id, error = %e, "Update failed"),
        }
        result
    }

    pub fn delete<T: Entity>(&mut self, id: &str) -> Result<T>
    where
        Self: Table<T>,
    {
        let result = <Self as Table<T>>::table_mut(self).remove(id);
        match &result {
            Ok(_) => tracing::debug!(kind = T::KIND, id, "Record deleted"),
            Err(e) => tracing::debug!(kind = T::KIND, id, error = %e, "Delete failed"),
        }
        result
    }

    pub fn delete_all<T: Entity>(&mut self) -> usize
    where
        Self: Table<T>,
    {
        let count = <Self as Table<T>>::table_mut(self).clear();
        tracing::debug!(kind = T::KIND, count, "Collection cleared");
        count
    }

    pub fn get<T: Entity>(&self, id: &str) -> Option<T>
    where
        Self: Table<T>,
    {
        <Self as Table<T>>::table(self).get(id).cloned()
    }

    pub fn list<T: Entity>(&self) -> Vec<T>
    where
        Self: Table<T>,
    {
        <Self as Table<T>>::table(self).iter().cloned().collect()
    }

    pub fn count<T: Entity>(&self) -> usize
    where
        Self: Table<T>,
    {
        <Self as Table<T>>::table(self).len()
    }

    /// Events organised by `user_id`, in insertion order.
    pub fn user_events(&self, user_id: &str) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Participants of `event_id`, in insertion order.
    pub fn event_participants(&self, event_id: &str) -> Vec<Participant> {
        self.participants
            .iter()
            .filter(|p| p.event_id == event_id)
            .cloned()
            .collect()
    }
}

/// Shared handle to a [`Store`].
///
/// Callers take the lock once per operation and drop it before returning, so
/// every add, update and delete is atomic with respect to other requests.
#[derive(Debug, Clone, Default)]
pub struct StoreHandle {
    inner: Arc<RwLock<Store>>,
}

impl StoreHandle {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    // A panicking reader or writer can't leave a collection half-updated,
    // so poisoning is ignored.
    pub fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
