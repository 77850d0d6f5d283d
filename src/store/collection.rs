use crate::{
    error::{RendezvousError, Result},
    model::Entity,
};
use std::collections::{BTreeMap, HashMap};

/// Records of one kind, indexed by id and kept in insertion order.
///
/// Each record gets a sequence number when it is inserted. `records` is
/// ordered by that number and `index` maps ids onto it, so lookups by id
/// don't scan and listing still follows insertion order. Updates keep the
/// sequence number, so an updated record stays where it was.
#[derive(Debug, Clone)]
pub struct Collection<T: Entity> {
    records: BTreeMap<u64, T>,
    index: HashMap<String, u64>,
    next_seq: u64,
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            index: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Append a record. Returns `false` and leaves the collection untouched
    /// if a record with the same id is already present.
    pub fn insert(&mut self, record: T) -> bool {
        if self.contains(record.id()) {
            return false;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(record.id().to_string(), seq);
        self.records.insert(seq, record);
        true
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).and_then(|seq| self.records.get(seq))
    }

    /// Merge `patch` into the record with `id` and return the merged record.
    pub fn update(&mut self, id: &str, patch: T::Patch) -> Result<T> {
        let record = self
            .index
            .get(id)
            .and_then(|seq| self.records.get_mut(seq))
            .ok_or_else(|| RendezvousError::not_found(T::KIND, id))?;
        record.apply(patch);
        Ok(record.clone())
    }

    /// Remove the record with `id` and return it.
    pub fn remove(&mut self, id: &str) -> Result<T> {
        self.index
            .remove(id)
            .and_then(|seq| self.records.remove(&seq))
            .ok_or_else(|| RendezvousError::not_found(T::KIND, id))
    }

    /// Remove every record, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.records.len();
        self.records.clear();
        self.index.clear();
        count
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }
}
