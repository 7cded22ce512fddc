use super::error::{Result, StoreError};
use super::types::{NewPet, Pet, PetFilter, PetId};

use parking_lot::Mutex;
use std::collections::HashMap;

/// First id handed out by a freshly constructed store.
pub const FIRST_PET_ID: PetId = 1000;

struct Inner {
    pets: HashMap<PetId, Pet>,
    next_id: PetId,
}

/// In-memory pet collection.
///
/// Every operation holds the same exclusive lock from start to finish, so a listing
/// never observes a half-applied insert or delete, and two concurrent `add` calls can
/// never hand out the same id. No operation awaits while holding the lock.
pub struct PetStore {
    inner: Mutex<Inner>,
}

impl PetStore {
    pub fn new() -> Self {
        Self::with_first_id(FIRST_PET_ID)
    }

    pub fn with_first_id(first_id: PetId) -> Self {
        Self {
            inner: Mutex::new(Inner {
                pets: HashMap::new(),
                next_id: first_id,
            }),
        }
    }

    /// Stores a new pet under the current counter value and advances the counter.
    pub fn add(&self, new_pet: NewPet) -> Pet {
        let mut inner = self.inner.lock();

        let pet = Pet {
            id: inner.next_id,
            name: new_pet.name,
            tag: new_pet.tag,
        };
        inner.next_id += 1;
        inner.pets.insert(pet.id, pet.clone());

        pet
    }

    /// Lists pets, optionally restricted by tag and truncated by a limit.
    ///
    /// Iteration order over the collection is unspecified. With a tag filter, a pet is
    /// emitted once for every filter entry equal to its tag. The limit is checked after
    /// each emitted pet and stops the scan as soon as it is reached, so which pets
    /// survive truncation depends on iteration order.
    pub fn find_all(&self, filter: &PetFilter) -> Vec<Pet> {
        let inner = self.inner.lock();

        let mut result = Vec::new();
        let reached = |len: usize| filter.limit.is_some_and(|limit| len >= limit);
        if reached(0) {
            return result;
        }

        for pet in inner.pets.values() {
            match &filter.tags {
                Some(tags) => {
                    for tag in tags {
                        if pet.tag.as_deref() == Some(tag.as_str()) {
                            result.push(pet.clone());
                            if reached(result.len()) {
                                return result;
                            }
                        }
                    }
                }
                None => {
                    result.push(pet.clone());
                    if reached(result.len()) {
                        return result;
                    }
                }
            }
        }

        result
    }

    pub fn find_by_id(&self, id: PetId) -> Result<Pet> {
        let inner = self.inner.lock();

        inner.pets.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    pub fn delete(&self, id: PetId) -> Result<()> {
        let mut inner = self.inner.lock();

        match inner.pets.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id)),
        }
    }

    /// Number of pets currently stored.
    pub fn len(&self) -> usize {
        self.inner.lock().pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The id the next `add` will assign.
    pub fn next_id(&self) -> PetId {
        self.inner.lock().next_id
    }
}

impl Default for PetStore {
    fn default() -> Self {
        Self::new()
    }
}
