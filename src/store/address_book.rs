//! The address book and its shared, lock-guarded handle.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::store::person::Person;

/// Ordered collection of people plus the id counter.
///
/// Serializes as `{"personList": [...]}`; the counter is internal state.
/// Deserializing goes through [`AddressBook::with_people`], so the counter
/// always starts above every id in the document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "PersonList")]
pub struct AddressBook {
    #[serde(rename = "personList")]
    people: Vec<Person>,

    #[serde(skip_serializing)]
    next_id: u64,
}

/// Wire form of an address book.
#[derive(Deserialize)]
struct PersonList {
    #[serde(rename = "personList", default)]
    people: Vec<Person>,
}

impl From<PersonList> for AddressBook {
    fn from(list: PersonList) -> Self {
        Self::with_people(list.people)
    }
}

fn first_id() -> u64 {
    1
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressBook {
    /// Create an empty book whose first issued id is 1.
    pub fn new() -> Self {
        Self {
            people: Vec::new(),
            next_id: first_id(),
        }
    }

    /// Create a book pre-loaded with `people`.
    ///
    /// Unassigned entries get fresh ids in order, entries whose id is already
    /// taken are re-assigned, and the counter ends above every id present.
    /// `u64::MAX` leaves no room above it and counts as unassigned.
    pub fn with_people(people: Vec<Person>) -> Self {
        let mut book = Self::new();
        book.next_id = people
            .iter()
            .map(|p| p.id)
            .filter(|&id| id != u64::MAX)
            .max()
            .unwrap_or(0)
            + 1;

        for mut person in people {
            if !person.is_assigned()
                || person.id == u64::MAX
                || book.find_by_id(person.id).is_some()
            {
                person.id = book.next_id();
            }
            book.add(person);
        }
        book
    }

    /// All people in insertion order.
    pub fn all_people(&self) -> &[Person] {
        &self.people
    }

    /// Return the current counter value and advance it.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// Append a person. The caller must have assigned a unique id.
    pub fn add(&mut self, person: Person) {
        debug_assert!(person.is_assigned(), "person added without an id");
        debug_assert!(self.find_by_id(person.id).is_none(), "duplicate id {}", person.id);
        self.people.push(person);
    }

    /// Overwrite the entry with `id` in place. Returns false if there is none.
    pub fn replace_by_id(&mut self, id: u64, person: Person) -> bool {
        match self.people.iter_mut().find(|p| p.id == id) {
            Some(slot) => {
                *slot = person;
                true
            }
            None => false,
        }
    }

    /// Remove the entry with `id`. Returns false if there is none.
    pub fn remove_by_id(&mut self, id: u64) -> bool {
        match self.people.iter().position(|p| p.id == id) {
            Some(index) => {
                self.people.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

/// Process-wide handle to one address book.
///
/// A single mutex guards the people and the counter together so concurrent
/// creates never observe the same id.
#[derive(Debug, Clone, Default)]
pub struct SharedAddressBook {
    inner: Arc<Mutex<AddressBook>>,
}

impl SharedAddressBook {
    pub fn new(book: AddressBook) -> Self {
        Self {
            inner: Arc::new(Mutex::new(book)),
        }
    }

    /// Acquire the book. Never hold the guard across an `.await`.
    ///
    /// Every operation completes or leaves the book untouched, so a poisoned
    /// lock still guards consistent state and is recovered.
    pub fn lock(&self) -> MutexGuard<'_, AddressBook> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current book.
    pub fn snapshot(&self) -> AddressBook {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl From<AddressBook> for SharedAddressBook {
    fn from(book: AddressBook) -> Self {
        Self::new(book)
    }
}
