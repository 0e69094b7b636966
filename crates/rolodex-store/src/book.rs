use crate::error::Result;
use crate::Store;
use rolodex_core::{
    build_index, now_millis, sort_by_name, Contact, ContactDraft, ContactId, ContactIndex,
};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Contacts were read back from storage.
    Restored,
    /// Storage was empty and the seed was fetched and persisted.
    Seeded,
    /// Storage was empty and seeding was turned off.
    Unseeded,
    /// Storage was empty and the seed fetch failed. Nothing was written, so
    /// the next load fetches again.
    SeedFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(Contact),
    Updated(Contact),
}

impl SaveOutcome {
    pub fn contact(&self) -> &Contact {
        match self {
            SaveOutcome::Created(contact) | SaveOutcome::Updated(contact) => contact,
        }
    }

    pub fn into_contact(self) -> Contact {
        match self {
            SaveOutcome::Created(contact) | SaveOutcome::Updated(contact) => contact,
        }
    }
}

/// The in-memory contact collection, kept sorted by name and written back
/// to the store in full after every mutation.
pub struct ContactBook {
    store: Store,
    contacts: Vec<Contact>,
}

impl ContactBook {
    /// Restores the stored collection. When nothing is stored yet, calls
    /// `fetch_seed` once and persists its sorted result.
    pub fn load<F, E>(store: Store, fetch_seed: F) -> Result<(Self, LoadOutcome)>
    where
        F: FnOnce() -> std::result::Result<Vec<Contact>, E>,
        E: Display,
    {
        if let Some(book) = Self::restore(&store)? {
            return Ok((Self::with_contacts(store, book), LoadOutcome::Restored));
        }

        match fetch_seed() {
            Ok(mut seed) => {
                sort_by_name(&mut seed);
                store.contacts().save_all(&seed)?;
                tracing::debug!(count = seed.len(), "seeded contacts");
                Ok((Self::with_contacts(store, seed), LoadOutcome::Seeded))
            }
            Err(err) => {
                let message = err.to_string();
                tracing::debug!(error = %message, "seed fetch failed");
                Ok((
                    Self::with_contacts(store, Vec::new()),
                    LoadOutcome::SeedFailed(message),
                ))
            }
        }
    }

    /// Restores the stored collection without ever fetching a seed.
    pub fn load_without_seed(store: Store) -> Result<(Self, LoadOutcome)> {
        match Self::restore(&store)? {
            Some(contacts) => Ok((Self::with_contacts(store, contacts), LoadOutcome::Restored)),
            None => Ok((Self::with_contacts(store, Vec::new()), LoadOutcome::Unseeded)),
        }
    }

    fn restore(store: &Store) -> Result<Option<Vec<Contact>>> {
        let stored = store.contacts().load()?;
        if let Some(contacts) = &stored {
            tracing::debug!(count = contacts.len(), "restored contacts");
        }
        Ok(stored)
    }

    fn with_contacts(store: Store, contacts: Vec<Contact>) -> Self {
        Self { store, contacts }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.id == id)
    }

    pub fn index(&self, term: &str) -> ContactIndex<'_> {
        build_index(&self.contacts, term)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Replaces the contact with the draft's id, or appends a new contact
    /// with a fresh id when the draft has no id or an unknown one.
    pub fn save(&mut self, draft: ContactDraft) -> Result<SaveOutcome> {
        self.save_at(draft, now_millis())
    }

    pub(crate) fn save_at(&mut self, draft: ContactDraft, now_millis: i64) -> Result<SaveOutcome> {
        draft.validate()?;
        let mut next = self.contacts.clone();
        let existing = draft
            .id
            .and_then(|id| next.iter().position(|contact| contact.id == id));

        let outcome = match existing {
            Some(position) => {
                let id = next[position].id;
                let contact = draft.into_contact(id);
                next[position] = contact.clone();
                SaveOutcome::Updated(contact)
            }
            None => {
                let id = ContactId::next_after(next.iter().map(|contact| &contact.id), now_millis);
                let contact = draft.into_contact(id);
                next.push(contact.clone());
                SaveOutcome::Created(contact)
            }
        };

        sort_by_name(&mut next);
        self.commit(next)?;
        Ok(outcome)
    }

    /// Removes the contact with `id`. An unknown id changes nothing.
    pub fn delete(&mut self, id: ContactId) -> Result<Option<Contact>> {
        let Some(position) = self.contacts.iter().position(|contact| contact.id == id) else {
            return Ok(None);
        };
        let mut next = self.contacts.clone();
        let removed = next.remove(position);
        self.commit(next)?;
        Ok(Some(removed))
    }

    fn commit(&mut self, next: Vec<Contact>) -> Result<()> {
        self.store.contacts().save_all(&next)?;
        self.contacts = next;
        Ok(())
    }
}
