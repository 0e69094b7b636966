use crate::error::Result;
use crate::repo::kv::KvRepo;
use rolodex_core::Contact;
use rusqlite::Connection;

pub const CONTACTS_KEY: &str = "contacts";

/// The whole contact collection serialized as one JSON array under
/// [`CONTACTS_KEY`]. Every write replaces the stored array.
pub struct ContactsRepo<'a> {
    kv: KvRepo<'a>,
}

impl<'a> ContactsRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self {
            kv: KvRepo::new(conn),
        }
    }

    /// `None` when nothing has been stored yet, as opposed to a stored empty list.
    pub fn load(&self) -> Result<Option<Vec<Contact>>> {
        match self.kv.get(CONTACTS_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn save_all(&self, contacts: &[Contact]) -> Result<()> {
        let raw = serde_json::to_string(contacts)?;
        self.kv.put(CONTACTS_KEY, &raw)?;
        tracing::debug!(count = contacts.len(), "persisted contacts");
        Ok(())
    }

    pub fn clear(&self) -> Result<bool> {
        self.kv.remove(CONTACTS_KEY)
    }
}
