pub mod contacts;
pub mod kv;

pub use contacts::{ContactsRepo, CONTACTS_KEY};
pub use kv::KvRepo;
