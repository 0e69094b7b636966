use crate::Result;
use rolodex_core::Contact;

/// Somewhere an empty contact store can be filled from.
pub trait SeedSource {
    fn source_name(&self) -> &'static str;
    fn fetch_seed(&self) -> Result<Vec<Contact>>;
}
