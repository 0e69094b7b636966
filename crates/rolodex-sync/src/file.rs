use crate::seed::parse_seed;
use crate::source::SeedSource;
use crate::Result;
use rolodex_core::Contact;
use std::fs;
use std::path::PathBuf;

/// Seed data read from a local JSON file in the same shape the HTTP seed
/// endpoint returns.
#[derive(Debug, Clone)]
pub struct FileSeedSource {
    path: PathBuf,
}

impl FileSeedSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SeedSource for FileSeedSource {
    fn source_name(&self) -> &'static str {
        "file"
    }

    fn fetch_seed(&self) -> Result<Vec<Contact>> {
        tracing::debug!(path = %self.path.display(), "reading seed file");
        let body = fs::read_to_string(&self.path)?;
        parse_seed(&body)
    }
}
