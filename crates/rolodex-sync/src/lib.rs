pub mod error;
pub mod file;
pub mod http;
pub mod seed;
pub mod source;

pub use error::{Result, SyncError};
pub use file::FileSeedSource;
pub use http::HttpSeedSource;
pub use seed::parse_seed;
pub use source::SeedSource;
