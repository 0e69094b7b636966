pub mod debounce;
pub mod domain;
pub mod dto;
pub mod error;
pub mod features;
pub mod index;
pub mod rules;
pub mod time;

pub use debounce::{Debouncer, DEFAULT_SEARCH_DEBOUNCE};
pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use features::{features, Feature, FEATURES};
pub use index::{build_index, ContactGroup, ContactIndex, IndexRow};
pub use rules::*;
pub use time::now_millis;
