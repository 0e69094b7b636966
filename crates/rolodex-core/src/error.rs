use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("name is required")]
    EmptyName,
    #[error("invalid contact id: {0}")]
    InvalidContactId(String),
    #[error("unknown dialing code: {0}")]
    UnknownDialingCode(String),
    #[error("duplicate contact id: {0}")]
    DuplicateContactId(i64),
}
