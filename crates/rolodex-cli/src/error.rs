use anyhow::Error;
use rolodex_config::ConfigError;
use rolodex_core::{CoreError, FieldErrors};
use rolodex_store::error::{StoreError, StoreErrorKind};
use rolodex_sync::SyncError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn not_found(message: impl Into<String>) -> Error {
    CliError::NotFound(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
                CliError::NotFound(_) => EXIT_NOT_FOUND,
            });
        }
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return ExitCode::from(store_exit_code(store_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if let Some(sync_err) = cause.downcast_ref::<SyncError>() {
            return ExitCode::from(sync_exit_code(sync_err));
        }
        if cause.downcast_ref::<CoreError>().is_some()
            || cause.downcast_ref::<FieldErrors>().is_some()
        {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::InvalidDataPath | StoreErrorKind::Core => EXIT_INVALID_INPUT,
        StoreErrorKind::MissingHomeDir
        | StoreErrorKind::Migration
        | StoreErrorKind::Json
        | StoreErrorKind::Sql
        | StoreErrorKind::Io => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidSeedUrl(_)
        | ConfigError::InvalidSeedTimeout(_)
        | ConfigError::InvalidDebounce(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

fn sync_exit_code(err: &SyncError) -> u8 {
    match err {
        SyncError::Unavailable(_) => EXIT_INVALID_INPUT,
        SyncError::Io(_) => EXIT_FAILURE,
        SyncError::Core(_) | SyncError::Parse(_) | SyncError::Json(_) => EXIT_INVALID_INPUT,
        #[cfg(feature = "http-seed")]
        SyncError::Http(_) => EXIT_FAILURE,
        #[cfg(feature = "http-seed")]
        SyncError::Url(_) => EXIT_INVALID_INPUT,
    }
}

#[cfg(test)]
mod tests {
    use super::{store_exit_code, EXIT_FAILURE, EXIT_INVALID_INPUT};
    use rolodex_core::CoreError;
    use rolodex_store::error::StoreError;

    #[test]
    fn store_errors_map_to_exit_codes() {
        let corrupt = serde_json::from_str::<Vec<u8>>("{").expect_err("invalid json");
        assert_eq!(store_exit_code(&StoreError::Json(corrupt)), EXIT_FAILURE);
        assert_eq!(
            store_exit_code(&StoreError::Core(CoreError::DuplicateContactId(7))),
            EXIT_INVALID_INPUT
        );
        assert_eq!(store_exit_code(&StoreError::MissingHomeDir), EXIT_FAILURE);
    }
}
