//! # Engine Errors
//!
//! Configuration errors raised while declaring and registering commands.
//! These are fatal at startup and never reach runtime dispatch.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("a command must have at least one name")]
    EmptyNames,

    #[error("invalid command name `{0}`: names must be non-empty and contain no whitespace")]
    InvalidName(String),

    #[error("duplicate command name `{0}`")]
    DuplicateName(String),

    #[error("command `{0}` is flexible but declares a multi-token argument")]
    FlexibleGreedy(String),

    #[error("command `{command}` declares multi-token argument #{slot} before the last slot")]
    GreedyNotLast { command: String, slot: usize },
}

/// The bundle handed to a handler did not match its declared argument list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BundleError {
    #[error("argument #{0} is missing from the bundle")]
    Missing(usize),

    #[error("argument #{0} has an unexpected type")]
    TypeMismatch(usize),

    #[error("bundle holds {0} unclaimed values")]
    Leftover(usize),
}
