//! # Application Layer
//!
//! The command engine: argument types, the command model, the registry, the binder
//! and the dispatcher with its scheduler.

pub mod arguments;
pub mod bundle;
pub mod command;
pub mod dispatcher;
pub mod parser;
pub mod registry;
pub mod scheduler;

#[cfg(test)]
pub(crate) mod testing;
