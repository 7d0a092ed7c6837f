//! # Domain Layer
//!
//! Core types and contracts shared by the engine and the hosting application.
//! Contains no dispatch logic itself.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;
