//! # Infrastructure Layer
//!
//! Adapters between the engine and the outside world.
//! Implements the traits defined in the Domain layer (`EventSource`, `CommandContext`).

pub mod console;
