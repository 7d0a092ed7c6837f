//! # Interface
//!
//! The command sets shipped with the bot.

pub mod commands;
