//! # Parley
//!
//! A command-dispatch engine for chat bots. Messages are split into a command name and
//! tokens, the tokens are bound to the command's typed argument list, and the handler runs
//! as an independent task on a host-supplied scheduler.
//!
//! - Domain: context contracts, configuration, errors
//! - Application: arguments, commands, registry, binder, dispatcher, scheduler
//! - Infrastructure: a console event source for local use
//! - Interface: the bundled command sets
//!

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod strings;

pub use application::arguments::{ArgumentResult, ArgumentType, ArgumentTypeExt, Consumption};
pub use application::bundle::{ArgumentBundle, ParseResult};
pub use application::command::{Command, CommandBuilder, CommandEvent, Scope};
pub use application::dispatcher::{DispatchOutcome, Dispatcher};
pub use application::parser::parse_input_to_bundle;
pub use application::registry::{CommandRegistry, CommandSet};
pub use application::scheduler::{TaskScheduler, TokioScheduler};
pub use domain::error::RegistrationError;
pub use domain::traits::{CommandContext, EventSource, IncomingMessage};
pub use domain::types::{ContextKind, Source};
