//! # Command Model
//!
//! A command is a set of names, a description, a category, a flexibility flag, an ordered
//! argument list and exactly one handler.
//!
//! Commands are declared in two phases: [`Command::global`], [`Command::group`] or
//! [`Command::direct`] start a [`CommandBuilder`], and [`CommandBuilder::execute`] binds the
//! argument tuple together with the handler and returns the finished, immutable [`Command`].

use futures::FutureExt;
use futures::future::BoxFuture;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::application::arguments::{ArgumentList, DynArgument};
use crate::application::bundle::ArgumentBundle;
use crate::domain::error::{BundleError, RegistrationError};
use crate::domain::traits::CommandContext;
use crate::domain::types::Source;

pub const DEFAULT_DESCRIPTION: &str = "<No Description>";

pub type HandlerFuture = BoxFuture<'static, anyhow::Result<()>>;

type Handler =
    Arc<dyn Fn(ArgumentBundle, Invocation) -> Result<HandlerFuture, BundleError> + Send + Sync>;

/// Where a command may be run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Anywhere,
    Group,
    Direct,
}

impl Scope {
    pub fn permits(&self, source: &Source) -> bool {
        match self {
            Scope::Anywhere => true,
            Scope::Group => source.is_group(),
            Scope::Direct => source.is_direct(),
        }
    }
}

/// Everything the dispatcher knows about one invocation besides the arguments.
pub struct Invocation {
    pub context: Arc<dyn CommandContext>,
    /// The name the user typed, as typed.
    pub invoked_as: String,
}

/// Passed to a handler: the typed arguments plus the invocation context.
pub struct CommandEvent<A> {
    pub args: A,
    pub context: Arc<dyn CommandContext>,
    pub invoked_as: String,
}

impl<A> CommandEvent<A> {
    pub fn source(&self) -> &Source {
        self.context.source()
    }

    /// Reply in the conversation the command came from.
    pub async fn respond(&self, content: &str) -> anyhow::Result<()> {
        self.context
            .reply(content)
            .await
            .map_err(|e| anyhow::anyhow!(e))
    }
}

/// First phase of a command declaration: everything except the handler.
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    names: Vec<String>,
    description: String,
    flexible: bool,
    scope: Scope,
}

impl CommandBuilder {
    fn new<I, S>(names: I, scope: Scope) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            description: DEFAULT_DESCRIPTION.to_string(),
            flexible: false,
            scope,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Accept the arguments in any order.
    pub fn flexible(mut self) -> Self {
        self.flexible = true;
        self
    }

    /// Bind the argument list and the handler, finishing the declaration.
    ///
    /// `arguments` is a tuple of zero to five argument types; the handler receives a
    /// [`CommandEvent`] whose `args` is the tuple of their outputs.
    pub fn execute<L, F, Fut>(self, arguments: L, handler: F) -> Command
    where
        L: ArgumentList,
        F: Fn(CommandEvent<L::Output>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let handler: Handler = Arc::new(
            move |bundle: ArgumentBundle,
                  invocation: Invocation|
                  -> Result<HandlerFuture, BundleError> {
                let args = L::from_bundle(bundle)?;
                let event = CommandEvent {
                    args,
                    context: invocation.context,
                    invoked_as: invocation.invoked_as,
                };
                Ok(handler(event).boxed())
            },
        );

        Command {
            names: self.names,
            description: self.description,
            category: String::new(),
            flexible: self.flexible,
            scope: self.scope,
            arguments: arguments.into_arguments(),
            handler,
        }
    }
}

/// A fully declared command. Immutable apart from the category, which the
/// registering [`CommandSet`](crate::application::registry::CommandSet) assigns.
#[derive(Clone)]
pub struct Command {
    names: Vec<String>,
    description: String,
    category: String,
    flexible: bool,
    scope: Scope,
    arguments: Vec<Arc<dyn DynArgument>>,
    handler: Handler,
}

impl Command {
    /// A command that can be executed from anywhere.
    pub fn global<I, S>(names: I) -> CommandBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandBuilder::new(names, Scope::Anywhere)
    }

    /// A command that can only be executed in a group conversation.
    pub fn group<I, S>(names: I) -> CommandBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandBuilder::new(names, Scope::Group)
    }

    /// A command that can only be executed in a direct conversation.
    pub fn direct<I, S>(names: I) -> CommandBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandBuilder::new(names, Scope::Direct)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The first declared name.
    pub fn name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_flexible(&self) -> bool {
        self.flexible
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn arguments(&self) -> &[Arc<dyn DynArgument>] {
        &self.arguments
    }

    pub fn parameter_count(&self) -> usize {
        self.arguments.len()
    }

    /// Case-insensitive match against any of the command's names.
    pub fn matches(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.names.iter().any(|n| n.to_lowercase() == lowered)
    }

    /// Usage line such as `ban <Mention> <reason...>`. Optional slots are bracketed.
    pub fn usage(&self) -> String {
        let mut usage = self.name().to_string();
        for argument in &self.arguments {
            let label = if argument.is_greedy() {
                format!("{}...", argument.label())
            } else {
                argument.label().to_string()
            };
            if argument.is_optional() {
                usage.push_str(&format!(" [{label}]"));
            } else {
                usage.push_str(&format!(" <{label}>"));
            }
        }
        usage
    }

    /// Turn a parsed bundle into the handler's future.
    pub fn invoke(
        &self,
        bundle: ArgumentBundle,
        invocation: Invocation,
    ) -> Result<HandlerFuture, BundleError> {
        (self.handler)(bundle, invocation)
    }

    pub(crate) fn set_category(&mut self, category: &str) {
        self.category = category.to_string();
    }

    /// Checks the declaration itself; registry-wide checks happen on registration.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        if self.names.is_empty() {
            return Err(RegistrationError::EmptyNames);
        }
        if let Some(bad) = self
            .names
            .iter()
            .find(|n| n.is_empty() || n.chars().any(char::is_whitespace))
        {
            return Err(RegistrationError::InvalidName(bad.clone()));
        }

        let last = self.arguments.len().saturating_sub(1);
        for (slot, argument) in self.arguments.iter().enumerate() {
            if !argument.is_greedy() {
                continue;
            }
            if self.flexible {
                return Err(RegistrationError::FlexibleGreedy(self.name().to_string()));
            }
            if slot != last {
                return Err(RegistrationError::GreedyNotLast {
                    command: self.name().to_string(),
                    slot: slot + 1,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("names", &self.names)
            .field("category", &self.category)
            .field("flexible", &self.flexible)
            .field("scope", &self.scope)
            .field("arguments", &self.arguments.iter().map(|a| a.label()).collect::<Vec<_>>())
            .finish()
    }
}
