//! # Command Dispatcher
//!
//! Turns an incoming message into a scheduled handler invocation.
//!
//! Resolution and binding are synchronous. The handler, and any reply explaining why a
//! command was rejected, run as tasks on the injected [`TaskScheduler`].

use futures::FutureExt;
use std::sync::Arc;

use crate::application::bundle::ParseResult;
use crate::application::command::{Invocation, Scope};
use crate::application::parser::parse_input_to_bundle;
use crate::application::registry::CommandRegistry;
use crate::application::scheduler::TaskScheduler;
use crate::domain::traits::CommandContext;
use crate::strings::{logs, messages};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Plain chat text or an unknown command name. Nothing was sent.
    NotACommand,
    /// The command exists but may not run in this kind of conversation.
    WrongContext { command: String, required: Scope },
    /// The arguments did not bind; `reason` was sent back.
    Rejected { command: String, reason: String },
    /// The handler was handed to the scheduler.
    Scheduled { command: String },
}

pub struct Dispatcher {
    registry: Arc<CommandRegistry>,
    scheduler: Arc<dyn TaskScheduler>,
    prefix: String,
}

impl Dispatcher {
    pub fn new(
        registry: Arc<CommandRegistry>,
        scheduler: Arc<dyn TaskScheduler>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            scheduler,
            prefix: prefix.into(),
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Split a message into the candidate command name and its argument tokens.
    /// Returns `None` when the message does not start with the prefix.
    pub fn split<'a>(&self, text: &'a str) -> Option<(&'a str, Vec<&'a str>)> {
        let body = text.trim().strip_prefix(self.prefix.as_str())?;
        if body.starts_with(char::is_whitespace) {
            return None;
        }
        let mut tokens = body.split_whitespace();
        let head = tokens.next()?;
        Some((head, tokens.collect()))
    }

    pub fn dispatch(&self, text: &str, context: Arc<dyn CommandContext>) -> DispatchOutcome {
        let Some((head, tokens)) = self.split(text) else {
            return DispatchOutcome::NotACommand;
        };
        let Some(command) = self.registry.get(head) else {
            tracing::trace!("Ignoring unknown command '{}'", head);
            return DispatchOutcome::NotACommand;
        };

        let source = context.source();
        tracing::info!(
            "Dispatching cmd='{}' args='{}' sender='{}' channel='{}'",
            command.name(),
            tokens.join(" "),
            source.author_id,
            source.channel_id
        );

        if !command.scope().permits(source) {
            tracing::info!(
                "Command '{}' refused in {} context",
                command.name(),
                source.kind
            );
            let reason = messages::wrong_context(command.name(), command.scope());
            self.send_reply(context, reason);
            return DispatchOutcome::WrongContext {
                command: command.name().to_string(),
                required: command.scope(),
            };
        }

        let bundle = match parse_input_to_bundle(command, &tokens, context.as_ref()) {
            ParseResult::Success(bundle) => bundle,
            ParseResult::Fail(reason) => {
                self.send_reply(context, reason.clone());
                return DispatchOutcome::Rejected {
                    command: command.name().to_string(),
                    reason,
                };
            }
        };

        let label = format!("{}@{}", command.name(), source.channel_id);
        let invocation = Invocation {
            context: context.clone(),
            invoked_as: head.to_string(),
        };
        match command.invoke(bundle, invocation) {
            Ok(task) => {
                self.scheduler.spawn(label, task);
                DispatchOutcome::Scheduled {
                    command: command.name().to_string(),
                }
            }
            Err(e) => {
                tracing::error!("Command '{}' could not accept its arguments: {}", command.name(), e);
                self.send_reply(context, messages::INTERNAL_ERROR.to_string());
                DispatchOutcome::Rejected {
                    command: command.name().to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Whether `name` resolves to a command that may run here and accepts `tokens`.
    pub fn can_parse(&self, name: &str, tokens: &[&str], context: &dyn CommandContext) -> bool {
        self.registry.get(name).is_some_and(|command| {
            command.scope().permits(context.source())
                && parse_input_to_bundle(command, tokens, context).is_success()
        })
    }

    fn send_reply(&self, context: Arc<dyn CommandContext>, message: String) {
        let label = format!("reply@{}", context.source().channel_id);
        let task = async move {
            context.reply(&message).await.map_err(|e| {
                anyhow::anyhow!(logs::reply_failed(&context.source().channel_id, &e))
            })
        };
        self.scheduler.spawn(label, task.boxed());
    }
}
