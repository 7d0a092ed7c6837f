//! # Help Command
//!
//! Handles the `.help` command.
//! Lists every command by category, or describes a single command.

use std::sync::{Arc, OnceLock};

use crate::application::arguments::{ArgumentTypeExt, Word};
use crate::application::command::Command;
use crate::application::registry::CommandRegistry;
use crate::strings::{help, messages};

#[derive(Debug, Clone)]
struct HelpEntry {
    names: Vec<String>,
    usage: String,
    description: String,
    category: String,
}

/// Snapshot of the registry taken once registration is complete.
#[derive(Debug, Clone)]
pub struct HelpCatalog {
    bot_name: String,
    prefix: String,
    entries: Vec<HelpEntry>,
}

/// Filled after the registry is built, since `help` is itself registered in it.
pub type SharedCatalog = Arc<OnceLock<HelpCatalog>>;

impl HelpCatalog {
    pub fn from_registry(registry: &CommandRegistry, bot_name: &str, prefix: &str) -> Self {
        let entries = registry
            .iter()
            .map(|command| HelpEntry {
                names: command.names().to_vec(),
                usage: command.usage(),
                description: command.description().to_string(),
                category: command.category().to_string(),
            })
            .collect();
        Self {
            bot_name: bot_name.to_string(),
            prefix: prefix.to_string(),
            entries,
        }
    }

    pub fn overview(&self) -> String {
        let mut text = help::header(&self.bot_name, &self.prefix);
        let mut current: Option<&str> = None;
        for entry in &self.entries {
            if current != Some(entry.category.as_str()) {
                text.push_str(&help::category(&entry.category));
                current = Some(&entry.category);
            }
            text.push_str(&help::entry(&self.prefix, &entry.usage, &entry.description));
        }
        text
    }

    pub fn describe(&self, name: &str) -> Option<String> {
        let lowered = name.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.names.iter().any(|n| n.to_lowercase() == lowered))
            .map(|entry| help::detail(&self.prefix, &entry.usage, &entry.description, &entry.names))
    }
}

pub fn command(catalog: SharedCatalog) -> Command {
    Command::global(["help", "h"])
        .description("List commands, or describe one")
        .execute((Word.named("command").optional(),), move |event| {
            let catalog = catalog.clone();
            async move {
                let Some(catalog) = catalog.get() else {
                    return event.respond(messages::INTERNAL_ERROR).await;
                };
                let text = match &event.args.0 {
                    Some(topic) => catalog
                        .describe(topic)
                        .unwrap_or_else(|| messages::unknown_help_topic(topic)),
                    None => catalog.overview(),
                };
                event.respond(&text).await
            }
        })
}
