//! # Command Registry
//!
//! Maps command names to commands. Built once at startup from [`CommandSet`]s,
//! then shared read-only by the dispatcher.

use std::collections::HashMap;

use crate::application::command::Command;
use crate::domain::error::RegistrationError;

/// A category of commands, registered together.
#[derive(Debug, Clone)]
pub struct CommandSet {
    category: String,
    commands: Vec<Command>,
}

impl CommandSet {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            commands: Vec::new(),
        }
    }

    pub fn command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
    /// Lowercased name -> index into `commands`.
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every command of `set` under its category.
    pub fn register_set(&mut self, set: CommandSet) -> Result<(), RegistrationError> {
        let CommandSet { category, commands } = set;
        for mut command in commands {
            command.set_category(&category);
            self.register(command)?;
        }
        Ok(())
    }

    /// Register a single command. Fails without modifying the registry if the
    /// declaration is invalid or any of its names is already taken.
    pub fn register(&mut self, command: Command) -> Result<(), RegistrationError> {
        command.validate()?;

        let mut keys: Vec<String> = Vec::with_capacity(command.names().len());
        for name in command.names() {
            let key = name.to_lowercase();
            if self.index.contains_key(&key) || keys.contains(&key) {
                return Err(RegistrationError::DuplicateName(name.clone()));
            }
            keys.push(key);
        }

        let position = self.commands.len();
        for key in keys {
            self.index.insert(key, position);
        }
        tracing::debug!(
            "Registered command '{}' ({} args) in category '{}'",
            command.name(),
            command.parameter_count(),
            command.category()
        );
        self.commands.push(command);
        Ok(())
    }

    /// Case-insensitive lookup by any name.
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.index
            .get(&name.to_lowercase())
            .and_then(|&i| self.commands.get(i))
    }

    /// Commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    /// Categories in the order they were first registered.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for command in &self.commands {
            if !seen.contains(&command.category()) {
                seen.push(command.category());
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
