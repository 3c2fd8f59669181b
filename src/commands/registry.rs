use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use super::core::{CommandDescriptor, CommandExecutor, CommandSettings};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("command has no aliases")]
    NoAliases,

    #[error("alias '{0}' is empty or contains whitespace")]
    InvalidAlias(String),

    #[error("alias '{0}' is already registered")]
    DuplicateAlias(String),
}

/// Commands keyed by lower-cased alias
#[derive(Debug, Default)]
pub struct CommandRegistry {
    by_alias: HashMap<String, Arc<CommandDescriptor>>,
    commands: Vec<Arc<CommandDescriptor>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command under all of its aliases. Nothing is inserted when any alias is rejected.
    pub fn register<E>(&mut self, settings: CommandSettings, executor: E) -> Result<Arc<CommandDescriptor>, RegistryError>
    where
        E: CommandExecutor + 'static,
    {
        if settings.aliases.is_empty() {
            return Err(RegistryError::NoAliases);
        }

        let mut keys: Vec<String> = Vec::with_capacity(settings.aliases.len());

        for alias in settings.aliases.iter() {
            if alias.is_empty() || alias.chars().any(char::is_whitespace) {
                return Err(RegistryError::InvalidAlias(alias.clone()));
            }

            let key = alias.to_lowercase();

            if self.by_alias.contains_key(&key) || keys.contains(&key) {
                return Err(RegistryError::DuplicateAlias(alias.clone()));
            }

            keys.push(key);
        }

        let descriptor = Arc::new(CommandDescriptor::new(settings, Arc::new(executor)));

        for key in keys {
            self.by_alias.insert(key, descriptor.clone());
        }

        self.commands.push(descriptor.clone());

        log::debug!("Registered command '{}' ({})", descriptor.settings().name(), descriptor.executor().handler_name());

        Ok(descriptor)
    }

    pub fn lookup(&self, token: &str) -> Option<Arc<CommandDescriptor>> {
        self.by_alias.get(&token.to_lowercase()).cloned()
    }

    /// Registered commands in registration order
    pub fn commands(&self) -> &[Arc<CommandDescriptor>] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
