use std::sync::Arc;

use parking_lot::RwLock;

use crate::chat::{ChatClient, IncomingMessage, User};

use super::arguments::resolve_arguments;
use super::core::{CommandDescriptor, CommandExecutor, CommandSettings};
use super::invoker::invoke_command;
use super::permissions::PermissionStore;
use super::registry::{CommandRegistry, RegistryError};

/// Why a message did not trigger a command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    OwnMessage,
    Empty,
    UnknownCommand,
    MissingMention,
    PrivateNotAllowed,
    ChannelNotAllowed,
}

/// What `Dispatcher::handle_message` did with a message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    Ignored(IgnoreReason),
    PermissionDenied,
    /// The command ran on the calling thread
    Invoked,
    /// The command was handed to a background worker
    Submitted,
}

/// Turns incoming chat messages into command invocations
pub struct Dispatcher {
    client: Arc<dyn ChatClient>,
    missing_permissions_message: RwLock<Option<String>>,
    permissions: Arc<PermissionStore>,
    registry: CommandRegistry,
}

impl Dispatcher {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self {
            client,
            missing_permissions_message: RwLock::new(Option::None),
            permissions: Arc::new(PermissionStore::new()),
            registry: CommandRegistry::new(),
        }
    }

    pub fn register_command<E>(&mut self, settings: CommandSettings, executor: E) -> Result<Arc<CommandDescriptor>, RegistryError>
    where
        E: CommandExecutor + 'static,
    {
        self.registry.register(settings, executor)
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn permissions(&self) -> &Arc<PermissionStore> {
        &self.permissions
    }

    pub fn client(&self) -> &Arc<dyn ChatClient> {
        &self.client
    }

    pub fn add_permission(&self, user: &User, permission: &str) {
        self.permissions.grant(&user.id, permission);
    }

    pub fn has_permission(&self, user: &User, permission: &str) -> bool {
        self.permissions.has_permission(&user.id, permission)
    }

    /// Notice sent to users lacking a command's permission. `None` keeps denials silent.
    pub fn set_missing_permissions_message(&self, message: Option<String>) {
        *self.missing_permissions_message.write() = message;
    }

    pub fn missing_permissions_message(&self) -> Option<String> {
        self.missing_permissions_message.read().clone()
    }

    pub fn handle_message(&self, message: IncomingMessage) -> Dispatch {
        if message.author.id == self.client.yourself().id {
            return Dispatch::Ignored(IgnoreReason::OwnMessage);
        }

        let message = Arc::new(message);
        let tokens: Vec<&str> = message.content.split_whitespace().collect();

        let first = match tokens.first() {
            Some(first) => *first,
            None => return Dispatch::Ignored(IgnoreReason::Empty),
        };

        let (command, effective) = match self.registry.lookup(first) {
            Some(command) => (command, &tokens[..]),
            // The first token may be a mention, but then only mention-requiring commands qualify
            None if tokens.len() > 1 => match self.registry.lookup(tokens[1]) {
                Some(command) if command.settings().requires_mention => (command, &tokens[1..]),
                _ => return Dispatch::Ignored(IgnoreReason::UnknownCommand),
            },
            None => return Dispatch::Ignored(IgnoreReason::UnknownCommand),
        };

        let settings = command.settings();

        if settings.requires_mention && first != self.client.mention_tag() {
            log::debug!("'{}' requires a mention, ignoring message from {}", settings.name(), message.author.login);
            return Dispatch::Ignored(IgnoreReason::MissingMention);
        }

        if message.is_private() && !settings.private_messages {
            return Dispatch::Ignored(IgnoreReason::PrivateNotAllowed);
        }

        if !message.is_private() && !settings.channel_messages {
            return Dispatch::Ignored(IgnoreReason::ChannelNotAllowed);
        }

        if !self.permissions.has_permission(&message.author.id, &settings.required_permission) {
            log::info!(
                "{} lacks permission '{}' for '{}'",
                message.author.login,
                settings.required_permission,
                settings.name()
            );

            if let Some(notice) = self.missing_permissions_message() {
                self.client.reply(&message, notice);
            }

            return Dispatch::PermissionDenied;
        }

        let args = resolve_arguments(command.parameters(), effective, &message, &self.client);

        log::info!("<{}> invoked '{}'", message.author.login, settings.name());

        if settings.is_async {
            let client = self.client.clone();
            let message = message.clone();

            self.client.submit(Box::new(move || {
                invoke_command(&command, client.as_ref(), &message, args);
            }));

            return Dispatch::Submitted;
        }

        invoke_command(&command, self.client.as_ref(), &message, args);

        Dispatch::Invoked
    }
}
