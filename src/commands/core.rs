use std::fmt;
use std::sync::Arc;

use enum_dispatch::enum_dispatch;

use crate::chat::{Channel, ChatClient, IncomingMessage, Receiver, Server, User};

/// Metadata attached to a command when it is registered
#[derive(Clone, Debug)]
pub struct CommandSettings {
    /// Tokens that trigger the command, matched case-insensitively
    pub aliases: Vec<String>,
    pub description: String,
    pub usage: String,
    /// Whether the help listing includes the command
    pub show_in_help: bool,
    /// The command only triggers when the message starts with the bot's mention tag
    pub requires_mention: bool,
    pub private_messages: bool,
    pub channel_messages: bool,
    /// Empty or "none" means everybody may use the command
    pub required_permission: String,
    /// Run on a background worker instead of the event-delivery thread
    pub is_async: bool,
}

impl CommandSettings {
    pub fn new<S: AsRef<str>>(aliases: &[S]) -> Self {
        Self {
            aliases: aliases.iter().map(|alias| alias.as_ref().to_string()).collect(),
            description: String::from("none"),
            usage: String::new(),
            show_in_help: true,
            requires_mention: false,
            private_messages: true,
            channel_messages: true,
            required_permission: String::new(),
            is_async: false,
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn usage(mut self, usage: &str) -> Self {
        self.usage = usage.to_string();
        self
    }

    pub fn show_in_help(mut self, show: bool) -> Self {
        self.show_in_help = show;
        self
    }

    pub fn requires_mention(mut self, requires_mention: bool) -> Self {
        self.requires_mention = requires_mention;
        self
    }

    pub fn private_messages(mut self, allowed: bool) -> Self {
        self.private_messages = allowed;
        self
    }

    pub fn channel_messages(mut self, allowed: bool) -> Self {
        self.channel_messages = allowed;
        self
    }

    pub fn required_permission(mut self, permission: &str) -> Self {
        self.required_permission = permission.to_string();
        self
    }

    pub fn run_async(mut self, is_async: bool) -> Self {
        self.is_async = is_async;
        self
    }

    /// Primary alias, used when the command is listed
    pub fn name(&self) -> &str {
        self.aliases.first().map(String::as_str).unwrap_or("")
    }
}

/// Declared kind of one executor parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    /// The command token itself
    Command,
    /// Tokens after the command token
    Args,
    Message,
    Client,
    Channel,
    User,
    Receiver,
    Server,
    /// Anything the resolver has no value for, always resolved to `Arg::Null`
    Other(&'static str),
}

/// Resolved value for one executor parameter
#[derive(Clone)]
pub enum Arg {
    Command(String),
    Args(Vec<String>),
    Message(Arc<IncomingMessage>),
    Client(Arc<dyn ChatClient>),
    Channel(Channel),
    User(User),
    Receiver(Receiver),
    Server(Server),
    Null,
}

impl Arg {
    pub fn is_null(&self) -> bool {
        matches!(self, Arg::Null)
    }

    pub fn as_command(&self) -> Option<&str> {
        match self {
            Arg::Command(command) => Option::Some(command.as_str()),
            _ => Option::None,
        }
    }

    pub fn as_args(&self) -> Option<&[String]> {
        match self {
            Arg::Args(args) => Option::Some(args.as_slice()),
            _ => Option::None,
        }
    }

    pub fn as_message(&self) -> Option<&IncomingMessage> {
        match self {
            Arg::Message(message) => Option::Some(message.as_ref()),
            _ => Option::None,
        }
    }

    pub fn as_client(&self) -> Option<&Arc<dyn ChatClient>> {
        match self {
            Arg::Client(client) => Option::Some(client),
            _ => Option::None,
        }
    }

    pub fn as_channel(&self) -> Option<&Channel> {
        match self {
            Arg::Channel(channel) => Option::Some(channel),
            _ => Option::None,
        }
    }

    pub fn as_user(&self) -> Option<&User> {
        match self {
            Arg::User(user) => Option::Some(user),
            _ => Option::None,
        }
    }

    pub fn as_receiver(&self) -> Option<&Receiver> {
        match self {
            Arg::Receiver(receiver) => Option::Some(receiver),
            _ => Option::None,
        }
    }

    pub fn as_server(&self) -> Option<&Server> {
        match self {
            Arg::Server(server) => Option::Some(server),
            _ => Option::None,
        }
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Command(command) => f.debug_tuple("Command").field(command).finish(),
            Arg::Args(args) => f.debug_tuple("Args").field(args).finish(),
            Arg::Message(message) => f.debug_tuple("Message").field(message).finish(),
            Arg::Client(client) => f.debug_tuple("Client").field(&client.yourself().login).finish(),
            Arg::Channel(channel) => f.debug_tuple("Channel").field(channel).finish(),
            Arg::User(user) => f.debug_tuple("User").field(user).finish(),
            Arg::Receiver(receiver) => f.debug_tuple("Receiver").field(receiver).finish(),
            Arg::Server(server) => f.debug_tuple("Server").field(server).finish(),
            Arg::Null => f.write_str("Null"),
        }
    }
}

#[enum_dispatch(CommandItem)]
pub trait CommandExecutor: Send + Sync {
    /// Parameter kinds in the order `execute` expects its arguments
    fn parameters(&self) -> Vec<ParamKind>;

    /// Runs the command. `Some` non-empty text is sent back as a reply.
    fn execute(&self, args: Vec<Arg>) -> anyhow::Result<Option<String>>;

    fn handler_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Executor backed by a closure
pub struct FnCommand<F> {
    function: F,
    parameters: Vec<ParamKind>,
}

impl<F> FnCommand<F>
where
    F: Fn(Vec<Arg>) -> anyhow::Result<Option<String>> + Send + Sync,
{
    pub fn new(parameters: Vec<ParamKind>, function: F) -> Self {
        Self {
            function,
            parameters,
        }
    }
}

impl<F> CommandExecutor for FnCommand<F>
where
    F: Fn(Vec<Arg>) -> anyhow::Result<Option<String>> + Send + Sync,
{
    fn parameters(&self) -> Vec<ParamKind> {
        self.parameters.clone()
    }

    fn execute(&self, args: Vec<Arg>) -> anyhow::Result<Option<String>> {
        (self.function)(args)
    }
}

/// A registered command. Immutable once created.
pub struct CommandDescriptor {
    executor: Arc<dyn CommandExecutor>,
    parameters: Vec<ParamKind>,
    settings: CommandSettings,
}

impl CommandDescriptor {
    pub fn new(settings: CommandSettings, executor: Arc<dyn CommandExecutor>) -> Self {
        let parameters = executor.parameters();

        Self {
            executor,
            parameters,
            settings,
        }
    }

    pub fn settings(&self) -> &CommandSettings {
        &self.settings
    }

    pub fn parameters(&self) -> &[ParamKind] {
        &self.parameters
    }

    pub fn executor(&self) -> &dyn CommandExecutor {
        self.executor.as_ref()
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("handler", &self.executor.handler_name())
            .field("parameters", &self.parameters)
            .field("settings", &self.settings)
            .finish()
    }
}
