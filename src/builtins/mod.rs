use enum_dispatch::enum_dispatch;

use current_command::CurrentCommand;
use echo_command::EchoCommand;
use grant_command::GrantCommand;
use hello_command::HelloCommand;
use help_command::HelpCommand;
use ping_command::PingCommand;

use crate::commands::{Arg, CommandExecutor, Dispatcher, ParamKind, RegistryError};
use crate::config::CommandsConfig;

pub mod current_command;
pub mod echo_command;
pub mod grant_command;
pub mod hello_command;
pub mod help_command;
pub mod ping_command;

#[enum_dispatch]
pub enum CommandItem {
    CurrentCommand(CurrentCommand),
    EchoCommand(EchoCommand),
    GrantCommand(GrantCommand),
    HelloCommand(HelloCommand),
    HelpCommand(HelpCommand),
    PingCommand(PingCommand),
}

/// Registers the bot's own commands, `help` last so it lists everything else
pub fn register_builtins(dispatcher: &mut Dispatcher, config: &CommandsConfig) -> Result<(), RegistryError> {
    let prefix = config.prefix.as_str();

    dispatcher.register_command(HelloCommand::settings(prefix), HelloCommand::default())?;
    dispatcher.register_command(CurrentCommand::settings(prefix), CurrentCommand::default())?;
    dispatcher.register_command(EchoCommand::settings(prefix), EchoCommand::default())?;
    dispatcher.register_command(PingCommand::settings(), PingCommand::default())?;

    let grant = GrantCommand::new(dispatcher.permissions().clone());
    dispatcher.register_command(GrantCommand::settings(prefix), grant)?;

    let help_settings = HelpCommand::settings(prefix);
    let help = HelpCommand::new(dispatcher.registry(), &help_settings);
    dispatcher.register_command(help_settings, help)?;

    Ok(())
}
