use crate::builtins::CommandItem;
use crate::commands::{Arg, CommandExecutor, CommandSettings, ParamKind};

/// Answers `@<bot> ping`
pub struct PingCommand;

impl PingCommand {
    pub fn default() -> CommandItem {
        CommandItem::PingCommand(Self)
    }

    pub fn settings() -> CommandSettings {
        CommandSettings::new(&["ping"])
            .description("Checks whether the bot is alive")
            .requires_mention(true)
    }
}

impl CommandExecutor for PingCommand {
    fn parameters(&self) -> Vec<ParamKind> {
        Vec::new()
    }

    fn execute(&self, _args: Vec<Arg>) -> anyhow::Result<Option<String>> {
        Ok(Option::Some(String::from("Pong!")))
    }
}
