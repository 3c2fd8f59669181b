use crate::builtins::CommandItem;
use crate::commands::{Arg, CommandExecutor, CommandSettings, ParamKind};

pub struct HelloCommand;

impl HelloCommand {
    pub fn default() -> CommandItem {
        CommandItem::HelloCommand(Self)
    }

    pub fn settings(prefix: &str) -> CommandSettings {
        CommandSettings::new(&[format!("{}hello", prefix), format!("{}hi", prefix)])
            .description("Says 'Hello, <username>' in the chat")
    }
}

impl CommandExecutor for HelloCommand {
    fn parameters(&self) -> Vec<ParamKind> {
        vec![ParamKind::User]
    }

    fn execute(&self, args: Vec<Arg>) -> anyhow::Result<Option<String>> {
        let user = args
            .first()
            .and_then(Arg::as_user)
            .ok_or_else(|| anyhow::anyhow!("Missing message author"))?;

        Ok(Option::Some(format!("Hello, {}!", user.name)))
    }
}

#[cfg(test)]
mod tests {
    use super::HelloCommand;
    use crate::chat::mock::user;
    use crate::commands::{Arg, CommandExecutor};

    #[test]
    fn greets_the_author() {
        let reply = HelloCommand.execute(vec![Arg::User(user("7", "someone"))]).unwrap();

        assert_eq!(reply, Option::Some("Hello, someone!".to_string()));
    }

    #[test]
    fn fails_without_author() {
        assert!(HelloCommand.execute(vec![Arg::Null]).is_err());
    }
}
