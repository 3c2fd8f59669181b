use crate::builtins::CommandItem;
use crate::commands::{Arg, CommandExecutor, CommandSettings, ParamKind};

pub struct EchoCommand;

impl EchoCommand {
    pub fn default() -> CommandItem {
        CommandItem::EchoCommand(Self)
    }

    pub fn settings(prefix: &str) -> CommandSettings {
        CommandSettings::new(&[format!("{}echo", prefix)])
            .description("Repeats the given text")
            .usage("<text>")
    }
}

impl CommandExecutor for EchoCommand {
    fn parameters(&self) -> Vec<ParamKind> {
        vec![ParamKind::Args]
    }

    fn execute(&self, args: Vec<Arg>) -> anyhow::Result<Option<String>> {
        let words = args.first().and_then(Arg::as_args).unwrap_or(&[]);

        if words.is_empty() {
            return Ok(Option::None);
        }

        Ok(Option::Some(words.join(" ")))
    }
}

#[cfg(test)]
mod tests {
    use super::EchoCommand;
    use crate::commands::{Arg, CommandExecutor};

    #[test]
    fn joins_arguments() {
        let args = vec![Arg::Args(vec!["hello".to_string(), "world".to_string()])];

        assert_eq!(EchoCommand.execute(args).unwrap(), Option::Some("hello world".to_string()));
    }

    #[test]
    fn nothing_to_echo() {
        assert_eq!(EchoCommand.execute(vec![Arg::Args(Vec::new())]).unwrap(), Option::None);
    }
}
