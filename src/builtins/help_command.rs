use crate::builtins::CommandItem;
use crate::commands::{Arg, CommandExecutor, CommandRegistry, CommandSettings, ParamKind};

/// Lists commands that are visible in help
pub struct HelpCommand {
    listing: String,
}

impl HelpCommand {
    /// Snapshots `registry`, so it should be built after all other commands are registered
    pub fn new(registry: &CommandRegistry, settings: &CommandSettings) -> CommandItem {
        let mut entries: Vec<String> = registry
            .commands()
            .iter()
            .map(|command| command.settings())
            .filter(|settings| settings.show_in_help)
            .map(describe)
            .collect();

        if settings.show_in_help {
            entries.push(describe(settings));
        }

        CommandItem::HelpCommand(Self { listing: entries.join(" | ") })
    }

    pub fn settings(prefix: &str) -> CommandSettings {
        CommandSettings::new(&[format!("{}help", prefix), format!("{}commands", prefix)])
            .description("Shows this list")
    }
}

fn describe(settings: &CommandSettings) -> String {
    let mut entry = String::from(settings.name());

    if settings.requires_mention {
        entry = format!("@<bot> {}", entry);
    }

    if !settings.usage.is_empty() {
        entry = format!("{} {}", entry, settings.usage);
    }

    format!("{} - {}", entry, settings.description)
}

impl CommandExecutor for HelpCommand {
    fn parameters(&self) -> Vec<ParamKind> {
        Vec::new()
    }

    fn execute(&self, _args: Vec<Arg>) -> anyhow::Result<Option<String>> {
        Ok(Option::Some(self.listing.clone()))
    }
}
