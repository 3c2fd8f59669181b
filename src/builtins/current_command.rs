use chrono::offset::Utc;
use chrono::{DateTime, Datelike};

use crate::builtins::CommandItem;
use crate::commands::{Arg, CommandExecutor, CommandSettings, ParamKind};

fn get_day_suffix(day: u32) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th"
    }
}

fn format_datetime(time: DateTime<Utc>) -> String {
    let day_suffix = get_day_suffix(time.day());
    let date_format_str = format!("%I:%M:%S %p on %d{} of %B, %G", day_suffix);

    format!("Current datetime: {}", time.format(date_format_str.as_str()))
}

pub struct CurrentCommand;

impl CurrentCommand {
    pub fn default() -> CommandItem {
        CommandItem::CurrentCommand(Self)
    }

    pub fn settings(prefix: &str) -> CommandSettings {
        CommandSettings::new(&[format!("{}current", prefix)])
            .description("Returns current datetime in UTC timezone")
            .run_async(true)
    }
}

impl CommandExecutor for CurrentCommand {
    fn parameters(&self) -> Vec<ParamKind> {
        Vec::new()
    }

    fn execute(&self, _args: Vec<Arg>) -> anyhow::Result<Option<String>> {
        Ok(Option::Some(format_datetime(Utc::now())))
    }
}
