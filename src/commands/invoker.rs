use std::panic::{self, AssertUnwindSafe};

use crate::chat::{ChatClient, IncomingMessage};

use super::core::{Arg, CommandDescriptor};

/// Runs the command and replies with its result, if any.
/// Failures are logged and never reach the chat.
pub fn invoke_command(command: &CommandDescriptor, client: &dyn ChatClient, message: &IncomingMessage, args: Vec<Arg>) {
    let executor = command.executor();
    let result = panic::catch_unwind(AssertUnwindSafe(|| executor.execute(args)));

    let reply = match result {
        Ok(Ok(reply)) => reply,
        Ok(Err(error)) => {
            log::warn!(
                "Cannot invoke command '{}' of {}: {:#}",
                command.settings().name(),
                executor.handler_name(),
                error
            );
            return;
        },
        Err(_) => {
            log::warn!(
                "Cannot invoke command '{}' of {}: handler panicked",
                command.settings().name(),
                executor.handler_name()
            );
            return;
        },
    };

    if let Some(text) = reply {
        if !text.is_empty() {
            client.reply(message, text);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::invoke_command;
    use crate::chat::mock::{channel_message, user, MockClient};
    use crate::commands::core::{CommandDescriptor, CommandSettings, FnCommand};

    fn descriptor(reply: anyhow::Result<Option<String>>) -> CommandDescriptor {
        let reply = parking_lot::Mutex::new(Option::Some(reply));
        let executor = FnCommand::new(Vec::new(), move |_| reply.lock().take().unwrap_or(Ok(Option::None)));

        CommandDescriptor::new(CommandSettings::new(&["~test"]), Arc::new(executor))
    }

    #[test]
    fn text_result_is_sent_as_reply() {
        let client = MockClient::new();
        let message = channel_message(user("7", "someone"), "~test");

        invoke_command(&descriptor(Ok(Option::Some("done".to_string()))), &client, &message, Vec::new());

        assert_eq!(client.replies(), vec!["done".to_string()]);
        assert_eq!(client.replied_to(), vec![message]);
    }

    #[test]
    fn empty_results_send_nothing() {
        let client = MockClient::new();
        let message = channel_message(user("7", "someone"), "~test");

        invoke_command(&descriptor(Ok(Option::None)), &client, &message, Vec::new());
        invoke_command(&descriptor(Ok(Option::Some(String::new()))), &client, &message, Vec::new());

        assert!(client.replies().is_empty());
    }

    #[test]
    fn failures_are_swallowed() {
        let client = MockClient::new();
        let message = channel_message(user("7", "someone"), "~test");

        invoke_command(&descriptor(Err(anyhow::anyhow!("boom"))), &client, &message, Vec::new());

        let panicking = FnCommand::new(Vec::new(), |_| -> anyhow::Result<Option<String>> { panic!("handler bug") });
        let command = CommandDescriptor::new(CommandSettings::new(&["~panic"]), Arc::new(panicking));
        invoke_command(&command, &client, &message, Vec::new());

        assert!(client.replies().is_empty());
    }
}
