use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedReceiver;
use twitch_irc::{ClientConfig, login::StaticLoginCredentials, message::ServerMessage};

use crate::auth;
use crate::builtins::register_builtins;
use crate::chat::twitch::{to_incoming_message, TwitchAdapter, TwitchChatClient};
use crate::chat::ChatClient;
use crate::commands::Dispatcher;
use crate::config::Config;

pub struct Bot {
    pub channels: Vec<String>,
    pub chat_client: Arc<TwitchChatClient>,
    pub chat_incoming_messages: UnboundedReceiver<ServerMessage>,
    pub dispatcher: Arc<Dispatcher>,
}

impl Bot {
    pub async fn new(config: &Config) -> anyhow::Result<Bot> {
        let twitch = &config.app_config.twitch;
        let token = auth::load_user_token(twitch).await?;
        let yourself = auth::bot_identity(&token, twitch.bot_name.as_str());

        // Create Twitch chat IRC client
        let (chat_client, chat_incoming_messages) = Bot::create_irc_client(
            yourself.login.clone(),
            token.access_token.secret().clone(),
        );
        let chat_client = Arc::new(chat_client);

        let adapter = TwitchAdapter::new(chat_client.clone(), yourself, Handle::current());
        let adapter: Arc<dyn ChatClient> = Arc::new(adapter);

        // Create command dispatcher
        let mut dispatcher = Dispatcher::new(adapter);
        let commands = &config.app_config.commands;

        dispatcher.set_missing_permissions_message(commands.missing_permissions_message.clone());

        for (user_id, permissions) in config.app_config.permissions.iter() {
            for permission in permissions {
                dispatcher.permissions().grant(user_id, permission);
            }
        }

        register_builtins(&mut dispatcher, commands)?;

        log::info!(
            "Started bot '{}' with {} commands",
            dispatcher.client().yourself().login,
            dispatcher.registry().len()
        );

        Ok(Bot {
            channels: twitch.channels.clone(),
            chat_client,
            chat_incoming_messages,
            dispatcher: Arc::new(dispatcher),
        })
    }

    pub fn create_irc_client(bot_name: String, bot_token: String) -> (TwitchChatClient, UnboundedReceiver<ServerMessage>) {
        let credentials = StaticLoginCredentials::new(bot_name, Option::Some(bot_token));
        let chat_client_config = ClientConfig::new_simple(credentials);

        let (incoming_messages, client) = TwitchChatClient::new(chat_client_config);

        (client, incoming_messages)
    }

    pub async fn start_chat_processor(self) -> anyhow::Result<()> {
        log::debug!("Starting bot's chat processor");

        let Bot { channels, chat_client, mut chat_incoming_messages, dispatcher } = self;

        let chat_task_handle = tokio::spawn(async move {
            while let Some(message) = chat_incoming_messages.recv().await {
                process_message(&dispatcher, message);
            }
        });

        for channel in channels {
            log::info!("Joining channel '{}'", channel);
            chat_client.join(channel);
        }

        chat_task_handle.await?;

        Ok(())
    }
}

fn process_message(dispatcher: &Arc<Dispatcher>, message: ServerMessage) {
    if let Some(incoming) = to_incoming_message(&message) {
        log::info!("<{}>: {}", incoming.author.name, incoming.content);

        // Synchronous commands run right here and hold up the following messages
        let outcome = tokio::task::block_in_place(|| dispatcher.handle_message(incoming));
        log::debug!("Dispatch outcome: {:?}", outcome);

        return;
    }

    match message {
        ServerMessage::ClearChat(message) => {
            log::info!("Chat in channel '{}' has been cleared", message.channel_login);
        },
        ServerMessage::Join(message) => {
            log::info!("Joined channel '{}'", message.channel_login);
        },
        ServerMessage::Notice(message) => {
            log::info!("NOTICE: {}", message.message_text);
        },
        ServerMessage::Part(message) => {
            log::info!("Left channel '{}'", message.channel_login);
        },
        ServerMessage::Reconnect(_) => {
            log::debug!("Reconnected");
        },
        ServerMessage::UserNotice(message) => {
            log::info!("USER NOTICE: {}", message.message_text.clone().unwrap_or("none".to_string()));
        },
        _ => {}
    }
}
