use std::sync::Arc;

use tokio::runtime::Handle;
use twitch_irc::{login::StaticLoginCredentials, message::ServerMessage, TwitchIRCClient, WSSTransport};

use super::client::{ChatClient, Task};
use super::entity::{Channel, IncomingMessage, Origin, Server, User};

pub type TwitchChatClient = TwitchIRCClient<WSSTransport, StaticLoginCredentials>;

/// Binds the command layer to a Twitch IRC connection
pub struct TwitchAdapter {
    chat_client: Arc<TwitchChatClient>,
    runtime: Handle,
    yourself: User,
}

impl TwitchAdapter {
    pub fn new(chat_client: Arc<TwitchChatClient>, yourself: User, runtime: Handle) -> Self {
        Self {
            chat_client,
            runtime,
            yourself,
        }
    }

    pub fn send_privmsg(&self, channel: String, message: String) {
        let client = self.chat_client.clone();

        self.runtime.spawn(async move {
            let result = client.privmsg(channel.clone(), message.clone()).await;

            if result.is_err() {
                log::error!("Failed to send privmsg to channel '{}'!", channel);
            } else {
                log::info!("ME: {}", message);
            }
        });
    }
}

impl ChatClient for TwitchAdapter {
    fn yourself(&self) -> &User {
        &self.yourself
    }

    fn reply(&self, message: &IncomingMessage, text: String) {
        let (channel, text) = reply_privmsg(&self.yourself, message, text);

        self.send_privmsg(channel, text);
    }

    fn submit(&self, task: Task) {
        self.runtime.spawn_blocking(task);
    }
}

/// Channel and text of the PRIVMSG answering `message`.
/// Whispers can only be sent as a /w command from some joined channel, the bot's own one is used.
pub fn reply_privmsg(yourself: &User, message: &IncomingMessage, text: String) -> (String, String) {
    match &message.origin {
        Origin::Channel(channel) => (channel.name.clone(), text),
        Origin::Private => (yourself.login.clone(), format!("/w {} {}", message.author.login, text)),
    }
}

/// Converts chat-carrying server messages, everything else is `None`
pub fn to_incoming_message(message: &ServerMessage) -> Option<IncomingMessage> {
    match message {
        ServerMessage::Privmsg(message) => {
            let server = Server {
                id: message.channel_id.clone(),
                name: message.channel_login.clone(),
            };
            let channel = Channel {
                id: message.channel_id.clone(),
                name: message.channel_login.clone(),
                server: Option::Some(server),
            };

            Option::Some(IncomingMessage {
                id: Option::Some(message.message_id.clone()),
                author: User::new(
                    message.sender.id.clone(),
                    message.sender.login.clone(),
                    message.sender.name.clone(),
                ),
                content: message.message_text.clone(),
                origin: Origin::Channel(channel),
            })
        },
        ServerMessage::Whisper(message) => Option::Some(IncomingMessage {
            id: Option::None,
            author: User::new(
                message.sender.id.clone(),
                message.sender.login.clone(),
                message.sender.name.clone(),
            ),
            content: message.message_text.clone(),
            origin: Origin::Private,
        }),
        _ => Option::None,
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use twitch_irc::message::{IRCMessage, ServerMessage};

    use super::{reply_privmsg, to_incoming_message};
    use crate::chat::entity::{Origin, User};
    use crate::chat::mock::{channel_message, private_message, user};

    fn parse(raw: &str) -> ServerMessage {
        let irc_message = IRCMessage::parse(raw).unwrap();

        ServerMessage::try_from(irc_message).unwrap()
    }

    #[test]
    fn privmsg_becomes_channel_message() {
        let message = parse(
            "@badge-info=;badges=;color=#0000FF;display-name=JuN1oRRRR;emotes=;flags=;\
             id=e9d998c3-36f1-430f-89ec-6b887c28af36;mod=0;room-id=11148817;subscriber=0;\
             tmi-sent-ts=1594545155039;turbo=0;user-id=29803735;user-type= \
             :jun1orrrr!jun1orrrr@jun1orrrr.tmi.twitch.tv PRIVMSG #pajlada :dank cam",
        );

        let incoming = to_incoming_message(&message).unwrap();

        assert_eq!(incoming.author.id, "29803735");
        assert_eq!(incoming.author.login, "jun1orrrr");
        assert_eq!(incoming.content, "dank cam");
        assert!(!incoming.is_private());

        let channel = incoming.channel().unwrap();
        assert_eq!(channel.name, "pajlada");
        assert_eq!(channel.id, "11148817");
        assert_eq!(incoming.server().map(|s| s.name.as_str()), Option::Some("pajlada"));
    }

    #[test]
    fn whisper_becomes_private_message() {
        let message = parse(
            "@badges=;color=#19E6E6;display-name=randers;emotes=25:22-26;message-id=1;\
             thread-id=40286300_553170741;turbo=0;user-id=40286300;user-type= \
             :randers!randers@randers.tmi.twitch.tv WHISPER randers811 :hello, this is a test Kappa",
        );

        let incoming = to_incoming_message(&message).unwrap();

        assert_eq!(incoming.author.login, "randers");
        assert_eq!(incoming.origin, Origin::Private);
        assert_eq!(incoming.content, "hello, this is a test Kappa");
    }

    #[test]
    fn other_messages_are_skipped() {
        let message = parse("PING :tmi.twitch.tv");

        assert!(to_incoming_message(&message).is_none());
    }

    #[test]
    fn channel_replies_go_to_the_channel() {
        let bot = User::new("1", "develbot", "DevelBot");
        let message = channel_message(user("7", "someone"), "~hello");

        assert_eq!(
            reply_privmsg(&bot, &message, "Hello, someone!".to_string()),
            ("develchat".to_string(), "Hello, someone!".to_string())
        );
    }

    #[test]
    fn whisper_replies_use_w_command() {
        let bot = User::new("1", "develbot", "DevelBot");
        let message = private_message(user("7", "someone"), "~hello");

        assert_eq!(
            reply_privmsg(&bot, &message, "Hello, someone!".to_string()),
            ("develbot".to_string(), "/w someone Hello, someone!".to_string())
        );
    }
}
