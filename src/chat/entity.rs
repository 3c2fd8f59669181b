#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    /// Platform id of the account, stable across renames
    pub id: String,
    /// Lower-cased login name
    pub login: String,
    /// Display name as shown in chat
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, login: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            login: login.into(),
            name: name.into(),
        }
    }

    pub fn mention_tag(&self) -> String {
        format!("@{}", self.login)
    }
}

/// Owner of a channel. A Twitch chat room belongs to exactly one broadcaster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Server {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub server: Option<Server>,
}

impl Channel {
    pub fn server(&self) -> Option<&Server> {
        self.server.as_ref()
    }
}

/// Whatever a reply to a message should be addressed to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Receiver {
    Channel(Channel),
    User(User),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    Private,
    Channel(Channel),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncomingMessage {
    pub id: Option<String>,
    pub author: User,
    pub content: String,
    pub origin: Origin,
}

impl IncomingMessage {
    pub fn is_private(&self) -> bool {
        matches!(self.origin, Origin::Private)
    }

    pub fn channel(&self) -> Option<&Channel> {
        match &self.origin {
            Origin::Channel(channel) => Option::Some(channel),
            Origin::Private => Option::None,
        }
    }

    pub fn server(&self) -> Option<&Server> {
        self.channel().and_then(Channel::server)
    }

    pub fn receiver(&self) -> Receiver {
        match &self.origin {
            Origin::Channel(channel) => Receiver::Channel(channel.clone()),
            Origin::Private => Receiver::User(self.author.clone()),
        }
    }
}
