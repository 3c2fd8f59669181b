use parking_lot::Mutex;

use super::client::{ChatClient, Task};
use super::entity::{Channel, IncomingMessage, Origin, Server, User};

/// In-memory client: records replies and queues submitted tasks until `run_pending`
pub struct MockClient {
    yourself: User,
    replies: Mutex<Vec<(IncomingMessage, String)>>,
    tasks: Mutex<Vec<Task>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self {
            yourself: User::new("1", "bot", "Bot"),
            replies: Mutex::new(Vec::new()),
            tasks: Mutex::new(Vec::new()),
        }
    }

    pub fn replies(&self) -> Vec<String> {
        self.replies.lock().iter().map(|(_, text)| text.clone()).collect()
    }

    pub fn replied_to(&self) -> Vec<IncomingMessage> {
        self.replies.lock().iter().map(|(message, _)| message.clone()).collect()
    }

    pub fn pending(&self) -> usize {
        self.tasks.lock().len()
    }

    pub fn run_pending(&self) -> usize {
        let tasks: Vec<Task> = self.tasks.lock().drain(..).collect();
        let count = tasks.len();

        for task in tasks {
            task();
        }

        count
    }
}

impl ChatClient for MockClient {
    fn yourself(&self) -> &User {
        &self.yourself
    }

    fn reply(&self, message: &IncomingMessage, text: String) {
        self.replies.lock().push((message.clone(), text));
    }

    fn submit(&self, task: Task) {
        self.tasks.lock().push(task);
    }
}

pub fn user(id: &str, login: &str) -> User {
    User::new(id, login, login)
}

pub fn room(name: &str) -> Channel {
    Channel {
        id: format!("room-{}", name),
        name: name.to_string(),
        server: Option::Some(Server { id: format!("room-{}", name), name: name.to_string() }),
    }
}

pub fn channel_message(author: User, content: &str) -> IncomingMessage {
    IncomingMessage {
        id: Option::Some("msg-1".to_string()),
        author,
        content: content.to_string(),
        origin: Origin::Channel(room("develchat")),
    }
}

pub fn private_message(author: User, content: &str) -> IncomingMessage {
    IncomingMessage {
        id: Option::None,
        author,
        content: content.to_string(),
        origin: Origin::Private,
    }
}
