use super::entity::{IncomingMessage, User};

/// Unit of work handed over to the client's background workers
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// What the command layer needs from the underlying chat client
pub trait ChatClient: Send + Sync {
    /// Account the bot is logged in as
    fn yourself(&self) -> &User;

    /// Token other users type to address the bot
    fn mention_tag(&self) -> String {
        self.yourself().mention_tag()
    }

    /// Sends `text` back to wherever `message` came from. Fire and forget.
    fn reply(&self, message: &IncomingMessage, text: String);

    /// Runs `task` on a background worker without waiting for it
    fn submit(&self, task: Task);
}
