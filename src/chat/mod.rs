pub mod client;
pub mod entity;
#[cfg(test)]
pub mod mock;
pub mod twitch;

pub use self::client::{ChatClient, Task};
pub use self::entity::{Channel, IncomingMessage, Origin, Receiver, Server, User};
