use std::sync::Arc;

use crate::chat::{ChatClient, IncomingMessage};

use super::core::{Arg, ParamKind};

/// Builds the positional argument list for a command.
///
/// `tokens` are the effective tokens: the command token first, arguments after it.
/// Parameters without a value (a channel of a private message, an unknown kind) become `Arg::Null`.
pub fn resolve_arguments(
    parameters: &[ParamKind],
    tokens: &[&str],
    message: &Arc<IncomingMessage>,
    client: &Arc<dyn ChatClient>,
) -> Vec<Arg> {
    parameters
        .iter()
        .map(|kind| resolve(*kind, tokens, message, client))
        .collect()
}

fn resolve(kind: ParamKind, tokens: &[&str], message: &Arc<IncomingMessage>, client: &Arc<dyn ChatClient>) -> Arg {
    match kind {
        ParamKind::Command => Arg::Command(tokens.first().map(|t| t.to_string()).unwrap_or_default()),
        ParamKind::Args => Arg::Args(tokens.iter().skip(1).map(|t| t.to_string()).collect()),
        ParamKind::Message => Arg::Message(message.clone()),
        ParamKind::Client => Arg::Client(client.clone()),
        ParamKind::Channel => message.channel().cloned().map(Arg::Channel).unwrap_or(Arg::Null),
        ParamKind::User => Arg::User(message.author.clone()),
        ParamKind::Receiver => Arg::Receiver(message.receiver()),
        ParamKind::Server => message.server().cloned().map(Arg::Server).unwrap_or(Arg::Null),
        ParamKind::Other(_) => Arg::Null,
    }
}
