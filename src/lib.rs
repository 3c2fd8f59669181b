extern crate anyhow;
extern crate chrono;
extern crate clap;
extern crate enum_dispatch;
extern crate log;
extern crate parking_lot;
extern crate serde;
extern crate thiserror;
extern crate tokio;
extern crate toml;
extern crate twitch_irc;
extern crate twitch_oauth2;

// `commands` holds the `CommandExecutor` trait and must be declared before `builtins`,
// where `enum_dispatch` generates its impl for `CommandItem`
pub mod chat;
pub mod commands;
pub mod config;
pub mod builtins;
pub mod auth;
pub mod bot;
