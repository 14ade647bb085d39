//! # Built-in commands
//!
//! Handlers every chatr bot ships with, and [`builtin_commands`], the explicit registration list a host
//! hands to the command service (extended with its own commands).

mod builtin;
mod hello;
mod help;
mod list;
mod support;
mod version;

#[cfg(test)]
mod test;

pub use builtin::{builtin_commands, BuiltinOptions, DOCS_URL, FRAMEWORK_VERSION};
pub use hello::HelloCommand;
pub use help::HelpCommand;
pub use list::ListCommand;
pub use support::SupportCommand;
pub use version::VersionCommand;
