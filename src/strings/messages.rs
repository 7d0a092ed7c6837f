//! # Messages
//!
//! Failure reasons sent back to the user and replies of the bundled commands.

use crate::application::command::Scope;

pub fn missing_argument(name: &str) -> String {
    format!("missing argument: {name}")
}

pub fn invalid_token(position: usize, name: &str, token: &str) -> String {
    format!("invalid argument #{position} ({name}): `{token}`")
}

pub fn invalid_argument(position: usize, name: &str, reason: &str) -> String {
    format!("invalid argument #{position} ({name}): {reason}")
}

pub fn too_many_arguments(token: &str) -> String {
    format!("too many arguments: unexpected `{token}`")
}

pub fn wrong_context(command: &str, scope: Scope) -> String {
    match scope {
        Scope::Group => format!("`{command}` can only be used in a group conversation."),
        Scope::Direct => format!("`{command}` can only be used in a direct message."),
        Scope::Anywhere => format!("`{command}` cannot be used here."),
    }
}

pub const INTERNAL_ERROR: &str = "⚠️ Something went wrong while running that command.";

pub const PONG: &str = "🏓 Pong!";

pub fn banned(user: &str, reason: &str) -> String {
    format!("🔨 **{user}** was banned: {reason}")
}

pub fn scheduled(url: &str, minutes: i64) -> String {
    format!("⏰ Scheduled `{url}` in {minutes} minute(s).")
}

pub fn whoami(name: &str, id: &str) -> String {
    format!("You are **{name}** (`{id}`).")
}

pub fn current_time(time: &str) -> String {
    format!("🕒 {time}")
}

pub fn unknown_help_topic(topic: &str) -> String {
    format!("❓ No command named `{topic}`.")
}
