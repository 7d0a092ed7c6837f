//! # Help Text
//!
//! Formats the command listing shown by the `help` command.

pub fn header(bot_name: &str, prefix: &str) -> String {
    format!("**🤖 {bot_name} Help**\nUse: {prefix}command _args_\n")
}

pub fn category(name: &str) -> String {
    format!("\n**{name}**\n")
}

pub fn entry(prefix: &str, usage: &str, description: &str) -> String {
    format!("* {prefix}{usage}: {description}\n")
}

pub fn detail(prefix: &str, usage: &str, description: &str, aliases: &[String]) -> String {
    let mut text = format!("**{prefix}{usage}**\n{description}\n");
    if aliases.len() > 1 {
        text.push_str(&format!("Aliases: {}\n", aliases.join(", ")));
    }
    text
}
