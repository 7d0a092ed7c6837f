//! # Utility Commands
//!
//! Handles `.ping`, `.echo`, `.repeat` and `.time`.

use chrono::{Local, Utc};

use crate::application::arguments::{ArgumentTypeExt, Choice, Everything, IntegerRange};
use crate::application::command::Command;
use crate::application::registry::CommandSet;
use crate::interface::commands::help::{self, SharedCatalog};
use crate::strings::messages;

pub fn commands(catalog: SharedCatalog) -> CommandSet {
    CommandSet::new("Utility")
        .command(help::command(catalog))
        .command(
            Command::global(["ping"])
                .description("Check that the bot is alive")
                .execute((), |event| async move { event.respond(messages::PONG).await }),
        )
        .command(
            Command::global(["echo", "say"])
                .description("Repeat the given text")
                .execute((Everything.named("text"),), |event| async move {
                    event.respond(&event.args.0).await
                }),
        )
        .command(
            Command::global(["repeat"])
                .description("Repeat the given text up to five times")
                .execute(
                    (IntegerRange::new(1, 5).named("count"), Everything.named("text")),
                    |event| async move {
                        let (count, text) = &event.args;
                        let lines = vec![text.as_str(); *count as usize];
                        event.respond(&lines.join("\n")).await
                    },
                ),
        )
        .command(
            Command::global(["time"])
                .description("Show the current time")
                .execute(
                    (Choice::new(["utc", "local"]).named("zone").or_default("local".to_string()),),
                    |event| async move {
                        let now = match event.args.0.as_str() {
                            "utc" => Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                            _ => Local::now().format("%Y-%m-%d %H:%M:%S %:z").to_string(),
                        };
                        event.respond(&messages::current_time(&now)).await
                    },
                ),
        )
}
