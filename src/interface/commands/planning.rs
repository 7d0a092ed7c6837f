//! # Planning Commands
//!
//! Handles `.schedule`, which accepts its arguments in either order.

use std::time::Duration;

use crate::application::arguments::{ArgumentTypeExt, IntegerRange, Url};
use crate::application::command::Command;
use crate::application::registry::CommandSet;
use crate::strings::messages;

pub fn commands() -> CommandSet {
    CommandSet::new("Planning").command(
        Command::global(["schedule", "remind"])
            .description("Post a link again after some minutes")
            .flexible()
            .execute(
                (Url, IntegerRange::new(1, 1440).named("minutes")),
                |event| async move {
                    let (url, minutes) = &event.args;
                    event.respond(&messages::scheduled(url, *minutes)).await?;
                    tokio::time::sleep(Duration::from_secs(*minutes as u64 * 60)).await;
                    event.respond(&format!("⏰ {url}")).await
                },
            ),
    )
}
