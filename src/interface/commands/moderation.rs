//! # Moderation Commands
//!
//! Group-only commands. Handles `.ban`.

use crate::application::arguments::{ArgumentTypeExt, Everything, Mention};
use crate::application::command::Command;
use crate::application::registry::CommandSet;
use crate::strings::messages;

pub fn commands() -> CommandSet {
    CommandSet::new("Moderation").command(
        Command::group(["ban"])
            .description("Ban a member with a reason")
            .execute((Mention, Everything.named("reason")), |event| async move {
                let (user, reason) = &event.args;
                tracing::info!(
                    "{} banned {} in {}: {}",
                    event.source().author_id,
                    user,
                    event.source().channel_id,
                    reason
                );
                event.respond(&messages::banned(user, reason)).await
            }),
    )
}
