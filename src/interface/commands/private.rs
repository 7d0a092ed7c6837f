//! # Private Commands
//!
//! Direct-message-only commands. Handles `.whoami`.

use crate::application::command::Command;
use crate::application::registry::CommandSet;
use crate::strings::messages;

pub fn commands() -> CommandSet {
    CommandSet::new("Private").command(
        Command::direct(["whoami"])
            .description("Show how the bot sees you")
            .execute((), |event| async move {
                let source = event.source();
                event
                    .respond(&messages::whoami(&source.author_name, &source.author_id))
                    .await
            }),
    )
}
