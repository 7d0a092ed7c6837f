//! User mentions.

use super::{ArgumentResult, ArgumentType};
use crate::domain::traits::CommandContext;

/// A reference to a user: `@name`, `<@id>` or `<@!id>`.
///
/// `@me` resolves to the author of the invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mention;

impl Mention {
    fn target(token: &str) -> Option<&str> {
        if let Some(inner) = token.strip_prefix("<@").and_then(|t| t.strip_suffix('>')) {
            let id = inner.strip_prefix('!').unwrap_or(inner);
            return (!id.is_empty() && id.chars().all(|c| c.is_ascii_digit())).then_some(id);
        }
        token.strip_prefix('@').filter(|name| !name.is_empty() && !name.contains('@'))
    }
}

impl ArgumentType for Mention {
    type Output = String;

    fn name(&self) -> &str {
        "Mention"
    }

    fn is_valid(&self, token: &str, _context: &dyn CommandContext) -> bool {
        Self::target(token).is_some()
    }

    fn convert(&self, token: &str, _remaining: &[&str], context: &dyn CommandContext) -> ArgumentResult<String> {
        match Self::target(token) {
            Some(target) if target.eq_ignore_ascii_case("me") => {
                ArgumentResult::Single(context.source().author_id.clone())
            }
            Some(target) => ArgumentResult::Single(target.to_string()),
            None => ArgumentResult::Error(format!("`{token}` is not a user mention")),
        }
    }
}
