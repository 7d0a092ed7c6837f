//! Free-text argument types.

use super::{ArgumentResult, ArgumentType, Consumption};
use crate::domain::traits::CommandContext;

/// Any single token, as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct Word;

impl ArgumentType for Word {
    type Output = String;

    fn name(&self) -> &str {
        "Word"
    }

    fn is_valid(&self, _token: &str, _context: &dyn CommandContext) -> bool {
        true
    }

    fn convert(&self, token: &str, _remaining: &[&str], _context: &dyn CommandContext) -> ArgumentResult<String> {
        ArgumentResult::Single(token.to_string())
    }
}

/// Every remaining token, joined by single spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct Everything;

impl ArgumentType for Everything {
    type Output = String;

    fn name(&self) -> &str {
        "Text"
    }

    fn consumption(&self) -> Consumption {
        Consumption::Multiple
    }

    fn is_valid(&self, _token: &str, _context: &dyn CommandContext) -> bool {
        true
    }

    fn convert(&self, _token: &str, remaining: &[&str], _context: &dyn CommandContext) -> ArgumentResult<String> {
        ArgumentResult::Multiple(remaining.join(" "), remaining.len())
    }
}

/// A phrase wrapped in double quotes, possibly spanning several tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quote;

impl ArgumentType for Quote {
    type Output = String;

    fn name(&self) -> &str {
        "Quote"
    }

    fn consumption(&self) -> Consumption {
        Consumption::Multiple
    }

    fn is_valid(&self, token: &str, _context: &dyn CommandContext) -> bool {
        token.starts_with('"')
    }

    fn convert(&self, token: &str, remaining: &[&str], _context: &dyn CommandContext) -> ArgumentResult<String> {
        let Some(opened) = token.strip_prefix('"') else {
            return ArgumentResult::Error(format!("`{token}` does not start with a quote"));
        };
        if let Some(phrase) = opened.strip_suffix('"') {
            return ArgumentResult::Multiple(phrase.to_string(), 1);
        }

        let Some(end) = remaining.iter().skip(1).position(|t| t.ends_with('"')) else {
            return ArgumentResult::Error("missing closing quote".to_string());
        };

        let consumed = end + 2;
        let joined = remaining[..consumed].join(" ");
        let phrase = joined
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(&joined);
        ArgumentResult::Multiple(phrase.to_string(), consumed)
    }
}
