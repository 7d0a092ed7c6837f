//! URL-shaped tokens.

use regex::Regex;
use std::sync::LazyLock;

use super::{ArgumentResult, ArgumentType};
use crate::domain::traits::CommandContext;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:https?://|www\.)[^\s/$.?#][^\s]*").expect("URL pattern is valid")
});

/// Returns true when the text contains something that looks like a web address.
pub fn contains_url(text: &str) -> bool {
    URL_PATTERN.is_match(text)
}

/// A token containing a web address. The token is kept verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct Url;

impl ArgumentType for Url {
    type Output = String;

    fn name(&self) -> &str {
        "URL"
    }

    fn is_valid(&self, token: &str, _context: &dyn CommandContext) -> bool {
        contains_url(token)
    }

    fn convert(&self, token: &str, _remaining: &[&str], _context: &dyn CommandContext) -> ArgumentResult<String> {
        ArgumentResult::Single(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_url() {
        assert!(contains_url("http://x.test"));
        assert!(contains_url("https://example.com/path?q=1"));
        assert!(contains_url("www.example.com"));
        assert!(contains_url("<https://example.com>"));
        assert!(!contains_url("example"));
        assert!(!contains_url("5"));
        assert!(!contains_url("http://"));
    }
}
