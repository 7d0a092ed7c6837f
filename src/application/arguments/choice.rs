//! Enumerated choices.

use super::{ArgumentResult, ArgumentType};
use crate::domain::traits::CommandContext;

/// One of a fixed set of words, matched case-insensitively.
/// Converts to the canonical spelling given at construction.
#[derive(Debug, Clone)]
pub struct Choice {
    options: Vec<String>,
}

impl Choice {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    fn find(&self, token: &str) -> Option<&String> {
        let lowered = token.to_lowercase();
        self.options.iter().find(|option| option.to_lowercase() == lowered)
    }
}

impl ArgumentType for Choice {
    type Output = String;

    fn name(&self) -> &str {
        "Choice"
    }

    fn is_valid(&self, token: &str, _context: &dyn CommandContext) -> bool {
        self.find(token).is_some()
    }

    fn convert(&self, token: &str, _remaining: &[&str], _context: &dyn CommandContext) -> ArgumentResult<String> {
        match self.find(token) {
            Some(option) => ArgumentResult::Single(option.clone()),
            None => ArgumentResult::Error(format!(
                "`{token}` is not one of: {}",
                self.options.join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::RecordingContext;

    #[test]
    fn test_choice_is_case_insensitive() {
        let ctx = RecordingContext::direct("bob");
        let choice = Choice::new(["Daily", "Weekly"]);
        assert!(choice.is_valid("daily", &ctx));
        assert_eq!(choice.convert("WEEKLY", &["WEEKLY"], &ctx), ArgumentResult::Single("Weekly".into()));
        assert_eq!(
            choice.convert("monthly", &["monthly"], &ctx),
            ArgumentResult::Error("`monthly` is not one of: Daily, Weekly".into())
        );
    }
}
