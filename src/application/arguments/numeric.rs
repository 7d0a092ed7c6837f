//! Numeric and boolean argument types.

use super::{ArgumentResult, ArgumentType};
use crate::domain::traits::CommandContext;

/// A base-10 signed integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integer;

impl ArgumentType for Integer {
    type Output = i64;

    fn name(&self) -> &str {
        "Integer"
    }

    fn is_valid(&self, token: &str, _context: &dyn CommandContext) -> bool {
        token.parse::<i64>().is_ok()
    }

    fn convert(&self, token: &str, _remaining: &[&str], _context: &dyn CommandContext) -> ArgumentResult<i64> {
        match token.parse::<i64>() {
            Ok(value) => ArgumentResult::Single(value),
            Err(_) => ArgumentResult::Error(format!("`{token}` is not a whole number")),
        }
    }
}

/// An integer restricted to an inclusive range.
#[derive(Debug, Clone, Copy)]
pub struct IntegerRange {
    min: i64,
    max: i64,
}

impl IntegerRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min: min.min(max),
            max: max.max(min),
        }
    }
}

impl ArgumentType for IntegerRange {
    type Output = i64;

    fn name(&self) -> &str {
        "Integer"
    }

    fn is_valid(&self, token: &str, _context: &dyn CommandContext) -> bool {
        token.parse::<i64>().is_ok()
    }

    fn convert(&self, token: &str, _remaining: &[&str], _context: &dyn CommandContext) -> ArgumentResult<i64> {
        match token.parse::<i64>() {
            Ok(value) if (self.min..=self.max).contains(&value) => ArgumentResult::Single(value),
            Ok(_) => ArgumentResult::Error(format!(
                "`{token}` must be between {} and {}",
                self.min, self.max
            )),
            Err(_) => ArgumentResult::Error(format!("`{token}` is not a whole number")),
        }
    }
}

/// A finite decimal number.
#[derive(Debug, Clone, Copy, Default)]
pub struct Number;

impl ArgumentType for Number {
    type Output = f64;

    fn name(&self) -> &str {
        "Number"
    }

    fn is_valid(&self, token: &str, _context: &dyn CommandContext) -> bool {
        token.parse::<f64>().is_ok_and(f64::is_finite)
    }

    fn convert(&self, token: &str, _remaining: &[&str], _context: &dyn CommandContext) -> ArgumentResult<f64> {
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => ArgumentResult::Single(value),
            _ => ArgumentResult::Error(format!("`{token}` is not a number")),
        }
    }
}

/// `true`/`false` and the usual spellings of yes and no.
#[derive(Debug, Clone, Copy, Default)]
pub struct Boolean;

impl Boolean {
    fn parse(token: &str) -> Option<bool> {
        match token.to_lowercase().as_str() {
            "true" | "yes" | "y" | "on" | "1" => Some(true),
            "false" | "no" | "n" | "off" | "0" => Some(false),
            _ => None,
        }
    }
}

impl ArgumentType for Boolean {
    type Output = bool;

    fn name(&self) -> &str {
        "Boolean"
    }

    fn is_valid(&self, token: &str, _context: &dyn CommandContext) -> bool {
        Self::parse(token).is_some()
    }

    fn convert(&self, token: &str, _remaining: &[&str], _context: &dyn CommandContext) -> ArgumentResult<bool> {
        match Self::parse(token) {
            Some(value) => ArgumentResult::Single(value),
            None => ArgumentResult::Error(format!("`{token}` is not true or false")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::RecordingContext;

    #[test]
    fn test_integer() {
        let ctx = RecordingContext::group("general", "alice");
        assert!(Integer.is_valid("-12", &ctx));
        assert!(!Integer.is_valid("12.5", &ctx));
        assert!(!Integer.is_valid("five", &ctx));
        assert_eq!(Integer.convert("5", &["5"], &ctx), ArgumentResult::Single(5));
    }

    #[test]
    fn test_integer_range() {
        let ctx = RecordingContext::group("general", "alice");
        let range = IntegerRange::new(1, 5);
        assert!(range.is_valid("9", &ctx));
        assert_eq!(range.convert("3", &["3"], &ctx), ArgumentResult::Single(3));
        assert_eq!(
            range.convert("9", &["9"], &ctx),
            ArgumentResult::Error("`9` must be between 1 and 5".to_string())
        );

        let swapped = IntegerRange::new(5, 1);
        assert_eq!(swapped.convert("2", &["2"], &ctx), ArgumentResult::Single(2));
    }

    #[test]
    fn test_number_rejects_non_finite() {
        let ctx = RecordingContext::direct("bob");
        assert!(Number.is_valid("2.5", &ctx));
        assert!(Number.is_valid("3", &ctx));
        assert!(!Number.is_valid("NaN", &ctx));
        assert!(!Number.is_valid("inf", &ctx));
    }

    #[test]
    fn test_boolean_spellings() {
        let ctx = RecordingContext::direct("bob");
        assert_eq!(Boolean.convert("YES", &["YES"], &ctx), ArgumentResult::Single(true));
        assert_eq!(Boolean.convert("off", &["off"], &ctx), ArgumentResult::Single(false));
        assert!(!Boolean.is_valid("maybe", &ctx));
    }
}
