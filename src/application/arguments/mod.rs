//! # Argument Types
//!
//! The unit of conversion and validation for one argument slot of a command.
//!
//! An [`ArgumentType`] decides whether a raw token is acceptable for its slot and converts it
//! into a typed value. Implement the trait to add new types; the parser only ever sees the
//! type-erased [`DynArgument`] view, so new types need no engine changes.

use std::any::Any;

use crate::domain::traits::CommandContext;

mod choice;
mod combinators;
mod list;
mod mention;
mod numeric;
mod text;
mod url;

pub use choice::Choice;
pub use combinators::{Named, Optional, WithDefault};
pub use list::ArgumentList;
pub use mention::Mention;
pub use numeric::{Boolean, Integer, IntegerRange, Number};
pub use text::{Everything, Quote, Word};
pub use url::Url;

/// How many tokens an argument claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consumption {
    /// Exactly one token.
    Single,
    /// A run of tokens whose length the argument reports from `convert`.
    Multiple,
}

/// Outcome of converting the head of the remaining input.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentResult<T> {
    /// The value, one token consumed.
    Single(T),
    /// The value and the number of tokens consumed.
    Multiple(T, usize),
    /// The token(s) could not be converted.
    Error(String),
}

impl<T> ArgumentResult<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ArgumentResult<U> {
        match self {
            ArgumentResult::Single(value) => ArgumentResult::Single(f(value)),
            ArgumentResult::Multiple(value, consumed) => ArgumentResult::Multiple(f(value), consumed),
            ArgumentResult::Error(reason) => ArgumentResult::Error(reason),
        }
    }
}

/// One argument slot of a command.
///
/// Conversion must not have side effects beyond reading the context; it may run
/// concurrently for simultaneous invocations.
pub trait ArgumentType: Send + Sync + 'static {
    type Output: Send + 'static;

    /// Display name used in usage strings and failure reasons.
    fn name(&self) -> &str;

    fn consumption(&self) -> Consumption {
        Consumption::Single
    }

    /// Whether `token` is acceptable as the head of this slot.
    fn is_valid(&self, token: &str, context: &dyn CommandContext) -> bool;

    /// Convert the head of the input. `remaining` starts with `token` itself.
    fn convert(
        &self,
        token: &str,
        remaining: &[&str],
        context: &dyn CommandContext,
    ) -> ArgumentResult<Self::Output>;

    /// Value used when the slot is left unfilled. `Some` marks the slot optional.
    fn default_value(&self) -> Option<Self::Output> {
        None
    }
}

pub type BoxedValue = Box<dyn Any + Send>;

/// Type-erased view of an [`ArgumentType`], as stored on a command.
pub trait DynArgument: Send + Sync {
    fn label(&self) -> &str;
    fn consumption_policy(&self) -> Consumption;
    fn validates(&self, token: &str, context: &dyn CommandContext) -> bool;
    fn convert_erased(
        &self,
        token: &str,
        remaining: &[&str],
        context: &dyn CommandContext,
    ) -> ArgumentResult<BoxedValue>;
    fn default_erased(&self) -> Option<BoxedValue>;

    fn is_optional(&self) -> bool {
        self.default_erased().is_some()
    }

    fn is_greedy(&self) -> bool {
        self.consumption_policy() == Consumption::Multiple
    }
}

impl<A: ArgumentType> DynArgument for A {
    fn label(&self) -> &str {
        ArgumentType::name(self)
    }

    fn consumption_policy(&self) -> Consumption {
        ArgumentType::consumption(self)
    }

    fn validates(&self, token: &str, context: &dyn CommandContext) -> bool {
        ArgumentType::is_valid(self, token, context)
    }

    fn convert_erased(
        &self,
        token: &str,
        remaining: &[&str],
        context: &dyn CommandContext,
    ) -> ArgumentResult<BoxedValue> {
        ArgumentType::convert(self, token, remaining, context).map(|value| Box::new(value) as BoxedValue)
    }

    fn default_erased(&self) -> Option<BoxedValue> {
        ArgumentType::default_value(self).map(|value| Box::new(value) as BoxedValue)
    }
}

/// Builder-style adapters available on every argument type.
pub trait ArgumentTypeExt: ArgumentType + Sized {
    /// Override the display name, e.g. `Everything.named("reason")`.
    fn named(self, name: impl Into<String>) -> Named<Self> {
        Named::new(self, name)
    }

    /// Make the slot optional, yielding `None` when unfilled.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Make the slot optional, yielding `value` when unfilled.
    fn or_default(self, value: Self::Output) -> WithDefault<Self>
    where
        Self::Output: Clone + Sync,
    {
        WithDefault::new(self, value)
    }
}

impl<A: ArgumentType> ArgumentTypeExt for A {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::RecordingContext;

    #[test]
    fn test_erased_view_delegates() {
        let ctx = RecordingContext::group("general", "alice");
        let arg: &dyn DynArgument = &Integer;

        assert_eq!(arg.label(), "Integer");
        assert!(!arg.is_greedy());
        assert!(!arg.is_optional());
        assert!(arg.validates("42", &ctx));

        match arg.convert_erased("42", &["42"], &ctx) {
            ArgumentResult::Single(value) => assert_eq!(*value.downcast::<i64>().unwrap(), 42),
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_result_map_keeps_consumption() {
        let result = ArgumentResult::Multiple(2, 3).map(|v| v * 10);
        assert_eq!(result, ArgumentResult::Multiple(20, 3));

        let failed: ArgumentResult<i32> = ArgumentResult::Error("nope".into());
        assert_eq!(failed.map(|v| v + 1), ArgumentResult::Error("nope".into()));
    }
}
