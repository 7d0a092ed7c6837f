//! Adapters that change how an existing argument type is named or defaulted.

use super::{ArgumentResult, ArgumentType, Consumption};
use crate::domain::traits::CommandContext;

/// Renames an argument for usage strings and failure reasons.
pub struct Named<A> {
    inner: A,
    name: String,
}

impl<A> Named<A> {
    pub fn new(inner: A, name: impl Into<String>) -> Self {
        Self {
            inner,
            name: name.into(),
        }
    }
}

impl<A: ArgumentType> ArgumentType for Named<A> {
    type Output = A::Output;

    fn name(&self) -> &str {
        &self.name
    }

    fn consumption(&self) -> Consumption {
        self.inner.consumption()
    }

    fn is_valid(&self, token: &str, context: &dyn CommandContext) -> bool {
        self.inner.is_valid(token, context)
    }

    fn convert(
        &self,
        token: &str,
        remaining: &[&str],
        context: &dyn CommandContext,
    ) -> ArgumentResult<Self::Output> {
        self.inner.convert(token, remaining, context)
    }

    fn default_value(&self) -> Option<Self::Output> {
        self.inner.default_value()
    }
}

/// Optional slot: `Some(value)` when filled, `None` otherwise.
pub struct Optional<A> {
    inner: A,
}

impl<A> Optional<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }
}

impl<A: ArgumentType> ArgumentType for Optional<A> {
    type Output = Option<A::Output>;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn consumption(&self) -> Consumption {
        self.inner.consumption()
    }

    fn is_valid(&self, token: &str, context: &dyn CommandContext) -> bool {
        self.inner.is_valid(token, context)
    }

    fn convert(
        &self,
        token: &str,
        remaining: &[&str],
        context: &dyn CommandContext,
    ) -> ArgumentResult<Self::Output> {
        self.inner.convert(token, remaining, context).map(Some)
    }

    fn default_value(&self) -> Option<Self::Output> {
        Some(None)
    }
}

/// Optional slot that falls back to a fixed value.
pub struct WithDefault<A: ArgumentType> {
    inner: A,
    default: A::Output,
}

impl<A: ArgumentType> WithDefault<A> {
    pub fn new(inner: A, default: A::Output) -> Self {
        Self { inner, default }
    }
}

impl<A> ArgumentType for WithDefault<A>
where
    A: ArgumentType,
    A::Output: Clone + Sync,
{
    type Output = A::Output;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn consumption(&self) -> Consumption {
        self.inner.consumption()
    }

    fn is_valid(&self, token: &str, context: &dyn CommandContext) -> bool {
        self.inner.is_valid(token, context)
    }

    fn convert(
        &self,
        token: &str,
        remaining: &[&str],
        context: &dyn CommandContext,
    ) -> ArgumentResult<Self::Output> {
        self.inner.convert(token, remaining, context)
    }

    fn default_value(&self) -> Option<Self::Output> {
        Some(self.default.clone())
    }
}
