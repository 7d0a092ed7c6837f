//! # Parse Results
//!
//! The typed outcome of filling a command's argument list from tokens.

use std::collections::VecDeque;
use std::fmt;

use crate::application::arguments::BoxedValue;
use crate::domain::error::BundleError;

/// One converted value per argument slot, in declaration order.
#[derive(Default)]
pub struct ArgumentBundle {
    values: VecDeque<BoxedValue>,
    consumed: usize,
}

impl ArgumentBundle {
    pub fn push(&mut self, value: BoxedValue, consumed: usize) {
        self.values.push_back(value);
        self.consumed += consumed;
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of input tokens the bundle was built from.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Remove the next value, expecting it to be a `T`. `index` is only used for errors.
    pub fn take<T: 'static>(&mut self, index: usize) -> Result<T, BundleError> {
        let value = self.values.pop_front().ok_or(BundleError::Missing(index))?;
        value
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| BundleError::TypeMismatch(index))
    }

    /// Ensure every value was claimed.
    pub fn finish(self) -> Result<(), BundleError> {
        match self.values.len() {
            0 => Ok(()),
            n => Err(BundleError::Leftover(n)),
        }
    }
}

impl fmt::Debug for ArgumentBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentBundle")
            .field("values", &self.values.len())
            .field("consumed", &self.consumed)
            .finish()
    }
}

#[derive(Debug)]
pub enum ParseResult {
    Success(ArgumentBundle),
    Fail(String),
}

impl ParseResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success(_))
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            ParseResult::Fail(reason) => Some(reason),
            ParseResult::Success(_) => None,
        }
    }
}
