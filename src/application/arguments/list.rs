//! Tuples of argument types, from zero to five slots.
//!
//! The same tuple that declares a command's arguments also rebuilds the typed values
//! from a parsed bundle, so a handler's argument shape always matches its declaration.

use std::sync::Arc;

use super::{ArgumentType, DynArgument};
use crate::application::bundle::ArgumentBundle;
use crate::domain::error::BundleError;

pub trait ArgumentList: Send + 'static {
    /// The typed values handed to the handler.
    type Output: Send + 'static;

    fn into_arguments(self) -> Vec<Arc<dyn DynArgument>>;

    fn from_bundle(bundle: ArgumentBundle) -> Result<Self::Output, BundleError>;
}

impl ArgumentList for () {
    type Output = ();

    fn into_arguments(self) -> Vec<Arc<dyn DynArgument>> {
        Vec::new()
    }

    fn from_bundle(bundle: ArgumentBundle) -> Result<(), BundleError> {
        bundle.finish()
    }
}

macro_rules! impl_argument_list {
    ($($ty:ident => $idx:tt),+) => {
        impl<$($ty: ArgumentType),+> ArgumentList for ($($ty,)+) {
            type Output = ($(<$ty as ArgumentType>::Output,)+);

            fn into_arguments(self) -> Vec<Arc<dyn DynArgument>> {
                vec![$(Arc::new(self.$idx) as Arc<dyn DynArgument>),+]
            }

            fn from_bundle(mut bundle: ArgumentBundle) -> Result<Self::Output, BundleError> {
                let output = ($(bundle.take::<<$ty as ArgumentType>::Output>($idx)?,)+);
                bundle.finish()?;
                Ok(output)
            }
        }
    };
}

impl_argument_list!(A => 0);
impl_argument_list!(A => 0, B => 1);
impl_argument_list!(A => 0, B => 1, C => 2);
impl_argument_list!(A => 0, B => 1, C => 2, D => 3);
impl_argument_list!(A => 0, B => 1, C => 2, D => 3, E => 4);
