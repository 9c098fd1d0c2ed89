//! Generic factory for resolving types

use crate::{arguments::Arguments, resolver::Resolver};
use super::Error;

/// A trait that describes a generic factory function
/// that creates objects registered in DI container.
///
/// `Args` is the tuple of positional arguments supplied at resolution time.
/// Implemented for closures of the shapes:
/// - `Fn(&Resolver) -> Result<T, Error>`
/// - `Fn(&Resolver, T1) -> Result<T, Error>`
/// - `Fn(&Resolver, T1, T2) -> Result<T, Error>`
/// - `Fn(&Resolver, T1, T2, T3) -> Result<T, Error>`
pub trait Factory<Args: Arguments>: Send + Sync + 'static {
    /// A type of object that will be resolved
    type Output;

    /// Calls a factory and returns either created object or error
    fn call(&self, resolver: &Resolver, args: Args) -> Result<Self::Output, Error>;
}

impl<F, R> Factory<()> for F
where
    F: Fn(&Resolver) -> Result<R, Error> + Send + Sync + 'static
{
    type Output = R;

    #[inline]
    fn call(&self, resolver: &Resolver, _: ()) -> Result<Self::Output, Error> {
        self(resolver)
    }
}

macro_rules! define_factory ({ $($param:ident)* } => {
    impl<F, R, $($param: 'static,)*> Factory<($($param,)*)> for F
    where
        F: Fn(&Resolver, $($param),*) -> Result<R, Error> + Send + Sync + 'static,
    {
        type Output = R;

        #[inline]
        #[allow(non_snake_case)]
        fn call(&self, resolver: &Resolver, ($($param,)*): ($($param,)*)) -> Result<Self::Output, Error> {
            (self)(resolver, $($param,)*)
        }
    }
});

define_factory! { T1 }
define_factory! { T1 T2 }
define_factory! { T1 T2 T3 }
