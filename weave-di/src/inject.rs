//! Utilities to inject and resolve dependencies

use crate::{Resolver, error::Error};

/// A trait that adds the ability to inject dependencies when resolving a type from the DI container
///
/// The type is registered with [`Container::register_injectable`](crate::Container::register_injectable)
/// and built from the resolver on every resolution (initializer injection).
///
/// # Example
/// ```
/// use weave_di::{Container, Error, Inject, Resolver};
///
/// #[derive(Clone)]
/// struct FooService;
///
/// struct FooManager {
///     service: FooService
/// }
///
/// impl Inject for FooManager {
///     fn inject(resolver: &Resolver) -> Result<Self, Error> {
///         let service = resolver.resolve::<FooService>()?;
///         Ok(Self { service })
///     }
/// }
///
/// let container = Container::new();
/// container.register(|_| Ok(FooService));
/// container.register_injectable::<FooManager>();
///
/// let manager = container.resolve::<FooManager>()?;
/// # Ok::<(), Error>(())
/// ```
///
/// With the `macros` feature of `weave` the trait can be derived,
/// every field is then resolved from the container.
pub trait Inject: Sized + 'static {
    /// Creates `Self` from services available to the resolver
    fn inject(resolver: &Resolver) -> Result<Self, Error>;
}

impl Inject for Resolver {
    #[inline]
    fn inject(resolver: &Resolver) -> Result<Self, Error> {
        Ok(resolver.clone())
    }
}
