//! Read-only view of the DI container

use crate::{Container, arguments::Arguments, error::Error};

/// A view of a [`Container`] that can only resolve services.
///
/// Factories, `init_completed` hooks and assembly `loaded` hooks receive a resolver,
/// so nothing but the owner of the container can add registrations.
#[derive(Debug, Clone)]
pub struct Resolver {
    container: Container
}

impl Resolver {
    #[inline]
    pub(crate) fn new(container: Container) -> Self {
        Self { container }
    }

    /// Resolves an unnamed service registered without arguments
    #[inline]
    pub fn resolve<T: 'static>(&self) -> Result<T, Error> {
        self.container.resolve()
    }

    /// Resolves a named service registered without arguments
    #[inline]
    pub fn resolve_named<T: 'static>(&self, name: &str) -> Result<T, Error> {
        self.container.resolve_named(name)
    }

    /// Resolves an unnamed service registered with a single argument
    #[inline]
    pub fn resolve_with_arg<T: 'static, A: 'static>(&self, arg: A) -> Result<T, Error> {
        self.container.resolve_with_arg(arg)
    }

    /// Resolves an unnamed service registered with the `Args` arguments
    #[inline]
    pub fn resolve_with_args<T: 'static, Args: Arguments>(&self, args: Args) -> Result<T, Error> {
        self.container.resolve_with_args(args)
    }

    /// Resolves a named service registered with the `Args` arguments
    #[inline]
    pub fn resolve_named_with_args<T: 'static, Args: Arguments>(&self, name: &str, args: Args) -> Result<T, Error> {
        self.container.resolve_named_with_args(name, args)
    }

    /// Resolves an unnamed service, returning `None` if it is not registered
    #[inline]
    pub fn resolve_optional<T: 'static>(&self) -> Result<Option<T>, Error> {
        self.container.resolve_optional()
    }

    /// Resolves a named service, returning `None` if it is not registered
    #[inline]
    pub fn resolve_named_optional<T: 'static>(&self, name: &str) -> Result<Option<T>, Error> {
        self.container.resolve_named_optional(name)
    }

    /// Returns `true` if an unnamed service without arguments can be resolved
    #[inline]
    pub fn is_registered<T: 'static>(&self) -> bool {
        self.container.is_registered::<T>()
    }

    /// Returns `true` if a named service without arguments can be resolved
    #[inline]
    pub fn is_registered_named<T: 'static>(&self, name: &str) -> bool {
        self.container.is_registered_named::<T>(name)
    }
}
