//! Tools for Dependency Injection
//!
//! Re-exports the container from `weave-di`. Assemblies register services
//! on the [`Container`], consumers resolve them through the [`Resolver`].

pub use weave_di::{
    Arguments,
    Container,
    Factory,
    Inject,
    RegistrationHandle,
    Resolver,
    ServiceKey,
};

#[cfg(feature = "macros")]
pub use weave_macros::Inject;

pub mod error {
    //! Dependency injection errors
    pub use weave_di::error::Error;
}

pub use self::error::Error;
