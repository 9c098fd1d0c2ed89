//! Tools for dependency injection
//!
//! A [`Container`] maps a [`ServiceKey`] (service type, optional name and argument
//! signature) to a factory. Factories are invoked on every resolution and receive a
//! [`Resolver`], a read-only view that can resolve nested dependencies.

pub use crate::{
    arguments::Arguments,
    container::{Container, Factory, RegistrationHandle},
    error::Error,
    inject::Inject,
    key::ServiceKey,
    resolver::Resolver,
};

pub mod arguments;
pub mod container;
pub mod error;
pub mod inject;
pub mod key;
pub mod resolver;
