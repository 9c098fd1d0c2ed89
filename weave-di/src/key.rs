//! Keys that identify registrations in the DI container

use crate::arguments::Arguments;
use std::{
    any::{TypeId, type_name},
    borrow::Cow,
    fmt::{Display, Formatter},
    hash::{Hash, Hasher}
};

/// Identifies a registration by the service type, an optional name
/// and the signature of the arguments its factory takes.
///
/// Two keys are equal only if all three parts match, so a named registration
/// is never returned for an unnamed lookup and a factory that takes one argument
/// is never invoked with two.
#[derive(Debug, Clone)]
pub struct ServiceKey {
    service: TypeId,
    service_name: &'static str,
    name: Option<Cow<'static, str>>,
    arguments: TypeId,
    arity: usize
}

impl ServiceKey {
    /// Creates a key for the service `T` whose factory takes `Args`
    #[inline]
    pub fn of<T: ?Sized + 'static, Args: Arguments>(name: Option<Cow<'static, str>>) -> Self {
        Self {
            service: TypeId::of::<T>(),
            service_name: type_name::<T>(),
            name,
            arguments: TypeId::of::<Args>(),
            arity: Args::ARITY
        }
    }

    /// Type name of the service
    #[inline]
    pub fn service_name(&self) -> &'static str {
        self.service_name
    }

    /// Registration name, if any
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Number of positional arguments the factory takes
    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }
}

impl PartialEq for ServiceKey {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.service == other.service
            && self.arguments == other.arguments
            && self.name == other.name
    }
}

impl Eq for ServiceKey {}

impl Hash for ServiceKey {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.service.hash(state);
        self.arguments.hash(state);
        self.name.hash(state);
    }
}

impl Display for ServiceKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.service_name)?;
        match (&self.name, self.arity) {
            (None, 0) => Ok(()),
            (Some(name), 0) => write!(f, " (name: {name:?})"),
            (None, arity) => write!(f, " (arguments: {arity})"),
            (Some(name), arity) => write!(f, " (name: {name:?}, arguments: {arity})")
        }
    }
}
