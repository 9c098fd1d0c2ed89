//! Describes dependency injection errors

use crate::key::ServiceKey;
use std::{
    borrow::Cow,
    fmt::{Display, Formatter}
};

/// Errors produced while resolving services
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No registration matches the key in the container or any of its ancestors
    NotRegistered(ServiceKey),
    /// A registration produced a value of an unexpected type
    ResolveFailed(&'static str),
    /// A factory or an `init_completed` hook failed
    Other(Cow<'static, str>)
}

impl Error {
    /// Creates a factory failure with a custom message
    #[inline]
    pub fn other(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns `true` if this is a [`Error::NotRegistered`] error
    #[inline]
    pub fn is_not_registered(&self) -> bool {
        matches!(self, Error::NotRegistered(_))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotRegistered(key) => write!(f, "Services Error: service not registered: {key}"),
            Error::ResolveFailed(type_name) => write!(f, "Services Error: unable to resolve the service: {type_name}"),
            Error::Other(msg) => write!(f, "{msg}")
        }
    }
}

impl std::error::Error for Error {}
