//! Error Handling tools

use std::{
    error::Error as StdError,
    fmt
};

use crate::di;

/// Errors produced while loading assemblies
#[derive(Debug)]
pub enum Error {
    /// Resolving a service failed
    Di(di::Error),

    /// An assembly with the same name has already been applied
    DuplicateLoad(&'static str),

    /// The `loaded` hook of an assembly failed
    LoadFailed {
        /// Name of the failed assembly
        assembly: &'static str,

        /// Error returned by the hook
        source: di::Error,
    },
}

impl Error {
    /// Returns the underlying DI error, if any
    #[inline]
    pub fn as_di(&self) -> Option<&di::Error> {
        match self {
            Error::Di(err) | Error::LoadFailed { source: err, .. } => Some(err),
            Error::DuplicateLoad(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Di(err) => err.fmt(f),
            Error::DuplicateLoad(name) => write!(f, "Assembly Error: assembly already loaded: {name}"),
            Error::LoadFailed { assembly, source } => write!(f, "Assembly Error: {assembly} failed to load: {source}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.as_di().map(|err| err as &(dyn StdError + 'static))
    }
}

impl From<di::Error> for Error {
    #[inline]
    fn from(err: di::Error) -> Self {
        Error::Di(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn it_converts_di_error() {
        let err: Error = di::Error::other("boom").into();

        assert!(matches!(err, Error::Di(_)));
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn it_formats_load_failed() {
        let err = Error::LoadFailed {
            assembly: "LoggerAssembly",
            source: di::Error::other("no handlers"),
        };

        assert_eq!(err.to_string(), "Assembly Error: LoggerAssembly failed to load: no handlers");
        assert_eq!(err.source().unwrap().to_string(), "no handlers");
    }

    #[test]
    fn it_formats_duplicate_load() {
        let err = Error::DuplicateLoad("ServiceAssembly");

        assert!(err.as_di().is_none());
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "Assembly Error: assembly already loaded: ServiceAssembly");
    }
}
