//! Logging collaborator that can be shared through the container
//!
//! A [`Logger`] is an ordinary service: register it as an `Arc<Logger>` instance
//! and attach handlers from an [`Assembly::loaded`](crate::Assembly::loaded) hook.
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use weave::{
//!     Assembler, Assembly,
//!     di::{Container, Error, Resolver},
//!     log::{LogHandler, Logger}
//! };
//!
//! #[derive(Clone)]
//! struct ConsoleLogHandler;
//!
//! impl LogHandler for ConsoleLogHandler {
//!     fn log(&self, message: &str) {
//!         println!("{message}");
//!     }
//! }
//!
//! struct LoggerAssembly;
//!
//! impl Assembly for LoggerAssembly {
//!     fn assemble(&self, container: &Container) {
//!         container.register_instance(Arc::new(Logger::new()));
//!         container.register(|_| Ok(ConsoleLogHandler));
//!     }
//!
//!     fn loaded(&self, resolver: &Resolver) -> Result<(), Error> {
//!         let logger = resolver.resolve::<Arc<Logger>>()?;
//!         logger.add_handler(resolver.resolve::<ConsoleLogHandler>()?);
//!         Ok(())
//!     }
//! }
//!
//! let mut assembler = Assembler::default();
//! assembler.apply(LoggerAssembly)?;
//!
//! let logger = assembler.resolver().resolve::<Arc<Logger>>()?;
//! assert_eq!(logger.handler_count(), 1);
//! # Ok::<(), weave::error::Error>(())
//! ```

use std::{
    fmt::{Debug, Formatter},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard}
};

/// A destination for log messages
pub trait LogHandler: Send + Sync + 'static {
    /// Writes a message
    fn log(&self, message: &str);
}

/// Handlers registered in the container as `Arc<dyn LogHandler>` can be attached directly
impl<H: LogHandler + ?Sized> LogHandler for Arc<H> {
    #[inline]
    fn log(&self, message: &str) {
        (**self).log(message);
    }
}

/// Fans log messages out to every attached [`LogHandler`] in insertion order
#[derive(Default)]
pub struct Logger {
    handlers: RwLock<Vec<Arc<dyn LogHandler>>>,
}

impl Debug for Logger {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("handlers", &self.handler_count())
            .finish()
    }
}

impl Logger {
    /// Creates a logger with no handlers
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a handler
    pub fn add_handler(&self, handler: impl LogHandler) {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(handler));
    }

    /// Writes the message to every handler
    pub fn log(&self, message: &str) {
        let handlers = self.handlers().clone();
        for handler in handlers.iter() {
            handler.log(message);
        }
    }

    /// Writes the message prefixed with `Debug: ` to every handler
    pub fn debug(&self, message: &str) {
        self.log(&format!("Debug: {message}"));
    }

    /// Returns the number of attached handlers
    #[inline]
    pub fn handler_count(&self) -> usize {
        self.handlers().len()
    }

    #[inline]
    fn handlers(&self) -> RwLockReadGuard<'_, Vec<Arc<dyn LogHandler>>> {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// A [`LogHandler`] that forwards messages to [`tracing`] at the `info` level
#[cfg(feature = "tracing")]
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogHandler;

#[cfg(feature = "tracing")]
impl LogHandler for TracingLogHandler {
    #[inline]
    fn log(&self, message: &str) {
        tracing::info!(target: "weave::log", "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::{LogHandler, Logger};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MemoryLogHandler {
        prefix: &'static str,
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl LogHandler for MemoryLogHandler {
        fn log(&self, message: &str) {
            self.lines.lock().unwrap().push(format!("{}{message}", self.prefix));
        }
    }

    #[test]
    fn it_logs_to_all_handlers_in_order() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::new();
        logger.add_handler(MemoryLogHandler { prefix: "console: ", lines: lines.clone() });
        logger.add_handler(MemoryLogHandler { prefix: "file: ", lines: lines.clone() });

        logger.log("hello");

        assert_eq!(logger.handler_count(), 2);
        assert_eq!(*lines.lock().unwrap(), vec!["console: hello", "file: hello"]);
    }

    #[test]
    fn it_prefixes_debug_messages() {
        let handler = MemoryLogHandler::default();
        let logger = Logger::new();
        logger.add_handler(handler.clone());

        logger.debug("loaded");

        assert_eq!(*handler.lines.lock().unwrap(), vec!["Debug: loaded"]);
    }

    #[test]
    fn it_attaches_shared_handlers() {
        let handler = MemoryLogHandler::default();
        let shared: Arc<dyn LogHandler> = Arc::new(handler.clone());
        let logger = Logger::new();
        logger.add_handler(shared.clone());
        logger.add_handler(shared);

        logger.log("twice");

        assert_eq!(*handler.lines.lock().unwrap(), vec!["twice", "twice"]);
    }

    #[test]
    fn it_logs_without_handlers() {
        let logger = Logger::new();

        logger.log("nobody listens");

        assert_eq!(logger.handler_count(), 0);
        assert_eq!(format!("{logger:?}"), "Logger { handlers: 0 }");
    }
}
