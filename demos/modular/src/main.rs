//! Run with:
//!
//! ```no_rust
//! RUST_LOG=debug cargo run -p modular
//! ```

use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, prelude::*};
use weave::{
    Assembler, Assembly,
    di::{Container, Error, Inject, Resolver},
    log::{LogHandler, Logger, TracingLogHandler},
};

#[derive(Clone, Default)]
struct FooService;

#[derive(Clone, Default)]
struct BarService;

#[derive(Inject)]
struct FooManager {
    #[allow(dead_code)]
    service: FooService,
    logger: Arc<Logger>,
}

#[derive(Inject)]
struct BarManager {
    #[allow(dead_code)]
    service: BarService,
    #[inject(name = "console")]
    console: Arc<dyn LogHandler>,
}

struct ConsoleLogHandler;

impl LogHandler for ConsoleLogHandler {
    fn log(&self, message: &str) {
        println!("{message}");
    }
}

struct ServiceAssembly;

impl Assembly for ServiceAssembly {
    fn assemble(&self, container: &Container) {
        container.register_default::<FooService>();
        container.register_default::<BarService>();
    }
}

struct ManagerAssembly;

impl Assembly for ManagerAssembly {
    fn assemble(&self, container: &Container) {
        container.register_injectable::<FooManager>();
        container.register_injectable::<BarManager>();
    }
}

struct LoggerAssembly;

impl Assembly for LoggerAssembly {
    fn assemble(&self, container: &Container) {
        container.register_instance(Arc::new(Logger::new()));
        container.register_named_instance("console", Arc::new(ConsoleLogHandler) as Arc<dyn LogHandler>);
        container.register_named_instance("tracing", Arc::new(TracingLogHandler) as Arc<dyn LogHandler>);
    }

    fn loaded(&self, resolver: &Resolver) -> Result<(), Error> {
        let logger = resolver.resolve::<Arc<Logger>>()?;
        logger.add_handler(resolver.resolve_named::<Arc<dyn LogHandler>>("console")?);
        logger.add_handler(resolver.resolve_named::<Arc<dyn LogHandler>>("tracing")?);
        logger.debug("logger assembly loaded");
        Ok(())
    }
}

fn main() -> Result<(), weave::error::Error> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut assembler = Assembler::new([
        Box::new(ServiceAssembly) as Box<dyn Assembly>,
        Box::new(ManagerAssembly),
    ])?;

    // Assemblies can also be applied lazily
    assembler.apply(LoggerAssembly)?;

    let foo = assembler.resolver().resolve::<FooManager>()?;
    foo.logger.log("foo manager resolved");

    let bar = assembler.resolver().resolve::<BarManager>()?;
    bar.console.log("bar manager resolved");

    let tracing = assembler.resolver().resolve_named::<Arc<dyn LogHandler>>("tracing")?;
    tracing.log("resolved by name");

    info!(assemblies = ?assembler.loaded().collect::<Vec<_>>(), "assembler ready");

    Ok(())
}
