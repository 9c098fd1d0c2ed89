#![allow(missing_docs)]
#![cfg(feature = "tracing")]

use std::{
    io,
    sync::{Arc, Mutex}
};
use tracing_subscriber::fmt::MakeWriter;
use weave::{
    Assembler, AssemblerConfig, Assembly,
    di::{Container, Error, Resolver},
    log::{Logger, TracingLogHandler},
};

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl Buffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Buffer {
    type Writer = Buffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture(level: &str, f: impl FnOnce()) -> String {
    let buffer = Buffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(buffer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    buffer.contents()
}

#[derive(Clone)]
struct BarService;

struct ServiceAssembly;

impl Assembly for ServiceAssembly {
    fn name(&self) -> &'static str {
        "ServiceAssembly"
    }

    fn assemble(&self, container: &Container) {
        container.register(|_| Ok(BarService));
    }
}

struct BrokenAssembly;

impl Assembly for BrokenAssembly {
    fn name(&self) -> &'static str {
        "BrokenAssembly"
    }

    fn assemble(&self, _: &Container) {}

    fn loaded(&self, _: &Resolver) -> Result<(), Error> {
        Err(Error::other("no handlers configured"))
    }
}

#[test]
fn it_logs_assembly_lifecycle() {
    let output = capture("debug", || {
        Assembler::new([Box::new(ServiceAssembly) as Box<dyn Assembly>]).unwrap();
    });

    assert!(output.contains("assembly assembled"));
    assert!(output.contains("assembly loaded"));
    assert!(output.contains("ServiceAssembly"));
}

#[test]
fn it_logs_failed_assembly() {
    let output = capture("error", || {
        let mut assembler = Assembler::default();
        assert!(assembler.apply(BrokenAssembly).is_err());
    });

    assert!(output.contains("ERROR"));
    assert!(output.contains("assembly failed to load"));
    assert!(output.contains("no handlers configured"));
}

#[test]
fn it_warns_on_ignored_duplicate() {
    let output = capture("warn", || {
        let mut assembler = Assembler::with_config(AssemblerConfig::new().ignore_duplicates());
        assembler
            .apply(ServiceAssembly).unwrap()
            .apply(ServiceAssembly).unwrap();
    });

    assert!(output.contains("WARN"));
    assert!(output.contains("assembly already loaded, skipping"));
}

#[test]
fn it_traces_registration_and_resolution() {
    let output = capture("trace", || {
        let container = Container::new();
        container.register(|_| Ok(BarService));
        container.resolve::<BarService>().unwrap();
        assert!(container.resolve::<String>().is_err());
    });

    assert!(output.contains("service registered"));
    assert!(output.contains("resolving service"));
    assert!(output.contains("service not registered"));
}

#[test]
fn it_forwards_logger_to_tracing() {
    let output = capture("info", || {
        let logger = Logger::new();
        logger.add_handler(TracingLogHandler);
        logger.debug("hello from logger");
    });

    assert!(output.contains("INFO"));
    assert!(output.contains("Debug: hello from logger"));
}
