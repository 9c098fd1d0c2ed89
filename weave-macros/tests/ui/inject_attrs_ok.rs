#![allow(missing_docs)]

use weave::di::{Container, Inject, Resolver};

pub trait LogHandler {
    fn log(&self, message: &str);
}

pub struct Console;

impl LogHandler for Console {
    fn log(&self, _: &str) {}
}

#[derive(Inject)]
pub struct Service {
    #[inject(name = "console")]
    pub handler: Box<dyn LogHandler>,
    #[inject(optional, name = "file")]
    pub file: Option<Box<dyn LogHandler>>,
    #[inject(default)]
    pub calls: usize,
    pub resolver: Resolver,
}

fn main() {
    let container = Container::new();
    container.register_named("console", |_| Ok(Box::new(Console) as Box<dyn LogHandler>));
    container.register_injectable::<Service>();

    let _ = container.resolve::<Service>();
}
