#![allow(missing_docs)]

use weave::di::{Container, Inject};

#[derive(Clone, Default)]
pub struct FooService;

#[derive(Inject)]
pub struct FooManager {
    pub service: FooService,
}

#[derive(Inject)]
pub struct Pair(FooService, FooManager);

fn main() {
    let container = Container::new();
    container.register_default::<FooService>();
    container.register_injectable::<FooManager>();
    container.register_injectable::<Pair>();

    let _ = container.resolve::<Pair>();
}
