//! Run with:
//!
//! ```no_rust
//! RUST_LOG=trace cargo run -p pets
//! ```

use tracing::info;
use tracing_subscriber::{EnvFilter, prelude::*};
use weave::di::{Container, Error, Resolver};

trait Animal: Send + Sync {
    fn name(&self) -> &str;
    fn sound(&self) -> &'static str;
    fn running(&self) -> bool {
        false
    }
}

type BoxAnimal = Box<dyn Animal>;

struct Cat {
    name: String,
}

impl Animal for Cat {
    fn name(&self) -> &str {
        &self.name
    }

    fn sound(&self) -> &'static str {
        "Meow!"
    }
}

struct Dog {
    name: String,
}

impl Animal for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn sound(&self) -> &'static str {
        "Woof!"
    }
}

struct Horse {
    name: String,
    running: bool,
}

impl Animal for Horse {
    fn name(&self) -> &str {
        &self.name
    }

    fn sound(&self) -> &'static str {
        "Whinny!"
    }

    fn running(&self) -> bool {
        self.running
    }
}

struct PetOwner {
    pet: BoxAnimal,
}

impl PetOwner {
    fn play(&self) -> String {
        format!("I'm playing with {}. {}", self.pet.name(), self.pet.sound())
    }
}

#[derive(Default)]
struct LazyPetOwner {
    pet: Option<BoxAnimal>,
}

impl LazyPetOwner {
    fn set_pet(&mut self, pet: BoxAnimal) {
        self.pet = Some(pet);
    }
}

#[derive(Debug, Clone)]
struct Turtle {
    name: String,
}

fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let container = Container::new();

    // Initializer injection
    container.register(|_| Ok(Box::new(Cat { name: "Eric".into() }) as BoxAnimal));
    container.register(|r: &Resolver| Ok(PetOwner { pet: r.resolve()? }));

    info!("{}", container.resolve::<PetOwner>()?.play());

    // Named registrations
    container.register_named("cat", |_| Ok(Box::new(Cat { name: "Eric".into() }) as BoxAnimal));
    container.register_named("dog", |_| Ok(Box::new(Dog { name: "Fred".into() }) as BoxAnimal));

    let cat = container.resolve_named::<BoxAnimal>("cat")?;
    let dog = container.resolve_named::<BoxAnimal>("dog")?;
    info!("{} says {}, {} says {}", cat.name(), cat.sound(), dog.name(), dog.sound());

    // Registrations with arguments
    container.register_with_args(|_: &Resolver, name: String| {
        Ok(Box::new(Horse { name, running: false }) as BoxAnimal)
    });
    container.register_with_args(|_: &Resolver, name: String, running: bool| {
        Ok(Box::new(Horse { name, running }) as BoxAnimal)
    });

    let ned = container.resolve_with_arg::<BoxAnimal, _>("Ned".to_string())?;
    let cart_horse = container.resolve_with_args::<BoxAnimal, _>(("CartHorse".to_string(), true))?;
    info!("{} running: {}", ned.name(), ned.running());
    info!("{} running: {}", cart_horse.name(), cart_horse.running());

    // Property injection
    container.register_named("budgie", |_| Ok(Box::new(Cat { name: "Budgie".into() }) as BoxAnimal));
    container.register_named("john", |r: &Resolver| {
        let mut owner = LazyPetOwner::default();
        owner.pet = r.resolve_named_optional("budgie")?;
        Ok(owner)
    });

    let john = container.resolve_named::<LazyPetOwner>("john")?;
    info!("john's pet: {:?}", john.pet.map(|pet| pet.sound()));

    // Method injection
    container
        .register_named("alice", |_| Ok(LazyPetOwner::default()))
        .init_completed(|r, owner| {
            owner.set_pet(r.resolve_named("dog")?);
            Ok(())
        });

    let alice = container.resolve_named::<LazyPetOwner>("alice")?;
    info!("alice's pet: {:?}", alice.pet.map(|pet| pet.sound()));

    // Value types
    container.register(|_| Ok(Turtle { name: "Ninja".into() }));

    let mut turtle = container.resolve::<Turtle>()?;
    turtle.name.push_str(" Turtle");
    info!("{turtle:?} vs {:?}", container.resolve::<Turtle>()?);

    // Container hierarchy
    let parent = Container::new();
    parent.register(|_| Ok(Box::new(Cat { name: "Eric".into() }) as BoxAnimal));
    let child = parent.create_child();

    let pet = child.resolve_optional::<BoxAnimal>()?;
    info!("child resolved a pet: {}", pet.is_some());
    if let Some(pet) = pet {
        info!("{}", pet.sound());
    }

    Ok(())
}
