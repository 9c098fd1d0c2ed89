//! # Weave
//!
//! > Dependency injection for Rust, split into small assemblies that are loaded into one shared container.
//!
//! ## Features
//! * Transient registrations resolved by type, by name and by argument count
//! * Hierarchical containers with fallback to the parent
//! * `init_completed` hooks for property and method injection
//! * Assemblies with ordered `assemble` / `loaded` steps
//! * `#[derive(Inject)]` with the `macros` feature
//! * Structured logging with [tracing](https://docs.rs/tracing) behind the `tracing` feature
//!
//! ## Example
//! ```
//! use weave::{Assembler, Assembly, di::{Container, Resolver}};
//!
//! trait Animal {
//!     fn name(&self) -> &str;
//! }
//!
//! struct Cat {
//!     name: String
//! }
//!
//! impl Animal for Cat {
//!     fn name(&self) -> &str {
//!         &self.name
//!     }
//! }
//!
//! struct PetOwner {
//!     pet: Box<dyn Animal>
//! }
//!
//! struct PetAssembly;
//!
//! impl Assembly for PetAssembly {
//!     fn assemble(&self, container: &Container) {
//!         container.register(|_| Ok(Box::new(Cat { name: "Mimi".into() }) as Box<dyn Animal>));
//!         container.register(|r: &Resolver| Ok(PetOwner { pet: r.resolve()? }));
//!     }
//! }
//!
//! let mut assembler = Assembler::default();
//! assembler.apply(PetAssembly)?;
//!
//! let owner = assembler.resolver().resolve::<PetOwner>()?;
//! assert_eq!(owner.pet.name(), "Mimi");
//! # Ok::<(), weave::error::Error>(())
//! ```

pub mod assembler;
pub mod assembly;
pub mod di;
pub mod error;
pub mod log;

pub use crate::assembler::{Assembler, AssemblerConfig, DuplicatePolicy};
pub use crate::assembly::{Assembly, AssemblyState};
