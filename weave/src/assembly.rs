//! Groups of related registrations

use crate::di::{Container, Error, Resolver};

/// A unit of related registrations applied to the shared [`Container`] of an
/// [`Assembler`](crate::Assembler).
///
/// Only assemblies receive the container, everything else resolves services
/// through a [`Resolver`].
///
/// # Example
/// ```
/// use weave::{Assembler, Assembly, di::{Container, Resolver}};
///
/// #[derive(Clone)]
/// struct FooService;
///
/// struct FooManager {
///     service: FooService
/// }
///
/// struct ServiceAssembly;
///
/// impl Assembly for ServiceAssembly {
///     fn assemble(&self, container: &Container) {
///         container.register(|_| Ok(FooService));
///     }
/// }
///
/// struct ManagerAssembly;
///
/// impl Assembly for ManagerAssembly {
///     fn assemble(&self, container: &Container) {
///         container.register(|r: &Resolver| Ok(FooManager { service: r.resolve()? }));
///     }
/// }
///
/// let assembler = Assembler::new([
///     Box::new(ServiceAssembly) as Box<dyn Assembly>,
///     Box::new(ManagerAssembly),
/// ])?;
///
/// let manager = assembler.resolver().resolve::<FooManager>()?;
/// # Ok::<(), weave::error::Error>(())
/// ```
pub trait Assembly: Send + Sync + 'static {
    /// Name used to track the assembly, defaults to its type name.
    ///
    /// Two assemblies with the same name are considered the same assembly.
    /// Override it when one type is applied several times with different configuration.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Registers services. Called exactly once, when the assembly is applied.
    fn assemble(&self, container: &Container);

    /// Called once right after [`Assembly::assemble`] with a read-only view of the container.
    ///
    /// Services registered by this assembly and by every assembly applied before it
    /// can be resolved here.
    fn loaded(&self, resolver: &Resolver) -> Result<(), Error> {
        let _ = resolver;
        Ok(())
    }
}

/// Load state of an applied assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyState {
    /// Registrations were made, the `loaded` hook has not completed
    Assembled,

    /// The `loaded` hook completed successfully
    Loaded,
}
