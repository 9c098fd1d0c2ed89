//! Assembler that loads [`Assembly`] instances into a shared container

use std::fmt::{Debug, Formatter};

use crate::{
    assembly::{Assembly, AssemblyState},
    di::{Container, Resolver},
    error::Error,
};

pub use config::{AssemblerConfig, DuplicatePolicy};

pub mod config;

struct LoadedAssembly {
    assembly: Box<dyn Assembly>,
    state: AssemblyState,
}

/// Loads assemblies into a single shared [`Container`] and exposes it
/// as a read-only [`Resolver`].
///
/// Each assembly is applied in two steps: [`Assembly::assemble`] registers its services,
/// then [`Assembly::loaded`] runs against everything registered so far.
/// Assemblies are applied in the order they were given.
///
/// # Example
/// ```
/// use weave::{Assembler, Assembly, di::Container};
///
/// #[derive(Clone)]
/// struct BarService;
///
/// struct ServiceAssembly;
///
/// impl Assembly for ServiceAssembly {
///     fn assemble(&self, container: &Container) {
///         container.register(|_| Ok(BarService));
///     }
/// }
///
/// let mut assembler = Assembler::default();
/// assembler.apply(ServiceAssembly)?;
///
/// assert!(assembler.is_loaded(ServiceAssembly.name()));
/// assert!(assembler.resolver().resolve::<BarService>().is_ok());
/// # Ok::<(), weave::error::Error>(())
/// ```
pub struct Assembler {
    container: Container,
    resolver: Resolver,
    assemblies: Vec<LoadedAssembly>,
    config: AssemblerConfig,
}

impl Debug for Assembler {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assembler")
            .field("container", &self.container)
            .field("assemblies", &self.assemblies
                .iter()
                .map(|a| (a.assembly.name(), a.state))
                .collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}

impl Default for Assembler {
    #[inline]
    fn default() -> Self {
        Self::with_config(AssemblerConfig::default())
    }
}

impl Assembler {
    /// Creates an assembler and applies the `assemblies` in order
    ///
    /// Fails on the first assembly whose `loaded` hook fails.
    pub fn new<I>(assemblies: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Box<dyn Assembly>>
    {
        let mut assembler = Self::default();
        assembler.apply_all(assemblies)?;
        Ok(assembler)
    }

    /// Creates an empty assembler with the specified configuration
    pub fn with_config(config: AssemblerConfig) -> Self {
        Self::from_container(Container::new(), config)
    }

    /// Creates a child assembler whose container falls back to the container of `parent`
    ///
    /// The child shares the configuration of `parent` but tracks its own assemblies.
    pub fn with_parent<I>(parent: &Assembler, assemblies: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Box<dyn Assembly>>
    {
        let mut assembler = Self::from_container(
            parent.container.create_child(),
            parent.config.clone());
        assembler.apply_all(assemblies)?;
        Ok(assembler)
    }

    #[inline]
    fn from_container(container: Container, config: AssemblerConfig) -> Self {
        let resolver = container.resolver();
        Self {
            container,
            resolver,
            assemblies: Vec::new(),
            config,
        }
    }

    /// Applies a single assembly to the shared container
    ///
    /// Assemblies are tracked by [`Assembly::name`], which defaults to the type name.
    /// Applying two values of the same type is therefore a duplicate load unless
    /// the type overrides `name()` with a value per instance.
    ///
    /// # Example
    /// ```
    /// use weave::{Assembler, Assembly, di::Container};
    ///
    /// struct HandlerAssembly(&'static str);
    ///
    /// impl Assembly for HandlerAssembly {
    ///     fn name(&self) -> &'static str {
    ///         self.0
    ///     }
    ///
    ///     fn assemble(&self, container: &Container) {
    ///         container.register_named_instance(self.0, self.0.to_string());
    ///     }
    /// }
    ///
    /// let mut assembler = Assembler::default();
    /// assembler
    ///     .apply(HandlerAssembly("console"))?
    ///     .apply(HandlerAssembly("file"))?;
    ///
    /// assert!(assembler.is_loaded("file"));
    /// # Ok::<(), weave::error::Error>(())
    /// ```
    pub fn apply(&mut self, assembly: impl Assembly) -> Result<&mut Self, Error> {
        self.apply_boxed(Box::new(assembly))
    }

    /// Applies the `assemblies` in order
    ///
    /// Stops at the first failing assembly, the ones applied before it stay loaded.
    pub fn apply_all<I>(&mut self, assemblies: I) -> Result<&mut Self, Error>
    where
        I: IntoIterator<Item = Box<dyn Assembly>>
    {
        for assembly in assemblies {
            self.apply_boxed(assembly)?;
        }
        Ok(self)
    }

    fn apply_boxed(&mut self, assembly: Box<dyn Assembly>) -> Result<&mut Self, Error> {
        let name = assembly.name();
        if self.state(name).is_some() {
            return match self.config.duplicates() {
                DuplicatePolicy::Reject => Err(Error::DuplicateLoad(name)),
                DuplicatePolicy::Ignore => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(assembly = name, "assembly already loaded, skipping");
                    Ok(self)
                }
            };
        }

        assembly.assemble(&self.container);

        #[cfg(feature = "tracing")]
        tracing::debug!(assembly = name, services = self.container.len(), "assembly assembled");

        let index = self.assemblies.len();
        self.assemblies.push(LoadedAssembly { assembly, state: AssemblyState::Assembled });

        if let Err(source) = self.assemblies[index].assembly.loaded(&self.resolver) {
            #[cfg(feature = "tracing")]
            tracing::error!(assembly = name, error = %source, "assembly failed to load");
            return Err(Error::LoadFailed { assembly: name, source });
        }

        self.assemblies[index].state = AssemblyState::Loaded;

        #[cfg(feature = "tracing")]
        tracing::debug!(assembly = name, "assembly loaded");

        Ok(self)
    }

    /// Returns a read-only view of the shared container
    #[inline]
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Returns the assembler configuration
    #[inline]
    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Returns `true` if the assembly with the specified name has been fully loaded
    #[inline]
    pub fn is_loaded(&self, name: &str) -> bool {
        self.state(name) == Some(AssemblyState::Loaded)
    }

    /// Returns the state of the assembly with the specified name,
    /// or `None` if it has never been applied
    pub fn state(&self, name: &str) -> Option<AssemblyState> {
        self.assemblies
            .iter()
            .find(|a| a.assembly.name() == name)
            .map(|a| a.state)
    }

    /// Returns the names of fully loaded assemblies in load order
    pub fn loaded(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.assemblies
            .iter()
            .filter(|a| a.state == AssemblyState::Loaded)
            .map(|a| a.assembly.name())
    }
}
