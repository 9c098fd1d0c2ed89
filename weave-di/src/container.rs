//! Dependency Injection container and tools

use crate::{
    Inject,
    Resolver,
    arguments::Arguments,
    error::Error,
    key::ServiceKey
};
use std::{
    any::{Any, type_name},
    borrow::Cow,
    collections::HashMap,
    fmt::{Debug, Formatter},
    marker::PhantomData,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard}
};

pub use factory::Factory;

pub mod factory;

type BoxService = Box<dyn Any>;

type FactoryFn = Arc<
    dyn Fn(&Resolver, Box<dyn Any>) -> Result<BoxService, Error>
    + Send
    + Sync
>;

type HookFn = Arc<
    dyn Fn(&Resolver, &mut dyn Any) -> Result<(), Error>
    + Send
    + Sync
>;

/// A factory with its optional method-injection hook
#[derive(Clone)]
pub(crate) struct Registration {
    factory: FactoryFn,
    init_completed: Option<HookFn>
}

impl Debug for Registration {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Registration(..)")
    }
}

#[inline]
fn make_factory_fn<T, F, Args>(factory: F) -> FactoryFn
where
    T: 'static,
    F: Factory<Args, Output = T>,
    Args: Arguments
{
    Arc::new(move |r: &Resolver, args: Box<dyn Any>| -> Result<BoxService, Error> {
        let args = args
            .downcast::<Args>()
            .map_err(|_| Error::ResolveFailed(type_name::<T>()))?;
        factory
            .call(r, *args)
            .map(|t| Box::new(t) as BoxService)
    })
}

#[inline]
fn make_hook_fn<T, H>(hook: H) -> HookFn
where
    T: 'static,
    H: Fn(&Resolver, &mut T) -> Result<(), Error> + Send + Sync + 'static
{
    Arc::new(move |r: &Resolver, service: &mut dyn Any| -> Result<(), Error> {
        match service.downcast_mut::<T>() {
            Some(service) => hook(r, service),
            None => Err(Error::ResolveFailed(type_name::<T>()))
        }
    })
}

/// Inner HashMap of registrations
type ServiceMap = HashMap<ServiceKey, Registration>;

struct Inner {
    services: RwLock<ServiceMap>,
    parent: Option<Container>
}

/// Represents a DI container, that is able to register and resolve generic dependencies.
///
/// A container is a cheap shared handle: clones refer to the same registry.
/// Every resolution invokes the registered factory, no instances are cached.
///
/// # Example
/// ```
/// use weave_di::{Container, Error};
///
/// trait Animal {
///     fn sound(&self) -> &'static str;
/// }
///
/// struct Cat;
///
/// impl Animal for Cat {
///     fn sound(&self) -> &'static str { "Meow!" }
/// }
///
/// let container = Container::new();
/// container.register(|_| Ok(Box::new(Cat) as Box<dyn Animal>));
///
/// let animal = container.resolve::<Box<dyn Animal>>()?;
/// assert_eq!(animal.sound(), "Meow!");
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone)]
pub struct Container {
    inner: Arc<Inner>
}

impl Debug for Container {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("services", &self.len())
            .field("parent", &self.inner.parent)
            .finish()
    }
}

impl Default for Container {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    /// Creates a new empty DI container
    #[inline]
    pub fn new() -> Self {
        Self::from_parent(None)
    }

    /// Creates a new empty DI container that falls back to `parent`
    /// for services it does not register itself.
    ///
    /// The child never modifies the parent, so registrations made in the child
    /// override the parent's ones only for resolutions made through the child.
    #[inline]
    pub fn with_parent(parent: &Container) -> Self {
        Self::from_parent(Some(parent.clone()))
    }

    /// Creates a child container of this one, see [`Container::with_parent`]
    #[inline]
    pub fn create_child(&self) -> Self {
        Self::with_parent(self)
    }

    #[inline]
    fn from_parent(parent: Option<Container>) -> Self {
        let inner = Inner {
            services: RwLock::new(ServiceMap::new()),
            parent
        };
        Self { inner: Arc::new(inner) }
    }

    /// Returns the parent container, if any
    #[inline]
    pub fn parent(&self) -> Option<&Container> {
        self.inner.parent.as_ref()
    }

    /// Returns a read-only view of this container
    #[inline]
    pub fn resolver(&self) -> Resolver {
        Resolver::new(self.clone())
    }

    /// Number of registrations made directly in this container
    #[inline]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if nothing was registered directly in this container
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Registers a factory for the service `T`.
    ///
    /// Registering the same service again replaces the previous factory.
    pub fn register<T, F>(&self, factory: F) -> RegistrationHandle<'_, T>
    where
        T: 'static,
        F: Fn(&Resolver) -> Result<T, Error> + Send + Sync + 'static
    {
        self.insert::<T, (), F>(None, factory)
    }

    /// Registers a named factory for the service `T`.
    ///
    /// Named registrations are only resolved by [`Container::resolve_named`]
    /// with the same name.
    pub fn register_named<T, F>(&self, name: impl Into<Cow<'static, str>>, factory: F) -> RegistrationHandle<'_, T>
    where
        T: 'static,
        F: Fn(&Resolver) -> Result<T, Error> + Send + Sync + 'static
    {
        self.insert::<T, (), F>(Some(name.into()), factory)
    }

    /// Registers a factory that takes positional arguments supplied at resolution time
    ///
    /// # Example
    /// ```
    /// use weave_di::{Container, Error, Resolver};
    ///
    /// struct Horse { name: String, running: bool }
    ///
    /// let container = Container::new();
    /// container.register_with_args(|_: &Resolver, name: String, running: bool| {
    ///     Ok(Horse { name, running })
    /// });
    ///
    /// let horse = container.resolve_with_args::<Horse, _>(("CartHorse".to_string(), true))?;
    /// assert!(horse.running);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn register_with_args<T, Args, F>(&self, factory: F) -> RegistrationHandle<'_, T>
    where
        T: 'static,
        Args: Arguments,
        F: Factory<Args, Output = T>
    {
        self.insert::<T, Args, F>(None, factory)
    }

    /// Registers a named factory that takes positional arguments
    pub fn register_named_with_args<T, Args, F>(&self, name: impl Into<Cow<'static, str>>, factory: F) -> RegistrationHandle<'_, T>
    where
        T: 'static,
        Args: Arguments,
        F: Factory<Args, Output = T>
    {
        self.insert::<T, Args, F>(Some(name.into()), factory)
    }

    /// Registers a value that is cloned on every resolution.
    ///
    /// Registering an [`Arc`] shares the same object between all consumers.
    pub fn register_instance<T>(&self, instance: T) -> RegistrationHandle<'_, T>
    where
        T: Clone + Send + Sync + 'static
    {
        self.register(move |_| Ok(instance.clone()))
    }

    /// Registers a named value that is cloned on every resolution
    pub fn register_named_instance<T>(&self, name: impl Into<Cow<'static, str>>, instance: T) -> RegistrationHandle<'_, T>
    where
        T: Clone + Send + Sync + 'static
    {
        self.register_named(name, move |_| Ok(instance.clone()))
    }

    /// Registers a service that is created with [`Inject::inject`]
    pub fn register_injectable<T: Inject>(&self) -> RegistrationHandle<'_, T> {
        self.register(T::inject)
    }

    /// Registers a service that is created with [`Default::default`]
    pub fn register_default<T: Default + 'static>(&self) -> RegistrationHandle<'_, T> {
        self.register(|_| Ok(T::default()))
    }

    fn insert<T, Args, F>(&self, name: Option<Cow<'static, str>>, factory: F) -> RegistrationHandle<'_, T>
    where
        T: 'static,
        Args: Arguments,
        F: Factory<Args, Output = T>
    {
        let key = ServiceKey::of::<T, Args>(name);
        let registration = Registration {
            factory: make_factory_fn(factory),
            init_completed: None
        };

        let _replaced = self.write().insert(key.clone(), registration);

        #[cfg(feature = "tracing")]
        tracing::trace!(service = %key, replaced = _replaced.is_some(), "service registered");

        RegistrationHandle {
            container: self,
            key,
            _marker: PhantomData
        }
    }

    /// Resolves an unnamed service registered without arguments
    #[inline]
    pub fn resolve<T: 'static>(&self) -> Result<T, Error> {
        self.resolve_key(ServiceKey::of::<T, ()>(None), ())
    }

    /// Resolves a named service registered without arguments
    #[inline]
    pub fn resolve_named<T: 'static>(&self, name: &str) -> Result<T, Error> {
        self.resolve_key(ServiceKey::of::<T, ()>(Some(Cow::Owned(name.to_owned()))), ())
    }

    /// Resolves an unnamed service registered with a single argument
    #[inline]
    pub fn resolve_with_arg<T: 'static, A: 'static>(&self, arg: A) -> Result<T, Error> {
        self.resolve_with_args::<T, (A,)>((arg,))
    }

    /// Resolves an unnamed service registered with the `Args` arguments
    #[inline]
    pub fn resolve_with_args<T: 'static, Args: Arguments>(&self, args: Args) -> Result<T, Error> {
        self.resolve_key(ServiceKey::of::<T, Args>(None), args)
    }

    /// Resolves a named service registered with the `Args` arguments
    #[inline]
    pub fn resolve_named_with_args<T: 'static, Args: Arguments>(&self, name: &str, args: Args) -> Result<T, Error> {
        self.resolve_key(ServiceKey::of::<T, Args>(Some(Cow::Owned(name.to_owned()))), args)
    }

    /// Resolves an unnamed service, returning `None` if it is not registered.
    ///
    /// Errors raised by the factory are still returned as errors.
    #[inline]
    pub fn resolve_optional<T: 'static>(&self) -> Result<Option<T>, Error> {
        self.resolve_key_optional(ServiceKey::of::<T, ()>(None))
    }

    /// Resolves a named service, returning `None` if it is not registered
    #[inline]
    pub fn resolve_named_optional<T: 'static>(&self, name: &str) -> Result<Option<T>, Error> {
        self.resolve_key_optional(ServiceKey::of::<T, ()>(Some(Cow::Owned(name.to_owned()))))
    }

    /// Returns `true` if an unnamed service without arguments is registered
    /// in this container or any of its ancestors
    #[inline]
    pub fn is_registered<T: 'static>(&self) -> bool {
        self.lookup(&ServiceKey::of::<T, ()>(None)).is_some()
    }

    /// Returns `true` if a named service without arguments is registered
    /// in this container or any of its ancestors
    #[inline]
    pub fn is_registered_named<T: 'static>(&self, name: &str) -> bool {
        self.lookup(&ServiceKey::of::<T, ()>(Some(Cow::Owned(name.to_owned())))).is_some()
    }

    fn resolve_key<T: 'static, Args: Arguments>(&self, key: ServiceKey, args: Args) -> Result<T, Error> {
        let Some(registration) = self.lookup(&key) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(service = %key, "service not registered");
            return Err(Error::NotRegistered(key));
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(service = %key, "resolving service");

        let resolver = self.resolver();
        let service = (registration.factory)(&resolver, Box::new(args))?;
        let mut service = service
            .downcast::<T>()
            .map_err(|_| Error::ResolveFailed(key.service_name()))?;

        if let Some(hook) = &registration.init_completed {
            hook(&resolver, &mut *service)?;
        }

        Ok(*service)
    }

    /// Only a missing registration for `key` itself maps to `None`,
    /// a missing inner dependency is still an error.
    fn resolve_key_optional<T: 'static>(&self, key: ServiceKey) -> Result<Option<T>, Error> {
        match self.resolve_key(key.clone(), ()) {
            Ok(service) => Ok(Some(service)),
            Err(Error::NotRegistered(missing)) if missing == key => Ok(None),
            Err(err) => Err(err)
        }
    }

    /// Finds a registration in this container, then in the parent chain.
    /// The lock of a container is released before its parent is visited.
    fn lookup(&self, key: &ServiceKey) -> Option<Registration> {
        let local = self.read().get(key).cloned();
        local.or_else(|| self.inner.parent
            .as_ref()
            .and_then(|parent| parent.lookup(key)))
    }

    #[inline]
    fn read(&self) -> RwLockReadGuard<'_, ServiceMap> {
        self.inner.services
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    fn write(&self) -> RwLockWriteGuard<'_, ServiceMap> {
        self.inner.services
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Handle to a registration that has just been made,
/// used to attach an `init_completed` hook.
pub struct RegistrationHandle<'a, T> {
    container: &'a Container,
    key: ServiceKey,
    _marker: PhantomData<fn() -> T>
}

impl<T> Debug for RegistrationHandle<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationHandle")
            .field("key", &self.key)
            .finish()
    }
}

impl<T: 'static> RegistrationHandle<'_, T> {
    /// Key the registration was stored under
    #[inline]
    pub fn key(&self) -> &ServiceKey {
        &self.key
    }

    /// Attaches a hook that runs right after the factory created the service
    /// and before it is returned to the caller (method injection).
    ///
    /// Replaces a hook attached earlier.
    ///
    /// # Example
    /// ```
    /// use weave_di::{Container, Error};
    ///
    /// #[derive(Default)]
    /// struct PetOwner { pet: Option<String> }
    ///
    /// impl PetOwner {
    ///     fn set_pet(&mut self, pet: String) { self.pet = Some(pet); }
    /// }
    ///
    /// let container = Container::new();
    /// container.register(|_| Ok(String::from("Budgie")));
    /// container
    ///     .register(|_| Ok(PetOwner::default()))
    ///     .init_completed(|r, owner| {
    ///         owner.set_pet(r.resolve()?);
    ///         Ok(())
    ///     });
    ///
    /// let owner = container.resolve::<PetOwner>()?;
    /// assert_eq!(owner.pet.as_deref(), Some("Budgie"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn init_completed<H>(self, hook: H) -> Self
    where
        H: Fn(&Resolver, &mut T) -> Result<(), Error> + Send + Sync + 'static
    {
        if let Some(registration) = self.container.write().get_mut(&self.key) {
            registration.init_completed = Some(make_hook_fn(hook));
        }
        self
    }
}
