//! Proc-Macros implementations for Weave
//!

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod di;

/// Derive macro for the `Inject` trait that resolves every field from the DI container
///
/// Field attributes:
/// - `#[inject(name = "...")]` resolves a named registration
/// - `#[inject(optional)]` on an `Option<T>` field resolves `T` or leaves `None` if it is not registered
/// - `#[inject(default)]` skips resolution and uses [`Default::default`]
///
/// # Example
/// ```ignore
/// use weave::di::{Container, Inject};
///
/// #[derive(Clone)]
/// struct FooService;
///
/// #[derive(Inject)]
/// struct FooManager {
///     service: FooService,
///     #[inject(name = "console")]
///     handler: Box<dyn LogHandler>,
///     #[inject(default)]
///     calls: usize,
/// }
///
/// // This expands to:
/// // impl Inject for FooManager {
/// //     fn inject(resolver: &Resolver) -> Result<Self, Error> {
/// //         Ok(Self {
/// //             service: resolver.resolve::<FooService>()?,
/// //             handler: resolver.resolve_named::<Box<dyn LogHandler>>("console")?,
/// //             calls: Default::default(),
/// //         })
/// //     }
/// // }
/// ```
#[proc_macro_derive(Inject, attributes(inject))]
pub fn derive_inject(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    di::expand_inject(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
