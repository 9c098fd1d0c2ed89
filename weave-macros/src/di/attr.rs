//! Field attribute helpers

use syn::{Attribute, LitStr, Result};

/// Represents the `#[inject(...)]` attributes of a single field.
#[derive(Default)]
pub(crate) struct FieldAttr {
    /// `name = "..."`: resolve a named registration
    pub(crate) name: Option<LitStr>,

    /// `optional`: the field is `Option<T>` and `T` may be missing
    pub(crate) optional: bool,

    /// `default`: do not resolve, use `Default::default()`
    pub(crate) default: bool,
}

impl FieldAttr {
    /// Collects every `#[inject(...)]` attribute of a field.
    ///
    /// Returns an error on unknown keys or when `default` is combined with other keys.
    pub(crate) fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut field = FieldAttr::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("inject")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    field.name = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("optional") {
                    field.optional = true;
                    Ok(())
                } else if meta.path.is_ident("default") {
                    field.default = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `name = \"...\"`, `optional` or `default`"))
                }
            })?;

            if field.default && (field.optional || field.name.is_some()) {
                return Err(syn::Error::new_spanned(
                    attr,
                    "`default` cannot be combined with `name` or `optional`",
                ));
            }
        }

        Ok(field)
    }
}
