//! Macros for dependency injection

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, Field, Fields, GenericArgument, PathArguments, Type};

pub(super) mod attr;

/// Expands a struct into an `Inject` implementation that resolves every field
pub(super) fn expand_inject(input: &syn::DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(name, "`Inject` can only be derived for structs"));
    };

    let body = match &data.fields {
        Fields::Named(fields) => {
            let fields = fields.named
                .iter()
                .map(|field| {
                    let ident = &field.ident;
                    let value = field_value(field)?;
                    Ok(quote! { #ident: #value })
                })
                .collect::<syn::Result<Vec<_>>>()?;
            quote! { Self { #(#fields),* } }
        }
        Fields::Unnamed(fields) => {
            let values = fields.unnamed
                .iter()
                .map(field_value)
                .collect::<syn::Result<Vec<_>>>()?;
            quote! { Self( #(#values),* ) }
        }
        Fields::Unit => quote! { Self },
    };

    Ok(quote! {
        impl #impl_generics ::weave::di::Inject for #name #ty_generics #where_clause {
            #[inline]
            fn inject(resolver: &::weave::di::Resolver) -> ::core::result::Result<Self, ::weave::di::Error> {
                ::core::result::Result::Ok(#body)
            }
        }
    })
}

fn field_value(field: &Field) -> syn::Result<TokenStream> {
    let attr = attr::FieldAttr::from_attrs(&field.attrs)?;
    let ty = &field.ty;

    if attr.default {
        return Ok(quote! { ::core::default::Default::default() });
    }

    if attr.optional {
        let inner = option_inner(ty).ok_or_else(|| {
            syn::Error::new_spanned(ty, "`optional` requires a field of type `Option<T>`")
        })?;
        return Ok(match &attr.name {
            Some(name) => quote! { resolver.resolve_named_optional::<#inner>(#name)? },
            None => quote! { resolver.resolve_optional::<#inner>()? },
        });
    }

    Ok(match &attr.name {
        Some(name) => quote! { resolver.resolve_named::<#ty>(#name)? },
        None => quote! { resolver.resolve::<#ty>()? },
    })
}

/// Returns `T` for a field type written as `Option<T>`
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::expand_inject;
    use syn::parse_quote;

    #[test]
    fn it_expands_named_fields() {
        let input: syn::DeriveInput = parse_quote! {
            struct PetOwner {
                pet: Box<dyn Animal>,
                #[inject(name = "console")]
                logger: Logger,
                #[inject(optional)]
                toy: Option<Toy>,
                #[inject(default)]
                visits: usize,
            }
        };

        let output = expand_inject(&input).unwrap().to_string();

        assert!(output.contains("impl :: weave :: di :: Inject for PetOwner"));
        assert!(output.contains("resolver . resolve :: < Box < dyn Animal > > ()"));
        assert!(output.contains("resolver . resolve_named :: < Logger > (\"console\")"));
        assert!(output.contains("resolver . resolve_optional :: < Toy > ()"));
        assert!(output.contains(":: core :: default :: Default :: default ()"));
    }

    #[test]
    fn it_expands_tuple_struct() {
        let input: syn::DeriveInput = parse_quote! {
            struct Point(X, Y);
        };

        let output = expand_inject(&input).unwrap().to_string();

        assert!(output.contains("Self (resolver . resolve :: < X > () ? , resolver . resolve :: < Y > () ?)"));
    }

    #[test]
    fn it_expands_unit_struct() {
        let input: syn::DeriveInput = parse_quote! {
            struct FooService;
        };

        let output = expand_inject(&input).unwrap().to_string();

        assert!(output.contains("Ok (Self)"));
    }

    #[test]
    fn it_rejects_enum() {
        let input: syn::DeriveInput = parse_quote! {
            enum Animal { Cat, Dog }
        };

        let err = expand_inject(&input).unwrap_err();

        assert_eq!(err.to_string(), "`Inject` can only be derived for structs");
    }

    #[test]
    fn it_rejects_optional_without_option() {
        let input: syn::DeriveInput = parse_quote! {
            struct PetOwner {
                #[inject(optional)]
                pet: Box<dyn Animal>,
            }
        };

        assert!(expand_inject(&input).is_err());
    }
}
