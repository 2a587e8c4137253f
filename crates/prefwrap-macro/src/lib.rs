//! Proc macros for prefwrap.
//!
//! Provides:
//! - `#[derive(RawRepresentable)]` for fieldless enums.

use std::collections::HashSet;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    ext::IdentExt,
    parse_macro_input, Attribute, Data, DataEnum, DeriveInput, Expr, ExprLit, Fields, Ident, Lit,
    LitStr, Meta,
};

const ATTRIBUTE: &str = "raw_value";

/// Derives `prefwrap::RawRepresentable` for a fieldless enum.
///
/// By default the raw value is an `i64` equal to the variant's discriminant, so explicit and
/// implicit discriminants both work.
///
/// ```ignore
/// #[derive(Clone, Copy, RawRepresentable)]
/// enum Theme {
///     Light = 0,
///     Dark = 1,
/// }
/// ```
///
/// With `#[raw_value(String)]` the raw value is the variant's name, or the string given with
/// `#[raw_value = "..."]` on the variant.
///
/// ```ignore
/// #[derive(Clone, Copy, RawRepresentable)]
/// #[raw_value(String)]
/// enum Sort {
///     #[raw_value = "name"]
///     ByName,
///     Newest,
/// }
/// ```
#[proc_macro_derive(RawRepresentable, attributes(raw_value))]
pub fn raw_representable(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

enum RawKind {
    Integer,
    String,
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "RawRepresentable can only be derived for enums",
        ));
    };

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "RawRepresentable can only be derived for enums without fields",
            ));
        }
    }

    let (raw_type, raw_value, from_raw_value) = match raw_kind(&input.attrs)? {
        RawKind::Integer => integer_methods(data)?,
        RawKind::String => string_methods(data)?,
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::prefwrap::RawRepresentable for #ident #ty_generics #where_clause {
            type Raw = #raw_type;

            fn raw_value(&self) -> Self::Raw {
                #raw_value
            }

            fn from_raw_value(raw: Self::Raw) -> ::std::option::Option<Self> {
                #from_raw_value
            }
        }
    })
}

fn raw_value_attributes(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident(ATTRIBUTE))
}

fn raw_kind(attrs: &[Attribute]) -> syn::Result<RawKind> {
    let mut kind = RawKind::Integer;

    for attr in raw_value_attributes(attrs) {
        let ty: Ident = attr.parse_args()?;
        kind = match ty.to_string().as_str() {
            "i64" => RawKind::Integer,
            "String" => RawKind::String,
            _ => {
                return Err(syn::Error::new_spanned(
                    ty,
                    "expected `i64` or `String` as raw value type",
                ))
            }
        };
    }

    Ok(kind)
}

fn integer_methods(data: &DataEnum) -> syn::Result<(TokenStream2, TokenStream2, TokenStream2)> {
    if let Some(attr) = data
        .variants
        .iter()
        .find_map(|variant| raw_value_attributes(&variant.attrs).next())
    {
        return Err(syn::Error::new_spanned(
            attr,
            "raw value overrides require `#[raw_value(String)]` on the enum",
        ));
    }

    let idents: Vec<_> = data.variants.iter().map(|variant| &variant.ident).collect();

    let raw_value = if idents.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(Self::#idents => Self::#idents as i64),*
            }
        }
    };

    let from_raw_value = quote! {
        #(
            if raw == Self::#idents as i64 {
                return ::std::option::Option::Some(Self::#idents);
            }
        )*
        ::std::option::Option::None
    };

    Ok((quote! { i64 }, raw_value, from_raw_value))
}

fn string_methods(data: &DataEnum) -> syn::Result<(TokenStream2, TokenStream2, TokenStream2)> {
    let mut seen = HashSet::new();
    let mut idents = Vec::new();
    let mut names = Vec::new();

    for variant in &data.variants {
        let name = match variant_override(&variant.attrs)? {
            Some(name) => name,
            None => LitStr::new(&variant.ident.unraw().to_string(), variant.ident.span()),
        };

        if !seen.insert(name.value()) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                format!("duplicate raw value \"{}\"", name.value()),
            ));
        }

        idents.push(&variant.ident);
        names.push(name);
    }

    let raw_value = if idents.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(Self::#idents => ::std::string::String::from(#names)),*
            }
        }
    };

    let from_raw_value = quote! {
        match raw.as_str() {
            #(#names => ::std::option::Option::Some(Self::#idents),)*
            _ => ::std::option::Option::None,
        }
    };

    Ok((quote! { ::std::string::String }, raw_value, from_raw_value))
}

fn variant_override(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let Some(attr) = raw_value_attributes(attrs).next() else {
        return Ok(None);
    };

    if let Meta::NameValue(meta) = &attr.meta {
        if let Expr::Lit(ExprLit {
            lit: Lit::Str(name),
            ..
        }) = &meta.value
        {
            return Ok(Some(name.clone()));
        }
    }

    Err(syn::Error::new_spanned(
        attr,
        "expected `#[raw_value = \"...\"]`",
    ))
}
