//! Derive macros for cvarcfg console variable library
//!
//! This crate provides `#[derive(ConVars)]` for registering a struct of
//! convar handles in one call.
//!
//! # Usage
//!
//! ```text
//! use cvarcfg::{ConVar, ConVars, DeriveConVars};
//! use std::sync::Arc;
//!
//! #[derive(DeriveConVars)]
//! #[convars(prefix = "sm_sample_")]
//! struct SampleConVars {
//!     #[convar(default = "1", help = "Enable the sample", min = 0, max = 1, notify)]
//!     enabled: Arc<ConVar>,
//!
//!     #[convar(default = "5", help = "Samples per second\nRaise for accuracy")]
//!     rate: Arc<ConVar>,
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::{
    Attribute, Data, DeriveInput, Expr, ExprLit, ExprUnary, Fields, Ident, Lit, LitStr, UnOp,
    parse_macro_input,
};

/// Flag words accepted as bare paths in `#[convar(...)]`
const FLAG_NAMES: &[&str] = &[
    "hidden",
    "protected",
    "archive",
    "notify",
    "replicated",
    "cheat",
    "dont_record",
];

/// Derive macro for generating `ConVars` implementations.
///
/// Fields are registered in declaration order, which is also the order they
/// appear in the generated config file.
///
/// # Attributes
///
/// ## Container attributes (`#[convars(...)]`)
/// - `prefix = "sm_sample_"` - Prepended to field names that have no explicit `name`
///
/// ## Field attributes (`#[convar(...)]`)
/// - `name = "..."` - Full convar name (default: prefix + field name)
/// - `default = "..."` - Default value (default: empty string)
/// - `help = "..."` - Help text, may contain `\n`
/// - `min = 0` / `max = 1.5` - Advisory bounds
/// - `hidden`, `protected`, `archive`, `notify`, `replicated`, `cheat`,
///   `dont_record` - Convar flags
#[proc_macro_derive(ConVars, attributes(convars, convar))]
pub fn derive_convars(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let container = parse_container_attrs(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "ConVars can only be derived for structs with named fields.\n\nExample:\n  #[derive(ConVars)]\n  struct MyConVars {\n      enabled: Arc<ConVar>,\n  }",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "ConVars can only be derived for structs.\n\nTry: #[derive(ConVars)] on a struct, not an enum or union.",
            ));
        }
    };

    let mut initializers = Vec::new();

    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let attrs = parse_field_attrs(&field.attrs)?;

        let convar_name = attrs
            .name
            .unwrap_or_else(|| format!("{}{}", container.prefix, field_name));
        let default = attrs.default.unwrap_or_default();
        let help = attrs.help.unwrap_or_default();

        let flags = attrs.flags.iter().map(|flag| {
            let ident = Ident::new(&flag.to_uppercase(), Span::call_site());
            quote! { | cvarcfg::ConVarFlags::#ident }
        });
        let min = option_tokens(attrs.min);
        let max = option_tokens(attrs.max);

        initializers.push(quote! {
            #field_name: registry.create(
                #convar_name,
                #default,
                cvarcfg::ConVarFlags::NONE #(#flags)*,
                #help,
                #min,
                #max,
            )
        });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics cvarcfg::ConVars for #name #ty_generics #where_clause {
            fn register(registry: &cvarcfg::ConVarRegistry) -> Self {
                Self {
                    #(#initializers),*
                }
            }
        }
    })
}

fn option_tokens(value: Option<f32>) -> proc_macro2::TokenStream {
    match value {
        Some(v) if v < 0.0 => {
            let abs = -v;
            quote! { ::std::option::Option::Some(-#abs) }
        }
        Some(v) => quote! { ::std::option::Option::Some(#v) },
        None => quote! { ::std::option::Option::None },
    }
}

/// Container-level attributes from #[convars(...)]
#[derive(Default)]
struct ContainerAttrs {
    prefix: String,
}

/// Field-level attributes from #[convar(...)]
#[derive(Default)]
struct FieldAttrs {
    name: Option<String>,
    default: Option<String>,
    help: Option<String>,
    min: Option<f32>,
    max: Option<f32>,
    flags: Vec<String>,
}

fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut result = ContainerAttrs::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("convars")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("prefix") {
                result.prefix = parse_string(&meta)?;
                Ok(())
            } else {
                Err(meta.error("unknown #[convars] attribute, expected `prefix`"))
            }
        })?;
    }

    Ok(result)
}

fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut result = FieldAttrs::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("convar")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                result.name = Some(parse_string(&meta)?);
            } else if meta.path.is_ident("default") {
                result.default = Some(parse_string(&meta)?);
            } else if meta.path.is_ident("help") {
                result.help = Some(parse_string(&meta)?);
            } else if meta.path.is_ident("min") {
                result.min = Some(parse_number(&meta)?);
            } else if meta.path.is_ident("max") {
                result.max = Some(parse_number(&meta)?);
            } else if let Some(flag) = FLAG_NAMES.iter().find(|f| meta.path.is_ident(f)) {
                result.flags.push((*flag).to_string());
            } else {
                return Err(meta.error(
                    "unknown #[convar] attribute.\n\nExpected one of: name, default, help, min, max, hidden, protected, archive, notify, replicated, cheat, dont_record",
                ));
            }
            Ok(())
        })?;
    }

    Ok(result)
}

fn parse_string(meta: &ParseNestedMeta<'_>) -> syn::Result<String> {
    let lit: LitStr = meta.value()?.parse()?;
    Ok(lit.value())
}

fn parse_number(meta: &ParseNestedMeta<'_>) -> syn::Result<f32> {
    let expr: Expr = meta.value()?.parse()?;
    number_from_expr(&expr)
}

fn number_from_expr(expr: &Expr) -> syn::Result<f32> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Float(f), ..
        }) => f.base10_parse::<f32>(),
        Expr::Lit(ExprLit {
            lit: Lit::Int(i), ..
        }) => i.base10_parse::<i64>().map(|v| v as f32),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr,
            ..
        }) => number_from_expr(expr).map(|v| -v),
        _ => Err(syn::Error::new_spanned(
            expr,
            "expected a number literal.\n\nExample: #[convar(min = 0, max = 1.5)]",
        )),
    }
}
