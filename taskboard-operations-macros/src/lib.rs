//! `#[operation]`: the verb/noun/description triple for a board command.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    DeriveInput, Expr, ExprLit, Lit, MetaNameValue, Token,
};

/// Generate the `Operation` impl for a command struct.
///
/// All three keys are required; generic structs keep their bounds.
///
/// ```ignore
/// #[operation(verb = "add", noun = "column", description = "Append an empty column")]
/// #[derive(Debug, Deserialize, Serialize)]
/// pub struct AddColumn {
///     /// The column name
///     pub name: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn operation(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as OperationArgs);
    let input = parse_macro_input!(item as DeriveInput);

    if !matches!(input.data, syn::Data::Struct(_)) {
        return syn::Error::new_spanned(&input.ident, "operation macro only supports structs")
            .to_compile_error()
            .into();
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let verb = &args.verb;
    let noun = &args.noun;
    let description = &args.description;

    let expanded = quote! {
        #input

        impl #impl_generics taskboard_operations::Operation for #name #ty_generics #where_clause {
            fn verb(&self) -> &'static str {
                #verb
            }

            fn noun(&self) -> &'static str {
                #noun
            }

            fn description(&self) -> &'static str {
                #description
            }
        }
    };

    TokenStream::from(expanded)
}

/// `verb`, `noun` and `description`, each given exactly once
struct OperationArgs {
    verb: String,
    noun: String,
    description: String,
}

impl Parse for OperationArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let pairs = Punctuated::<MetaNameValue, Token![,]>::parse_terminated(input)?;

        let mut verb = None;
        let mut noun = None;
        let mut description = None;

        for pair in pairs {
            let key = pair
                .path
                .get_ident()
                .map(ToString::to_string)
                .unwrap_or_default();
            let slot = match key.as_str() {
                "verb" => &mut verb,
                "noun" => &mut noun,
                "description" => &mut description,
                _ => {
                    return Err(syn::Error::new_spanned(
                        &pair.path,
                        "expected `verb`, `noun` or `description`",
                    ))
                }
            };
            if slot.is_some() {
                return Err(syn::Error::new_spanned(
                    &pair.path,
                    format!("`{key}` given twice"),
                ));
            }
            *slot = Some(string_value(&pair.value)?);
        }

        let required = |value: Option<String>, key: &str| {
            value
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| input.error(format!("`{key}` is required and must not be empty")))
        };

        Ok(OperationArgs {
            verb: required(verb, "verb")?,
            noun: required(noun, "noun")?,
            description: required(description, "description")?,
        })
    }
}

fn string_value(expr: &Expr) -> syn::Result<String> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok(s.value()),
        other => Err(syn::Error::new_spanned(other, "expected a string literal")),
    }
}
