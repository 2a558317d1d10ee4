//! Derive and attribute macros that build the keytour introspection registry.
//!
//! These macros replace runtime reflection with tables generated at compile time:
//! - `Introspect`: implements `keytour_core::Introspect` (type name + attributes) and registers the type
//! - `introspect_methods`: registers the `pub` methods of an inherent `impl` block (or every method of a trait
//!   `impl`) as operations
//!
//! Both accept `#[introspect(...)]` helper attributes:
//! - container / `introspect_methods(...)`: `rename_all = "PascalCase" | "camelCase" | "snake_case"`
//! - container: `rename = "..."` for the reported type name
//! - field / method: `rename = "..."`, `skip`
//! - field: `readonly`

use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{
    Attribute, Data, DeriveInput, Fields, FnArg, ImplItem, ItemImpl, LitStr, Pat, ReturnType, Type, Visibility,
    parse_macro_input,
};

/// Generates the `keytour_core::Introspect` implementation and registers the type.
///
/// Only `pub` fields are reported. Tuple struct fields are reported by index.
///
/// # Example
/// ```ignore
/// #[derive(Introspect)]
/// #[introspect(rename_all = "PascalCase")]
/// pub struct Person {
///     pub name: String,
///     #[introspect(readonly)]
///     pub age: i64,
///     secret: u8,
/// }
///
/// // Generates:
/// impl keytour_core::Introspect for Person {
///     const TYPE_NAME: &'static str = "Person";
///     const ATTRIBUTES: &'static [AttributeInfo] = &[
///         AttributeInfo { name: "Name", type_name: "String", access: Access::READ_WRITE },
///         AttributeInfo { name: "Age", type_name: "i64", access: Access::READ_ONLY },
///     ];
/// }
/// // ...plus an `inventory::submit!` of the type's registry entry.
/// ```
#[proc_macro_derive(Introspect, attributes(introspect))]
pub fn derive_introspect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_introspect(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Registers the methods of an `impl` block as operations of its self type.
///
/// In an inherent `impl` only `pub` methods are registered; in a trait `impl` every method is. Several annotated
/// `impl` blocks may target the same type; their operations are reported in source order.
///
/// # Example
/// ```ignore
/// #[introspect_methods(rename_all = "PascalCase")]
/// impl Person {
///     pub fn greet(&self, other: &str) -> String { ... }
///     #[introspect(skip)]
///     pub fn new() -> Self { ... }
/// }
///
/// // Registers one operation: `Greet`, receiver `&self`, arity 1, returns `String`.
/// ```
#[proc_macro_attribute]
pub fn introspect_methods(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut rename_all = RenameRule::None;
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("rename_all") {
            let lit: LitStr = meta.value()?.parse()?;
            rename_all = RenameRule::from_lit(&lit)?;
            Ok(())
        } else {
            Err(meta.error("unsupported introspect_methods argument; expected `rename_all`"))
        }
    });
    parse_macro_input!(args with parser);

    let item = parse_macro_input!(input as ItemImpl);
    expand_methods(item, rename_all)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_introspect(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "Introspect cannot be derived for generic types; register a concrete type instead",
        ));
    }

    let container = parse_member_options(&input.attrs, MemberKind::Container)?;
    let type_name = container.rename.unwrap_or_else(|| name.unraw().to_string());
    let rule = container.rename_all;

    // Collect (reported name, type spelling, readonly) for every public field
    let mut attributes: Vec<(String, String, bool)> = Vec::new();
    match &input.data {
        Data::Struct(data) => match &data.fields {
            // Named fields (e.g. `struct User { pub name: String }`)
            Fields::Named(fields) => {
                for field in &fields.named {
                    let options = parse_member_options(&field.attrs, MemberKind::Field)?;
                    if options.skip || !is_public(&field.vis) {
                        continue;
                    }
                    let Some(ident) = &field.ident else { continue };
                    let reported = options
                        .rename
                        .unwrap_or_else(|| rule.apply(&ident.unraw().to_string()));
                    attributes.push((reported, type_spelling(&field.ty), options.readonly));
                }
            }
            // Unnamed fields (e.g. `struct User(pub String)`)
            Fields::Unnamed(fields) => {
                for (i, field) in fields.unnamed.iter().enumerate() {
                    let options = parse_member_options(&field.attrs, MemberKind::Field)?;
                    if options.skip || !is_public(&field.vis) {
                        continue;
                    }
                    let reported = options.rename.unwrap_or_else(|| i.to_string());
                    attributes.push((reported, type_spelling(&field.ty), options.readonly));
                }
            }
            Fields::Unit => {}
        },
        // Enums expose no data members of their own
        Data::Enum(_) => {}
        Data::Union(_) => {
            return Err(syn::Error::new(name.span(), "Introspect cannot be derived for unions"));
        }
    }

    let attribute_infos = attributes.iter().map(|(attr_name, field_type, readonly)| {
        let access = if *readonly {
            quote!(::keytour_core::Access::READ_ONLY)
        } else {
            quote!(::keytour_core::Access::READ_WRITE)
        };
        quote! {
            ::keytour_core::AttributeInfo {
                name: #attr_name,
                type_name: #field_type,
                access: #access,
            }
        }
    });

    Ok(quote! {
        impl ::keytour_core::Introspect for #name {
            const TYPE_NAME: &'static str = #type_name;
            const ATTRIBUTES: &'static [::keytour_core::AttributeInfo] = &[#(#attribute_infos),*];
        }

        ::keytour_core::inventory::submit! {
            ::keytour_core::introspect::registry::TypeEntry::of::<#name>(::core::module_path!())
        }
    })
}

fn expand_methods(mut item: ItemImpl, rule: RenameRule) -> syn::Result<proc_macro2::TokenStream> {
    // Trait methods carry no visibility of their own; they are as public as the trait.
    let trait_impl = item.trait_.is_some();
    if !item.generics.params.is_empty() {
        return Err(syn::Error::new(
            item.generics.span(),
            "introspect_methods cannot be used on generic impl blocks",
        ));
    }

    let mut operations = Vec::new();
    for impl_item in &mut item.items {
        let ImplItem::Fn(method) = impl_item else { continue };
        let options = parse_member_options(&method.attrs, MemberKind::Method)?;
        // The helper attribute is ours; rustc would reject it on a method.
        method.attrs.retain(|attr| !attr.path().is_ident("introspect"));
        if options.skip || !(trait_impl || is_public(&method.vis)) {
            continue;
        }

        let sig = &method.sig;
        let reported = options
            .rename
            .unwrap_or_else(|| rule.apply(&sig.ident.unraw().to_string()));

        let receiver = match sig.receiver() {
            None => quote!(::keytour_core::Receiver::None),
            Some(r) if r.colon_token.is_some() => quote!(::keytour_core::Receiver::Owned),
            Some(r) if r.reference.is_some() && r.mutability.is_some() => {
                quote!(::keytour_core::Receiver::RefMut)
            }
            Some(r) if r.reference.is_some() => quote!(::keytour_core::Receiver::Ref),
            Some(_) => quote!(::keytour_core::Receiver::Owned),
        };

        let params = sig.inputs.iter().filter_map(|arg| match arg {
            FnArg::Typed(pt) => {
                let param_name = match pt.pat.as_ref() {
                    Pat::Ident(pi) => pi.ident.unraw().to_string(),
                    _ => "_".to_string(),
                };
                let param_type = type_spelling(&pt.ty);
                Some(quote! {
                    ::keytour_core::ParamInfo { name: #param_name, type_name: #param_type }
                })
            }
            FnArg::Receiver(_) => None,
        });

        let returns = match &sig.output {
            ReturnType::Default => quote!(::core::option::Option::None),
            ReturnType::Type(_, ty) if is_unit(ty) => quote!(::core::option::Option::None),
            ReturnType::Type(_, ty) => {
                let spelled = type_spelling(ty);
                quote!(::core::option::Option::Some(#spelled))
            }
        };

        operations.push(quote! {
            ::keytour_core::OperationInfo {
                name: #reported,
                receiver: #receiver,
                params: &[#(#params),*],
                returns: #returns,
            }
        });
    }

    let self_ty = &item.self_ty;
    Ok(quote! {
        #item

        ::keytour_core::inventory::submit! {
            ::keytour_core::introspect::registry::OperationSet {
                type_id: ::core::any::TypeId::of::<#self_ty>,
                file: ::core::file!(),
                line: ::core::line!(),
                operations: &[#(#operations),*],
            }
        }
    })
}

// --- helper attributes -------------------------------------------------------

#[derive(Clone, Copy, PartialEq, Eq)]
enum MemberKind {
    Container,
    Field,
    Method,
}

#[derive(Default)]
struct MemberOptions {
    rename: Option<String>,
    rename_all: RenameRule,
    readonly: bool,
    skip: bool,
}

fn parse_member_options(attrs: &[Attribute], kind: MemberKind) -> syn::Result<MemberOptions> {
    let mut options = MemberOptions::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("introspect")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                options.rename = Some(lit.value());
            } else if meta.path.is_ident("rename_all") && kind == MemberKind::Container {
                let lit: LitStr = meta.value()?.parse()?;
                options.rename_all = RenameRule::from_lit(&lit)?;
            } else if meta.path.is_ident("readonly") && kind == MemberKind::Field {
                options.readonly = true;
            } else if meta.path.is_ident("skip") && kind != MemberKind::Container {
                options.skip = true;
            } else {
                return Err(meta.error("unsupported introspect option here"));
            }
            Ok(())
        })?;
    }
    Ok(options)
}

/// Naming convention applied to reported member names.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
enum RenameRule {
    #[default]
    None,
    PascalCase,
    CamelCase,
    SnakeCase,
}

impl RenameRule {
    fn from_lit(lit: &LitStr) -> syn::Result<Self> {
        match lit.value().as_str() {
            "PascalCase" => Ok(RenameRule::PascalCase),
            "camelCase" => Ok(RenameRule::CamelCase),
            "snake_case" => Ok(RenameRule::SnakeCase),
            other => Err(syn::Error::new(
                lit.span(),
                format!("unknown rename rule `{other}`; expected PascalCase, camelCase or snake_case"),
            )),
        }
    }

    fn apply(self, ident: &str) -> String {
        match self {
            RenameRule::None | RenameRule::SnakeCase => ident.to_string(),
            RenameRule::PascalCase => ident.split('_').filter(|part| !part.is_empty()).map(capitalize).collect(),
            RenameRule::CamelCase => {
                let pascal = RenameRule::PascalCase.apply(ident);
                let mut chars = pascal.chars();
                match chars.next() {
                    Some(first) => first.to_lowercase().chain(chars).collect(),
                    None => pascal,
                }
            }
        }
    }
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// --- type helpers -------------------------------------------------------------

fn is_public(vis: &Visibility) -> bool {
    matches!(vis, Visibility::Public(_))
}

fn is_unit(ty: &Type) -> bool {
    matches!(ty, Type::Tuple(tuple) if tuple.elems.is_empty())
}

/// Spell a type the way it reads in source (`Vec<String>`, `&mut i32`), not the token-spaced form.
fn type_spelling(ty: &Type) -> String {
    tidy_tokens(&quote!(#ty).to_string())
}

fn tidy_tokens(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' {
            let prev = out.chars().last();
            let next = chars.get(i + 1).copied();
            let glue_prev = matches!(prev, Some('<' | '(' | '[' | '&' | ':'));
            let glue_next = matches!(next, Some('<' | '>' | ',' | ')' | ']' | ':' | ';'));
            // `fn (i32)` and `Fn (i32)` are call-style argument lists; `&mut (i32, u8)` is a tuple.
            let glue_call = next == Some('(') && ends_with_callable_word(&out);
            if glue_prev || glue_next || glue_call {
                continue;
            }
        }
        out.push(c);
    }
    out
}

fn ends_with_callable_word(out: &str) -> bool {
    let word = out
        .rsplit(|c: char| !(c.is_alphanumeric() || c == '_'))
        .next()
        .unwrap_or_default();
    !word.is_empty() && !matches!(word, "mut" | "const" | "dyn" | "impl")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_joins_snake_words() {
        assert_eq!(RenameRule::PascalCase.apply("my_property"), "MyProperty");
        assert_eq!(RenameRule::PascalCase.apply("get_x"), "GetX");
        assert_eq!(RenameRule::PascalCase.apply("speak"), "Speak");
    }

    #[test]
    fn camel_case_lowers_first_word() {
        assert_eq!(RenameRule::CamelCase.apply("my_method"), "myMethod");
        assert_eq!(RenameRule::SnakeCase.apply("my_method"), "my_method");
    }

    #[test]
    fn type_spelling_removes_token_spacing() {
        let ty: Type = syn::parse_str("Vec<String>").unwrap();
        assert_eq!(type_spelling(&ty), "Vec<String>");
        let ty: Type = syn::parse_str("&mut i32").unwrap();
        assert_eq!(type_spelling(&ty), "&mut i32");
        let ty: Type = syn::parse_str("std::collections::HashMap<K, V>").unwrap();
        assert_eq!(type_spelling(&ty), "std::collections::HashMap<K, V>");
        let ty: Type = syn::parse_str("&'static str").unwrap();
        assert_eq!(type_spelling(&ty), "&'static str");
    }

    #[test]
    fn function_types_keep_argument_lists_attached() {
        let ty: Type = syn::parse_str("fn(i32) -> i32").unwrap();
        assert_eq!(type_spelling(&ty), "fn(i32) -> i32");
        let ty: Type = syn::parse_str("Box<dyn Fn(&str) -> bool>").unwrap();
        assert_eq!(type_spelling(&ty), "Box<dyn Fn(&str) -> bool>");
        let ty: Type = syn::parse_str("&mut (i32, u8)").unwrap();
        assert_eq!(type_spelling(&ty), "&mut (i32, u8)");
        let ty: Type = syn::parse_str("Option<(i32, u8)>").unwrap();
        assert_eq!(type_spelling(&ty), "Option<(i32, u8)>");
    }

    #[test]
    fn unit_return_is_detected() {
        let ty: Type = syn::parse_str("()").unwrap();
        assert!(is_unit(&ty));
        let ty: Type = syn::parse_str("(i32,)").unwrap();
        assert!(!is_unit(&ty));
    }
}
