//! Derive macros for the traits of `slingshot::gravity`.

mod gravity;

/// Derive macro generating an implementation of the trait `Position`.
///
/// The struct needs a field named `position`.
#[proc_macro_derive(Position)]
pub fn position_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    gravity::impl_position(syn::parse(input)).unwrap_or_else(|e| e.to_compile_error().into())
}

/// Derive macro generating an implementation of the trait `Mass`.
///
/// The struct needs a field named `mass`.
#[proc_macro_derive(Mass)]
pub fn mass_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    gravity::impl_mass(syn::parse(input)).unwrap_or_else(|e| e.to_compile_error().into())
}

fn get_field<'a>(name: &str, data: &'a syn::DataStruct) -> Option<&'a syn::Field> {
    data.fields
        .iter()
        .find(|field| field.ident.as_ref().is_some_and(|ident| ident == name))
}
