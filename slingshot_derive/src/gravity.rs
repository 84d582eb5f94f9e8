pub fn impl_position(input: syn::Result<syn::DeriveInput>) -> syn::Result<proc_macro::TokenStream> {
    let mut input = input?;

    let position_ty = match &input.data {
        syn::Data::Struct(data_struct) => Ok(crate::get_field("position", data_struct)
            .ok_or_else(|| syn::Error::new_spanned(&data_struct.fields, "no `position` field"))?
            .ty
            .clone()),
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            "the `Position` trait can only be derived for struct types",
        )),
    }?;

    push_clone_bound(&mut input.generics, &position_ty);

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let name = &input.ident;

    Ok(quote::quote! {
        impl #impl_generics Position for #name #ty_generics #where_clause {
            type Vector = #position_ty;

            #[inline]
            fn position(&self) -> Self::Vector {
                self.position.clone()
            }
        }
    }
    .into())
}

pub fn impl_mass(input: syn::Result<syn::DeriveInput>) -> syn::Result<proc_macro::TokenStream> {
    let mut input = input?;

    let mass_ty = match &input.data {
        syn::Data::Struct(data_struct) => Ok(crate::get_field("mass", data_struct)
            .ok_or_else(|| syn::Error::new_spanned(&data_struct.fields, "no `mass` field"))?
            .ty
            .clone()),
        _ => Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "the `Mass` trait can only be derived for struct types",
        )),
    }?;

    push_clone_bound(&mut input.generics, &mass_ty);

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let name = &input.ident;

    Ok(quote::quote! {
        impl #impl_generics Mass for #name #ty_generics #where_clause {
            type Scalar = #mass_ty;

            #[inline]
            fn mass(&self) -> Self::Scalar {
                self.mass.clone()
            }
        }
    }
    .into())
}

fn push_clone_bound(generics: &mut syn::Generics, ty: &syn::Type) {
    generics
        .make_where_clause()
        .predicates
        .push(syn::parse_quote! {
            #ty: ::core::clone::Clone
        });
}
