//! Implementation of the `#[derive(Render)]` macro.
//!
//! The container shape decides the category of the generated impl. Field
//! types of generic structs get `Render` bounds so nested values recurse.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse_quote, spanned::Spanned, Data, DeriveInput, Error, Fields, Generics, Index, Result, Type,
};

use super::attrs::{parse_render_attrs, Shape};

/// Main implementation of the Render derive macro.
pub fn render_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let container = parse_render_attrs(&input.attrs)?;
    if container.skip {
        return Err(Error::new(
            container.span,
            "`skip` is a field attribute; it cannot be used on the type",
        ));
    }

    // Structs default to the tuple shape
    let shape = container.shape().unwrap_or(Shape::Tuple);

    let (category, body, generics) = match (&input.data, shape) {
        (_, Shape::Display) => display_impl(&input.generics),
        (Data::Struct(data), Shape::Pair) => {
            let fields = rendered_fields(&data.fields)?;
            if fields.len() != 2 {
                return Err(Error::new(
                    input.ident.span(),
                    format!(
                        "#[render(pair)] needs exactly two rendered fields, found {}",
                        fields.len()
                    ),
                ));
            }
            pair_impl(&input.generics, &fields)
        }
        (Data::Struct(data), Shape::Tuple) => {
            let fields = rendered_fields(&data.fields)?;
            tuple_impl(&input.generics, &fields)
        }
        (Data::Struct(data), Shape::Seq) => {
            rendered_fields(&data.fields)?;
            seq_impl(&input.generics)
        }
        (Data::Enum(_), _) => {
            return Err(Error::new(
                input.span(),
                "Render can only be derived for enums with #[render(display)]",
            ))
        }
        (Data::Union(_), _) => {
            return Err(Error::new(
                input.span(),
                "Render can only be derived for unions with #[render(display)]",
            ))
        }
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::standout_stringify::Render for #name #ty_generics #where_clause {
            const CATEGORY: ::standout_stringify::Category = #category;

            fn render<__W: ::core::fmt::Write + ?Sized>(
                &self,
                sink: &mut __W,
            ) -> ::core::fmt::Result {
                #body
            }
        }
    })
}

/// A field that takes part in the rendering.
struct RenderedField<'a> {
    access: TokenStream,
    ty: &'a Type,
}

/// Collect non-skipped fields in declaration order.
fn rendered_fields(fields: &Fields) -> Result<Vec<RenderedField<'_>>> {
    let mut rendered = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let attrs = parse_render_attrs(&field.attrs)?;
        if !attrs.shapes.is_empty() {
            return Err(Error::new(
                attrs.span,
                "render shapes belong on the type, not on fields",
            ));
        }
        if attrs.skip {
            continue;
        }

        let access = match &field.ident {
            Some(ident) => quote! { self.#ident },
            None => {
                let index = Index::from(index);
                quote! { self.#index }
            }
        };
        rendered.push(RenderedField {
            access,
            ty: &field.ty,
        });
    }

    Ok(rendered)
}

/// Add `Render` bounds on field types when the type is generic.
fn bound_fields(generics: &Generics, fields: &[RenderedField<'_>]) -> Generics {
    let mut generics = generics.clone();
    if generics.params.is_empty() {
        return generics;
    }
    let where_clause = generics.make_where_clause();
    for field in fields {
        let ty = field.ty;
        where_clause
            .predicates
            .push(parse_quote!(#ty: ::standout_stringify::Render));
    }
    generics
}

fn display_impl(generics: &Generics) -> (TokenStream, TokenStream, Generics) {
    let mut generics = generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(Self: ::core::fmt::Display));

    let category = quote! { ::standout_stringify::Category::Streamable };
    let body = quote! { ::core::write!(sink, "{}", self) };
    (category, body, generics)
}

fn pair_impl(
    generics: &Generics,
    fields: &[RenderedField<'_>],
) -> (TokenStream, TokenStream, Generics) {
    let first = &fields[0].access;
    let second = &fields[1].access;

    let category = quote! { ::standout_stringify::Category::Pairing };
    let body = quote! { ::standout_stringify::render_pair(sink, &#first, &#second) };
    (category, body, bound_fields(generics, fields))
}

fn tuple_impl(
    generics: &Generics,
    fields: &[RenderedField<'_>],
) -> (TokenStream, TokenStream, Generics) {
    let accesses = fields.iter().map(|field| &field.access);

    let category = quote! { ::standout_stringify::Category::Tuple };
    let body = quote! {
        #[allow(unused_mut)]
        let mut tuple = ::standout_stringify::Delimited::open(
            sink,
            ::standout_stringify::Category::Tuple,
        )?;
        #( tuple.entry(&#accesses)?; )*
        tuple.finish()
    };
    (category, body, bound_fields(generics, fields))
}

fn seq_impl(generics: &Generics) -> (TokenStream, TokenStream, Generics) {
    let mut generics = generics.clone();
    let where_clause = generics.make_where_clause();
    where_clause
        .predicates
        .push(parse_quote!(for<'__r> &'__r Self: ::core::iter::IntoIterator));
    where_clause.predicates.push(parse_quote!(
        for<'__r> <&'__r Self as ::core::iter::IntoIterator>::Item: ::standout_stringify::Render
    ));

    let category = quote! { ::standout_stringify::Category::Sequence };
    let body = quote! { ::standout_stringify::render_sequence(sink, self) };
    (category, body, generics)
}
