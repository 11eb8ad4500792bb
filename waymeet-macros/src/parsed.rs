use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Error, Field, Fields, Ident, Result, Type, TypePath, Visibility};

pub(crate) struct ParsedPatch {
    name: Ident,
    vis: Visibility,
    fields: Vec<PatchField>,
}

struct PatchField {
    ident: Ident,
    ty: Type,
    docs: Vec<Attribute>,
}

impl ParsedPatch {
    pub(crate) fn from_input(input: &DeriveInput) -> Result<Self> {
        if !input.generics.params.is_empty() {
            return Err(Error::new_spanned(&input.generics, "Patch does not support generic structs"));
        }

        let named = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => &named.named,
                _ => return Err(Error::new(input.ident.span(), "Patch requires named fields")),
            },
            _ => return Err(Error::new(input.ident.span(), "Patch can only be derived for structs")),
        };

        let mut fields = Vec::new();
        for field in named {
            if Self::is_skipped(field)? {
                continue;
            }
            let ident = field
                .ident
                .clone()
                .ok_or_else(|| Error::new(input.ident.span(), "Patch requires named fields"))?;
            let docs = field.attrs.iter().filter(|attr| attr.path().is_ident("doc")).cloned().collect();
            fields.push(PatchField {
                ident,
                ty: field.ty.clone(),
                docs,
            });
        }

        if fields.is_empty() {
            return Err(Error::new(
                input.ident.span(),
                "Patch needs at least one field that is not #[patch(skip)]",
            ));
        }

        Ok(Self {
            name: input.ident.clone(),
            vis: input.vis.clone(),
            fields,
        })
    }

    fn is_skipped(field: &Field) -> Result<bool> {
        let mut skipped = false;
        for attr in &field.attrs {
            if !attr.path().is_ident("patch") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    skipped = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown patch attribute, expected `skip`"))
                }
            })?;
        }
        Ok(skipped)
    }

    pub(crate) fn emit(&self) -> TokenStream2 {
        let name = &self.name;
        let vis = &self.vis;
        let patch_name = format_ident!("{}Patch", name);
        let patch_doc = format!("Partial update for [`{name}`]. Unset fields are left untouched.");

        let struct_fields = self.fields.iter().map(|field| {
            let ident = &field.ident;
            let ty = &field.ty;
            let docs = &field.docs;
            quote! {
                #(#docs)*
                pub #ident: ::core::option::Option<#ty>,
            }
        });

        let setters = self.fields.iter().map(|field| {
            let ident = &field.ident;
            let ty = &field.ty;
            if is_string(ty) {
                quote! {
                    pub fn #ident(mut self, value: impl ::core::convert::Into<::std::string::String>) -> Self {
                        self.#ident = ::core::option::Option::Some(value.into());
                        self
                    }
                }
            } else {
                quote! {
                    pub fn #ident(mut self, value: #ty) -> Self {
                        self.#ident = ::core::option::Option::Some(value);
                        self
                    }
                }
            }
        });

        let idents: Vec<&Ident> = self.fields.iter().map(|field| &field.ident).collect();

        quote! {
            #[doc = #patch_doc]
            #[derive(Debug, Clone, Default, PartialEq)]
            #vis struct #patch_name {
                #(#struct_fields)*
            }

            impl #patch_name {
                pub fn new() -> Self {
                    Self::default()
                }

                #(#setters)*

                /// Returns `true` when no field is set.
                pub fn is_empty(&self) -> bool {
                    true #(&& self.#idents.is_none())*
                }
            }

            impl ::waymeet::patch::Patch<#name> for #patch_name {
                fn apply(self, target: &mut #name) {
                    #(
                        if let ::core::option::Option::Some(value) = self.#idents {
                            target.#idents = value;
                        }
                    )*
                }
            }
        }
    }
}

fn is_string(ty: &Type) -> bool {
    match ty {
        Type::Path(TypePath { qself: None, path }) => {
            path.segments.last().is_some_and(|segment| segment.ident == "String" && segment.arguments.is_empty())
        }
        _ => false,
    }
}
