use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod parsed;

use parsed::ParsedPatch;

/// Derive a partial-update companion struct.
///
/// For a struct `User` this generates `UserPatch`, where every field of `User`
/// becomes an `Option`. Fields marked `#[patch(skip)]` are left out. The patch
/// implements `waymeet::patch::Patch<User>`; applying it overwrites exactly the
/// fields that were set.
///
/// ```text
/// #[derive(Patch)]
/// pub struct FilterState {
///     pub categories: Vec<String>,
///     pub price_max: f64,
/// }
///
/// // Generated:
/// // pub struct FilterStatePatch { pub categories: Option<Vec<String>>, pub price_max: Option<f64> }
/// // FilterStatePatch::new().price_max(500.0).apply(&mut filters)
/// ```
#[proc_macro_derive(Patch, attributes(patch))]
pub fn derive_patch(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ParsedPatch::from_input(&input) {
        Ok(parsed) => parsed.emit().into(),
        Err(err) => err.to_compile_error().into(),
    }
}
