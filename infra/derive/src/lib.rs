#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros used across the bitsd workspace.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! bitsd-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for declaring the error enums of a crate.
///
/// The annotated enum becomes a `thiserror` error with a uniform shape: every
/// variant has named fields, and an optional `context: Option<Cow<'static, str>>`
/// field records where the failure happened.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait adding `.context(...)` to `Result<T, ErrorName>` and,
///   for variants wrapping an upstream error, to `Result<T, SourceError>`.
/// * `From<SourceError>` for variants with a `source` (or `#[source]`/`#[from]`) field.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant is present.
/// * An inherent `context_str()` accessor returning the attached context, if any.
/// * A private `format_context` helper for use inside `#[error(...)]` strings.
///
/// # Errors
///
/// Emits a compile error when applied to a non-enum, to tuple or unit variants,
/// to a `context` field of another type, or to a source variant without `context`.
///
/// # Example
///
/// ```rust,ignore
/// use bitsd_derive::bitsd_error;
/// use std::borrow::Cow;
///
/// #[bitsd_error]
/// pub enum DecodeError {
///     #[error("JSON error{}: {source}", format_context(.context))]
///     Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn decode(raw: &str) -> Result<serde_json::Value, DecodeError> {
///     serde_json::from_str(raw).context("decoding status document")
/// }
/// ```
#[proc_macro_attribute]
pub fn bitsd_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
