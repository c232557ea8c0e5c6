#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

//! # Expandium rewriters
//!
//! Procedural implementation of the three expandium macros. Each entry
//! point builds an [`Invocation`](invocation::Invocation) from the token
//! streams the compiler hands over and dispatches it through the
//! rewriter host, which owns the name-to-rewriter registration table.
//!
//! Use these through the `expandium` crate, which re-exports the macros
//! next to the runtime support the generated code calls into.

mod error;
mod host;
mod invocation;
mod logged;
mod signature;
mod stringify;
mod take_time;
mod validate;

use proc_macro::TokenStream;

use crate::invocation::Invocation;

/// Expand to a tuple of an expression's value and its source text.
///
/// ```ignore
/// let (value, code) = stringify!(a + b);
/// // value == a + b, code == "a + b"
/// ```
#[proc_macro]
pub fn stringify(input: TokenStream) -> TokenStream {
    expand("stringify", Invocation::expression(input.into()))
}

/// Bridge a callback-style function into an async one.
///
/// Fires only when the last parameter is an `impl Fn*` callback taking
/// exactly one argument and returning nothing; the async form takes the
/// function's name and the callback form stays reachable under
/// `<name>_with_callback`, printing a diagnostic line on entry.
///
/// ```ignore
/// #[logged("request")]
/// fn request(path: String, completion: impl FnOnce(String)) {
///     completion(path);
/// }
///
/// // generated: async fn request(path: String) -> String
/// let body = request("https://".to_string()).await;
/// ```
///
/// For any other signature the attribute is a silent no-op: the function
/// is emitted exactly as written.
#[proc_macro_attribute]
pub fn logged(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand("logged", Invocation::attached(attr.into(), item.into()))
}

/// Bracket a function body with monotonic timing and print the labeled
/// elapsed seconds after the body runs.
///
/// ```ignore
/// #[take_time("[demo] ")]
/// fn reduce(limit: u64) -> u64 {
///     (0..limit).sum()
/// }
/// ```
#[proc_macro_attribute]
pub fn take_time(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand("take_time", Invocation::attached(attr.into(), item.into()))
}

/// Dispatch one invocation and render failures as compile diagnostics
fn expand(name: &str, invocation: Invocation) -> TokenStream {
    match host::dispatch(name, invocation) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
