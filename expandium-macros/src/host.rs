use std::collections::HashMap;
use std::sync::OnceLock;

use proc_macro2::TokenStream;

use crate::error::RewriteError;
use crate::invocation::Invocation;
use crate::logged::LoggedRewriter;
use crate::stringify::StringifyRewriter;
use crate::take_time::TakeTimeRewriter;

/// One declarative source rewriter: a named rule mapping an invocation
/// to a replacement fragment
pub(crate) trait Rewriter: Sync {
    /// Annotation name the rewriter is registered under
    fn name(&self) -> &'static str;

    /// Produce the replacement fragment for one annotation site
    fn expand(&self, invocation: Invocation) -> Result<TokenStream, RewriteError>;
}

/// Registration table, built once and alive for the build-step process
static REGISTRY: OnceLock<HashMap<&'static str, &'static dyn Rewriter>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, &'static dyn Rewriter> {
    REGISTRY.get_or_init(|| {
        let rewriters: [&'static dyn Rewriter; 3] =
            [&StringifyRewriter, &LoggedRewriter, &TakeTimeRewriter];
        rewriters
            .into_iter()
            .map(|rewriter| (rewriter.name(), rewriter))
            .collect()
    })
}

/// Look up the rewriter registered under `name` and forward the
/// invocation, propagating its result or failure unchanged.
///
/// There is no retry and no partial-failure handling: one failed
/// expansion fails the whole translation unit.
pub(crate) fn dispatch(name: &str, invocation: Invocation) -> Result<TokenStream, RewriteError> {
    match registry().get(name) {
        Some(rewriter) => rewriter.expand(invocation),
        None => Err(RewriteError::UnknownRewriter(name.to_string())),
    }
}
