use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::{Ident, ItemFn, Pat};

use crate::error::RewriteError;
use crate::host::Rewriter;
use crate::invocation::Invocation;
use crate::signature::{CallbackTail, callback_tail};

/// Attached rewriter bridging callback-style functions into async ones
///
/// Fires only when the last parameter is a single-argument callback. The
/// callback form is kept under `<name>_with_callback` with a diagnostic
/// print at its entry; an `async fn <name>` taking the remaining
/// parameters and returning the callback's value type takes its place.
/// Any other signature is returned untouched, so the attribute can
/// silently do nothing.
pub(crate) struct LoggedRewriter;

impl Rewriter for LoggedRewriter {
    fn name(&self) -> &'static str {
        "logged"
    }

    fn expand(&self, invocation: Invocation) -> Result<TokenStream, RewriteError> {
        let function = crate::validate::require_function(self.name(), &invocation)?;
        // The label is validated but not consumed by the rewrite
        let _label = crate::validate::require_label(self.name(), &invocation)?;

        let tokens = match callback_tail(&function.sig) {
            Some(tail) => bridge(&function, &tail),
            None => function.to_token_stream(),
        };
        Ok(tokens)
    }
}

/// Synthesize the retained callback form and the suspend-style wrapper
fn bridge(function: &ItemFn, tail: &CallbackTail<'_>) -> TokenStream {
    let attrs = &function.attrs;
    let vis = &function.vis;
    let name = &function.sig.ident;
    let name_text = name.to_string();
    let generics = &function.sig.generics;
    let where_clause = &generics.where_clause;
    let statements = &function.block.stmts;
    let value_type = tail.value_type;

    let callback_name = format_ident!("{}_with_callback", name);
    let mut callback_sig = function.sig.clone();
    callback_sig.ident = callback_name.clone();

    let (wrapper_params, forwarded) = wrapper_parameters(tail);

    quote! {
        #(#attrs)*
        #vis #callback_sig {
            ::std::println!("logger ==> {}", #name_text);
            #(#statements)*
        }

        #(#attrs)*
        #vis async fn #name #generics (#(#wrapper_params),*) -> #value_type #where_clause {
            ::expandium::suspend(move |__continuation| {
                #callback_name(#(#forwarded,)* move |value| __continuation.resume(value));
            })
            .await
        }
    }
}

/// Rebuild the real parameters for the wrapper signature, and the
/// matching argument list forwarded to the callback form. Parameters
/// bound by anything other than a plain identifier get a synthesized
/// name so they can still be forwarded positionally.
fn wrapper_parameters(tail: &CallbackTail<'_>) -> (Vec<TokenStream>, Vec<Ident>) {
    let mut params = Vec::with_capacity(tail.real_params.len());
    let mut forwarded = Vec::with_capacity(tail.real_params.len());
    for (index, param) in tail.real_params.iter().enumerate() {
        let ty = &param.ty;
        let ident = match param.pat.as_ref() {
            Pat::Ident(pat) => pat.ident.clone(),
            _ => format_ident!("__arg{}", index),
        };
        params.push(quote! { #ident: #ty });
        forwarded.push(ident);
    }
    (params, forwarded)
}
