use proc_macro2::TokenStream;
use quote::quote;
use syn::ItemFn;

use crate::error::RewriteError;
use crate::host::Rewriter;
use crate::invocation::Invocation;

/// Attached rewriter bracketing a function body with wall-clock timing
///
/// The original statements run unmodified between two monotonic tick
/// reads; the epilogue prints the label, the function name and the
/// elapsed seconds. Early `return` and `?` paths leave the function
/// before the epilogue runs.
pub(crate) struct TakeTimeRewriter;

impl Rewriter for TakeTimeRewriter {
    fn name(&self) -> &'static str {
        "take_time"
    }

    fn expand(&self, invocation: Invocation) -> Result<TokenStream, RewriteError> {
        let function = crate::validate::require_function(self.name(), &invocation)?;
        let label = crate::validate::require_label(self.name(), &invocation)?;
        Ok(instrument(&function, &label))
    }
}

/// Rebuild the function with the timing prologue and epilogue in place
fn instrument(function: &ItemFn, label: &syn::LitStr) -> TokenStream {
    let attrs = &function.attrs;
    let vis = &function.vis;
    let sig = &function.sig;
    let name_text = sig.ident.to_string();
    let statements = &function.block.stmts;

    quote! {
        #(#attrs)*
        #vis #sig {
            let __take_time_start = ::expandium::timing::now_ticks();
            // Binding the body's value keeps non-unit returns intact
            let __take_time_result = {
                #(#statements)*
            };
            let __take_time_end = ::expandium::timing::now_ticks();
            let __take_time_elapsed =
                ::expandium::timing::elapsed_seconds(__take_time_start, __take_time_end);
            ::std::println!("{}{} takeTime(ms): ", #label, #name_text);
            ::std::println!("{}", __take_time_elapsed);
            __take_time_result
        }
    }
}
