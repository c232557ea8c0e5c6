use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Expr;

use crate::error::RewriteError;
use crate::host::Rewriter;
use crate::invocation::Invocation;

/// Expression rewriter pairing a value with its own source text
///
/// `stringify!(a + b)` expands to `(a + b, "a + b")`. Pure function of
/// the invocation: no state, no side effects.
pub(crate) struct StringifyRewriter;

impl Rewriter for StringifyRewriter {
    fn name(&self) -> &'static str {
        "stringify"
    }

    fn expand(&self, invocation: Invocation) -> Result<TokenStream, RewriteError> {
        if invocation.args.is_empty() {
            // rustc gives no arity guarantee for function-like macros, so
            // the empty stream is a reportable error, not an assert.
            return Err(RewriteError::MissingExpression {
                rewriter: self.name(),
                span: Span::call_site(),
            });
        }
        let text = source_text(&invocation.args);
        let expr: Expr = syn::parse2(invocation.args)?;
        Ok(quote! { (#expr, #text) })
    }
}

/// Recover the call-site text of an argument stream.
///
/// Compiler-provided spans carry the original source byte-for-byte; the
/// fallback is the normalized token text, which only differs in
/// insignificant whitespace.
fn source_text(tokens: &TokenStream) -> String {
    let mut spans = tokens.clone().into_iter().map(|tree| tree.span());
    let joined = spans
        .next()
        .and_then(|first| spans.try_fold(first, |acc, span| acc.join(span)));
    joined
        .and_then(|span| span.source_text())
        .unwrap_or_else(|| tokens.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_expression_with_source_text() {
        let output = StringifyRewriter
            .expand(Invocation::expression(quote! { a + b }))
            .unwrap();
        assert_eq!(output.to_string(), quote! { (a + b, "a + b") }.to_string());
    }

    #[test]
    fn keeps_nested_expressions_intact() {
        let output = StringifyRewriter
            .expand(Invocation::expression(quote! { f(x) * (y - 1) }))
            .unwrap();
        assert_eq!(
            output.to_string(),
            quote! { (f(x) * (y - 1), "f (x) * (y - 1)") }.to_string()
        );
    }

    #[test]
    fn empty_invocation_is_a_typed_error() {
        let err = StringifyRewriter
            .expand(Invocation::expression(TokenStream::new()))
            .unwrap_err();
        assert_eq!(err.to_string(), "stringify! requires an expression argument");
    }

    #[test]
    fn malformed_expression_is_a_parse_error() {
        let err = StringifyRewriter
            .expand(Invocation::expression(quote! { let x = }))
            .unwrap_err();
        assert!(matches!(err, RewriteError::Parse(_)));
    }

    #[test]
    fn statement_trailing_tokens_are_rejected() {
        let err = StringifyRewriter
            .expand(Invocation::expression(quote! { a + b; c }))
            .unwrap_err();
        assert!(matches!(err, RewriteError::Parse(_)));
    }
}
