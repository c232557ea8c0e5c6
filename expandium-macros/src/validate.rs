use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Item, ItemFn, LitStr};

use crate::error::RewriteError;
use crate::invocation::Invocation;

/// Require the decorated item to be a function.
///
/// This check runs before any argument validation so that attaching a
/// rewriter to the wrong kind of declaration is always reported as
/// `NotAFunction`, label problems notwithstanding.
pub(crate) fn require_function(
    rewriter: &'static str,
    invocation: &Invocation,
) -> Result<ItemFn, RewriteError> {
    let Some(item) = &invocation.item else {
        return Err(RewriteError::NotAFunction {
            rewriter,
            span: Span::call_site(),
        });
    };
    match syn::parse2::<Item>(item.clone())? {
        Item::Fn(function) => Ok(function),
        other => Err(RewriteError::NotAFunction {
            rewriter,
            span: other.span(),
        }),
    }
}

/// Require the annotation argument to be a single string literal.
pub(crate) fn require_label(
    rewriter: &'static str,
    invocation: &Invocation,
) -> Result<LitStr, RewriteError> {
    if invocation.args.is_empty() {
        return Err(RewriteError::InvalidLabel {
            rewriter,
            span: Span::call_site(),
        });
    }
    let span = invocation.args.span();
    syn::parse2::<LitStr>(invocation.args.clone())
        .map_err(|_| RewriteError::InvalidLabel { rewriter, span })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RewriteError;
    use quote::quote;

    #[test]
    fn accepts_a_function_item() {
        let invocation = Invocation::attached(quote! { "label" }, quote! { fn f() {} });
        let function = require_function("logged", &invocation).unwrap();
        assert_eq!(function.sig.ident, "f");
    }

    #[test]
    fn rejects_non_function_items() {
        let invocation = Invocation::attached(quote! { "label" }, quote! { struct S; });
        let err = require_function("logged", &invocation).unwrap_err();
        assert!(matches!(err, RewriteError::NotAFunction { .. }));
    }

    #[test]
    fn rejects_missing_item() {
        let invocation = Invocation::expression(quote! { "label" });
        let err = require_function("take_time", &invocation).unwrap_err();
        assert_eq!(err.to_string(), "#[take_time] can only be attached to functions");
    }

    #[test]
    fn accepts_a_string_label() {
        let invocation = Invocation::attached(quote! { "span" }, quote! { fn f() {} });
        let label = require_label("logged", &invocation).unwrap();
        assert_eq!(label.value(), "span");
    }

    #[test]
    fn rejects_empty_argument_list() {
        let invocation = Invocation::attached(quote! {}, quote! { fn f() {} });
        let err = require_label("logged", &invocation).unwrap_err();
        assert_eq!(err.to_string(), "#[logged] name must be a string");
    }

    #[test]
    fn rejects_non_string_label() {
        let invocation = Invocation::attached(quote! { 42 }, quote! { fn f() {} });
        let err = require_label("logged", &invocation).unwrap_err();
        assert!(matches!(err, RewriteError::InvalidLabel { .. }));
    }

    #[test]
    fn rejects_multiple_labels() {
        let invocation = Invocation::attached(quote! { "a", "b" }, quote! { fn f() {} });
        let err = require_label("logged", &invocation).unwrap_err();
        assert!(matches!(err, RewriteError::InvalidLabel { .. }));
    }
}
