use proc_macro2::{Span, TokenStream};
use std::fmt;

/// Errors that can occur while rewriting an annotation site
#[derive(Debug)]
pub(crate) enum RewriteError {
    /// Attached rewriter applied to a declaration that is not a function
    NotAFunction {
        /// Name of the rewriter that rejected the declaration
        rewriter: &'static str,
        /// Location of the offending declaration
        span: Span,
    },
    /// Required label argument absent or not a simple string literal
    InvalidLabel {
        /// Name of the rewriter that rejected the argument
        rewriter: &'static str,
        /// Location of the offending argument list
        span: Span,
    },
    /// Expression rewriter invoked with an empty argument stream
    MissingExpression {
        /// Name of the rewriter that received no arguments
        rewriter: &'static str,
        /// Location of the invocation
        span: Span,
    },
    /// Dispatch requested for a name with no registered rewriter
    UnknownRewriter(String),
    /// Malformed fragment surfaced by the parser
    Parse(syn::Error),
}

impl fmt::Display for RewriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteError::NotAFunction { rewriter, .. } => {
                write!(f, "#[{rewriter}] can only be attached to functions")
            }
            RewriteError::InvalidLabel { rewriter, .. } => {
                write!(f, "#[{rewriter}] name must be a string")
            }
            RewriteError::MissingExpression { rewriter, .. } => {
                write!(f, "{rewriter}! requires an expression argument")
            }
            RewriteError::UnknownRewriter(name) => {
                write!(f, "no rewriter registered for '{name}'")
            }
            RewriteError::Parse(err) => write!(f, "{err}"),
        }
    }
}
impl std::error::Error for RewriteError {}

impl From<syn::Error> for RewriteError {
    fn from(err: syn::Error) -> Self {
        RewriteError::Parse(err)
    }
}

impl RewriteError {
    /// Source location the error should be anchored at
    fn span(&self) -> Span {
        match self {
            RewriteError::NotAFunction { span, .. }
            | RewriteError::InvalidLabel { span, .. }
            | RewriteError::MissingExpression { span, .. } => *span,
            RewriteError::UnknownRewriter(_) => Span::call_site(),
            RewriteError::Parse(err) => err.span(),
        }
    }

    /// Render the error as a `compile_error!` fragment at its span
    pub(crate) fn into_compile_error(self) -> TokenStream {
        match self {
            RewriteError::Parse(err) => err.to_compile_error(),
            other => syn::Error::new(other.span(), other.to_string()).to_compile_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_function_message_is_stable() {
        let err = RewriteError::NotAFunction {
            rewriter: "logged",
            span: Span::call_site(),
        };
        assert_eq!(err.to_string(), "#[logged] can only be attached to functions");
    }

    #[test]
    fn invalid_label_message_is_stable() {
        let err = RewriteError::InvalidLabel {
            rewriter: "take_time",
            span: Span::call_site(),
        };
        assert_eq!(err.to_string(), "#[take_time] name must be a string");
    }

    #[test]
    fn missing_expression_message_names_the_rewriter() {
        let err = RewriteError::MissingExpression {
            rewriter: "stringify",
            span: Span::call_site(),
        };
        assert_eq!(err.to_string(), "stringify! requires an expression argument");
    }

    #[test]
    fn compile_error_fragment_carries_the_message() {
        let err = RewriteError::UnknownRewriter("bogus".to_string());
        let fragment = err.into_compile_error().to_string();
        assert!(fragment.contains("compile_error"));
        assert!(fragment.contains("no rewriter registered for 'bogus'"));
    }
}
