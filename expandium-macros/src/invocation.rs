use proc_macro2::TokenStream;

/// One expansion request as handed over by the compiler
#[derive(Clone, Debug)]
pub(crate) struct Invocation {
    /// Argument stream of the annotation
    pub(crate) args: TokenStream,
    /// Decorated item, absent for expression macros
    pub(crate) item: Option<TokenStream>,
}

impl Invocation {
    /// Invocation of an expression macro: arguments only
    pub(crate) fn expression(args: TokenStream) -> Self {
        Invocation { args, item: None }
    }

    /// Invocation of an attached macro: arguments plus the decorated item
    pub(crate) fn attached(args: TokenStream, item: TokenStream) -> Self {
        Invocation {
            args,
            item: Some(item),
        }
    }
}
