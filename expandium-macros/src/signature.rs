use syn::{FnArg, PatType, PathArguments, ReturnType, Signature, Type, TypeParamBound};

/// Outcome of matching a callback-shaped trailing parameter
///
/// Holds the parameters ahead of the callback (the "real" parameters of
/// the suspend-style form) and the callback's single value type.
pub(crate) struct CallbackTail<'a> {
    /// Parameters preceding the callback, in declaration order
    pub(crate) real_params: Vec<&'a PatType>,
    /// The single parameter type of the callback
    pub(crate) value_type: &'a Type,
}

/// Match a signature whose last parameter is a single-argument callback.
///
/// A parameter is callback-shaped when its type is `impl Fn`, `impl FnMut`
/// or `impl FnOnce` with exactly one input and no return value. Bare
/// `fn(T)` pointers are excluded: the synthesized wrapper passes a
/// capturing closure, which cannot coerce to a function pointer. Methods
/// (signatures with a receiver) never match.
pub(crate) fn callback_tail(signature: &Signature) -> Option<CallbackTail<'_>> {
    let mut params = Vec::with_capacity(signature.inputs.len());
    for input in &signature.inputs {
        match input {
            FnArg::Receiver(_) => return None,
            FnArg::Typed(param) => params.push(param),
        }
    }
    let (last, real_params) = params.split_last()?;
    let value_type = single_input_closure(&last.ty)?;
    Some(CallbackTail {
        real_params: real_params.to_vec(),
        value_type,
    })
}

/// Extract the value type of an `impl Fn*` bound with one input and no
/// return value, or `None` if the type has any other shape.
fn single_input_closure(ty: &Type) -> Option<&Type> {
    let Type::ImplTrait(impl_trait) = ty else {
        return None;
    };

    let mut closure_bound = None;
    for bound in &impl_trait.bounds {
        let TypeParamBound::Trait(trait_bound) = bound else {
            continue;
        };
        let segment = trait_bound.path.segments.last()?;
        if matches!(segment.ident.to_string().as_str(), "Fn" | "FnMut" | "FnOnce") {
            // A second closure bound makes the parameter ambiguous
            if closure_bound.is_some() {
                return None;
            }
            closure_bound = Some(segment);
        }
    }

    let PathArguments::Parenthesized(arguments) = &closure_bound?.arguments else {
        return None;
    };
    match &arguments.output {
        ReturnType::Default => {}
        ReturnType::Type(_, output) => match output.as_ref() {
            Type::Tuple(tuple) if tuple.elems.is_empty() => {}
            _ => return None,
        },
    }
    if arguments.inputs.len() != 1 {
        return None;
    }
    arguments.inputs.first()
}
