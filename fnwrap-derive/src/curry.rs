//! Implementation of the `curry!` procedural macro.
//!
//! This module provides the curry! macro that transforms multi-argument
//! closures or functions into a curried `fnwrap::Function` chain.
//!
//! # Supported Input Forms
//!
//! 1. Closure form: `curry!(|a, b| body)`
//! 2. Function name + arity form: `curry!(function_name, arity)`
//!
//! # Design
//!
//! The macro adapts the multi-argument callable into a `Function` over the
//! argument tuple, then hands it to `fnwrap::Curry`. The nesting itself is
//! produced by the `Curry` implementations, so the macro only has to know the
//! arity and, for closures, the declared parameter types.
//!
//! # Generated Code Structure
//!
//! ## Closure Form
//!
//! For a closure `|a: A, b: B, c| body`, the macro generates:
//!
//! ```text
//! {
//!     let __fnwrap_function = |a: A, b: B, c| body;
//!     ::fnwrap::Curry::curry(::fnwrap::Function::new(
//!         move |(__fnwrap_argument_0, __fnwrap_argument_1, __fnwrap_argument_2,): (A, B, _,)| {
//!             __fnwrap_function(__fnwrap_argument_0, __fnwrap_argument_1, __fnwrap_argument_2)
//!         },
//!     ))
//! }
//! ```
//!
//! ## Function Name + Arity Form
//!
//! For `curry!(add, 2)`, the macro generates:
//!
//! ```text
//! {
//!     let __fnwrap_function = add;
//!     ::fnwrap::Curry::curry(::fnwrap::Function::new(
//!         move |(__fnwrap_argument_0, __fnwrap_argument_1,): (_, _,)| {
//!             __fnwrap_function(__fnwrap_argument_0, __fnwrap_argument_1)
//!         },
//!     ))
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::{Expr, ExprClosure, ExprLit, ExprPath, Lit, Pat, Token, spanned::Spanned};

enum CurryInput {
    Closure(ExprClosure),
    FunctionWithArity { function: ExprPath, arity: usize },
}

pub fn curry_impl(input: TokenStream) -> TokenStream {
    let expanded = match parse_curry_input(input) {
        Ok(CurryInput::Closure(closure)) => generate_curry_from_closure(&closure),
        Ok(CurryInput::FunctionWithArity { function, arity }) => {
            let placeholders = vec![quote! { _ }; arity];
            generate_tupled_curry(&quote! { #function }, &placeholders)
        }
        Err(error) => error.to_compile_error(),
    };

    TokenStream::from(expanded)
}

fn parse_curry_input(input: TokenStream) -> syn::Result<CurryInput> {
    let input_tokens: TokenStream2 = input.into();
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let expressions: Punctuated<Expr, Token![,]> =
        syn::parse::Parser::parse2(parser, input_tokens)?;

    let mut expressions: Vec<Expr> = expressions.into_iter().collect();
    match (expressions.pop(), expressions.pop(), expressions.is_empty()) {
        (Some(single), None, true) => parse_single_expression(single),
        (Some(arity), Some(function), true) => parse_function_with_arity(function, arity),
        _ => Err(syn::Error::new(
            Span::call_site(),
            "curry! requires a closure or function name with arity",
        )),
    }
}

fn parse_single_expression(expression: Expr) -> syn::Result<CurryInput> {
    match expression {
        Expr::Closure(closure) => Ok(CurryInput::Closure(closure)),
        Expr::Path(path) => Err(syn::Error::new(
            path.span(),
            "curry! with function name requires arity: curry!(function_name, 2)",
        )),
        other => Err(syn::Error::new(
            other.span(),
            "curry! requires a closure or function name with arity",
        )),
    }
}

fn parse_function_with_arity(function: Expr, arity: Expr) -> syn::Result<CurryInput> {
    let function = match function {
        Expr::Path(path) => path,
        other => {
            return Err(syn::Error::new(
                other.span(),
                "expected a function name or path",
            ));
        }
    };

    let arity = match arity {
        Expr::Lit(ExprLit {
            lit: Lit::Int(literal_integer),
            ..
        }) => literal_integer.base10_parse::<usize>()?,
        other => {
            return Err(syn::Error::new(
                other.span(),
                "curry! expected an integer literal for arity",
            ));
        }
    };

    validate_arity(arity, function.span())?;

    Ok(CurryInput::FunctionWithArity { function, arity })
}

/// Arities accepted by `fnwrap::Curry`.
const MINIMUM_ARITY: usize = 2;
const MAXIMUM_ARITY: usize = 8;

fn validate_arity(arity: usize, span: Span) -> syn::Result<()> {
    if arity < MINIMUM_ARITY {
        return Err(syn::Error::new(
            span,
            "curry! requires a function with at least 2 arguments",
        ));
    }
    if arity > MAXIMUM_ARITY {
        return Err(syn::Error::new(
            span,
            "curry! supports functions with at most 8 arguments",
        ));
    }
    Ok(())
}

fn generate_curry_from_closure(closure: &ExprClosure) -> TokenStream2 {
    if let Err(error) = validate_arity(closure.inputs.len(), closure.span()) {
        return error.to_compile_error();
    }

    let parameter_types: Vec<TokenStream2> = closure
        .inputs
        .iter()
        .map(|parameter| match parameter {
            Pat::Type(typed) => {
                let parameter_type = &typed.ty;
                quote! { #parameter_type }
            }
            _ => quote! { _ },
        })
        .collect();

    generate_tupled_curry(&quote! { #closure }, &parameter_types)
}

fn generate_tupled_curry(
    function_expression: &TokenStream2,
    parameter_types: &[TokenStream2],
) -> TokenStream2 {
    let argument_identifiers: Vec<_> = (0..parameter_types.len())
        .map(|index| format_ident!("__fnwrap_argument_{}", index))
        .collect();

    quote! {
        {
            let __fnwrap_function = #function_expression;
            ::fnwrap::Curry::curry(::fnwrap::Function::new(
                move |(#(#argument_identifiers,)*): (#(#parameter_types,)*)| {
                    __fnwrap_function(#(#argument_identifiers),*)
                },
            ))
        }
    }
}
