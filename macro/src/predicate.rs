use crate::Expansion;
use crate::args::peel_none_delim;
use crate::args::split_args;
use crate::arity::Operation;
use crate::arity::number;
use crate::config::Limits;
use crate::error::*;
use proc_macro2::TokenStream;
use proc_macro2::TokenTree;
use quote::quote;

// =============
// === Value ===
// =============

/// Result of a numeric operation. Values the engine cannot see through (constants, foreign macro
/// calls) are left to the compiler as a constant expression.
enum Value {
    Number(usize),
    Deferred(TokenStream),
}

impl Value {
    fn into_tokens(self) -> TokenStream {
        match self {
            Value::Number(n) => number(n),
            Value::Deferred(expr) => expr,
        }
    }
}

// ================
// === Evaluate ===
// ================

/// Expand `narg!`, `not!`, `is_empty!` and `not_empty!`.
pub(crate) fn evaluate(op: Operation, input: TokenStream, limits: &Limits) -> Result<Expansion> {
    let value = evaluate_value(op, input, limits)?;
    Ok(Expansion::new(value.into_tokens()))
}

fn evaluate_value(op: Operation, input: TokenStream, limits: &Limits) -> Result<Value> {
    if op == Operation::Not {
        return not(input, limits);
    }
    let args = split_args(input)?;
    op.check_arity(&args, limits)?;
    match op {
        // Zero arguments were already told apart from one empty argument while splitting.
        Operation::Narg => Ok(Value::Number(args.len())),
        Operation::IsEmpty => Ok(Value::Number(usize::from(args.is_empty()))),
        Operation::NotEmpty => Ok(Value::Number(usize::from(!args.is_empty()))),
        _ => err!("{} does not produce a number.", op.macro_name()),
    }
}

/// `1` if the operand is the literal `0`, else `0`. Crate-qualified calls to the numeric macros
/// are expanded first, so `not!(va_iter::narg!())` is `1`.
fn not(input: TokenStream, limits: &Limits) -> Result<Value> {
    let args = split_args(input)?;
    let [operand] = args.as_slice() else {
        return err!("not!: expected exactly one value, found {}.", args.len());
    };
    let tokens = operand.peeled();
    let value = match literal_is_zero(&tokens) {
        Some(is_zero) => Value::Number(usize::from(is_zero)),
        None => match nested_call(&tokens) {
            Some((nested_op, nested_input)) => {
                match evaluate_value(nested_op, nested_input, limits)
                    .context(|| error!(operand.span, "not!: failed to evaluate the operand."))?
                {
                    Value::Number(n) => Value::Number(usize::from(n == 0)),
                    Value::Deferred(expr) => deferred_not(&expr),
                }
            }
            None => deferred_not(&tokens),
        },
    };
    Ok(value)
}

fn deferred_not(expr: &TokenStream) -> Value {
    Value::Deferred(quote! { (if (#expr) == 0 { 1 } else { 0 }) })
}

/// Zero-ness of a single literal token. Only integer literals can be zero, the suffix is ignored.
fn literal_is_zero(tokens: &TokenStream) -> Option<bool> {
    let mut iter = tokens.clone().into_iter();
    let (Some(TokenTree::Literal(_)), None) = (iter.next(), iter.next()) else { return None };
    match syn::parse2::<syn::Lit>(tokens.clone()).ok()? {
        syn::Lit::Int(int) => Some(int.base10_digits().bytes().all(|b| b == b'0')),
        _ => Some(false),
    }
}

/// Crate names under which the numeric macros are evaluated eagerly when nested in `not!`.
const CRATE_NAMES: &[&str] = &["va_iter", "va_iter_internal"];

/// `va_iter::narg!(..)`, `::va_iter::is_empty!(..)`, etc. Unqualified names may refer to any
/// macro in the caller's scope, so they are left to the compiler.
fn nested_call(tokens: &TokenStream) -> Option<(Operation, TokenStream)> {
    let tokens: Vec<TokenTree> = peel_none_delim(tokens.clone()).into_iter().collect();
    let [path @ .., TokenTree::Punct(bang), TokenTree::Group(group)] = tokens.as_slice() else {
        return None;
    };
    if bang.as_char() != '!' { return None }
    let is_path = path.iter().all(|t| match t {
        TokenTree::Ident(_) => true,
        TokenTree::Punct(p) => p.as_char() == ':',
        _ => false,
    });
    if !is_path { return None }
    let mut segments = path.iter().filter_map(|t| match t {
        TokenTree::Ident(ident) => Some(ident.to_string()),
        _ => None,
    });
    let (Some(krate), Some(name), None) = (segments.next(), segments.next(), segments.next()) else {
        return None;
    };
    if !CRATE_NAMES.contains(&krate.as_str()) { return None }
    let op = Operation::from_numeric_macro_name(&name)?;
    Some((op, group.stream()))
}

// =============
// === Tests ===
// =============
