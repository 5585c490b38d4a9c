#![cfg_attr(nightly, feature(proc_macro_diagnostic, track_path))]

mod args;
mod arity;
mod config;
mod error;
mod iter;
mod path;
mod predicate;
mod template;

use arity::Operation;
use config::Limits;
use error::*;
use proc_macro2::TokenStream;

// =================
// === Expansion ===
// =================

/// Output of one operation: the generated tokens and the warnings to report alongside.
#[derive(Debug)]
pub(crate) struct Expansion {
    pub tokens: TokenStream,
    pub warnings: Vec<Issue>,
}

impl Expansion {
    pub fn new(tokens: TokenStream) -> Self {
        Self { tokens, warnings: vec![] }
    }
}

fn expand(op: Operation, input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand_impl(op, input.into()).unwrap_or_compile_error().into()
}

fn expand_impl(op: Operation, input: TokenStream) -> Result<TokenStream> {
    debug!("{}({input})", op.macro_name());
    let limits = Limits::load()?;
    let expansion = match op {
        Operation::Narg | Operation::Not | Operation::IsEmpty | Operation::NotEmpty =>
            predicate::evaluate(op, input, &limits)?,
        Operation::Each
        | Operation::EachIdx
        | Operation::ParEachIdx
        | Operation::Par1EachIdx
        | Operation::Par2EachIdx =>
            iter::iterate(op, input, &limits)?,
    };
    for warning in &expansion.warnings {
        warning.report();
    }
    debug!("{} => {}", op.macro_name(), expansion.tokens);
    Ok(expansion.tokens)
}

// ==================
// === Counting ===
// ==================

/// Number of comma-separated arguments, as an unsuffixed integer literal. `narg!()` is `0`.
#[proc_macro]
pub fn narg(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand(Operation::Narg, input)
}

/// `1` if the operand is the literal `0`, else `0`.
#[proc_macro]
pub fn not(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand(Operation::Not, input)
}

/// `1` if there are no arguments, else `0`.
#[proc_macro]
pub fn is_empty(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand(Operation::IsEmpty, input)
}

/// `1` if there is at least one argument, else `0`.
#[proc_macro]
pub fn not_empty(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand(Operation::NotEmpty, input)
}

// =================
// === Iteration ===
// =================

/// `each!(f, a, b)` expands to `f! { a } f! { b }`.
#[proc_macro]
pub fn each(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand(Operation::Each, input)
}

/// `each_idx!(f, a, b)` expands to `f! { a, 0 } f! { b, 1 }`.
#[proc_macro]
pub fn each_idx(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand(Operation::EachIdx, input)
}

/// `par_each_idx!(f, (p, q), a, b)` expands to `f! { p, q, a, 0 } f! { p, q, b, 1 }`. A bare
/// fixed parameter is passed as one: `par_each_idx!(f, p, a)` expands to `f! { p, a, 0 }`.
#[proc_macro]
pub fn par_each_idx(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand(Operation::ParEachIdx, input)
}

/// `par1_each_idx!(f, p, a, b)` expands to `f! { p, a, 0 } f! { p, b, 1 }`, passing `p` as is.
#[proc_macro]
pub fn par1_each_idx(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand(Operation::Par1EachIdx, input)
}

/// `par2_each_idx!(f, p, q, a)` expands to `f! { p, q, a, 0 }`.
#[proc_macro]
pub fn par2_each_idx(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand(Operation::Par2EachIdx, input)
}
