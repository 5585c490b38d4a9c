use crate::error::*;
use proc_macro2::Delimiter;
use proc_macro2::Span;
use proc_macro2::TokenStream;
use proc_macro2::TokenTree;
use quote::ToTokens;

// ===========
// === Arg ===
// ===========

/// One argument: the tokens between two top-level commas. The engine never looks inside.
#[derive(Clone, Debug)]
pub(crate) struct Arg {
    pub tokens: TokenStream,
    pub span: Span,
}

impl Arg {
    fn new(tokens: Vec<TokenTree>) -> Self {
        let span = tokens.first().map_or_else(Span::call_site, |t| t.span());
        Self { tokens: tokens.into_iter().collect(), span }
    }

    /// The argument without the invisible groups `macro_rules!` wraps forwarded fragments in.
    /// Only used where the engine must look at the argument's shape.
    pub fn peeled(&self) -> TokenStream {
        peel_none_delim(self.tokens.clone())
    }

    /// The inner stream if the argument is exactly one parenthesized group.
    pub fn parenthesized(&self) -> Option<proc_macro2::Group> {
        let mut tokens = self.peeled().into_iter();
        match (tokens.next(), tokens.next()) {
            (Some(TokenTree::Group(g)), None) if g.delimiter() == Delimiter::Parenthesis => Some(g),
            _ => None,
        }
    }
}

impl ToTokens for Arg {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(self.tokens.clone());
    }
}

// =============
// === Split ===
// =============

/// Split `input` at top-level commas. Commas nested in `()`, `[]` or `{}` do not split, so wrap
/// arguments like `HashMap<K, V>` or `|a, b| a + b` in parentheses.
///
/// A single trailing comma is accepted. An empty argument anywhere else is an error.
pub(crate) fn split_args(input: TokenStream) -> Result<Vec<Arg>> {
    // No tokens means no arguments, not one empty argument.
    if input.is_empty() { return Ok(vec![]) }
    let mut args = Vec::new();
    let mut current = Vec::new();
    for token in input {
        if let TokenTree::Punct(punct) = &token {
            if punct.as_char() == ',' {
                if current.is_empty() {
                    return err!(punct.span(), "Expected an argument before ','.");
                }
                args.push(Arg::new(std::mem::take(&mut current)));
                continue;
            }
        }
        current.push(token);
    }
    if !current.is_empty() {
        args.push(Arg::new(current));
    }
    Ok(args)
}

/// Remove invisible groups wrapping the whole stream, recursively.
pub(crate) fn peel_none_delim(tokens: TokenStream) -> TokenStream {
    let mut iter = tokens.clone().into_iter();
    match (iter.next(), iter.next()) {
        (Some(TokenTree::Group(g)), None) if g.delimiter() == Delimiter::None =>
            peel_none_delim(g.stream()),
        _ => tokens,
    }
}

// =============
// === Tests ===
// =============
