use crate::args::Arg;
use crate::args::split_args;
use crate::error::*;
use proc_macro2::Span;
use proc_macro2::TokenStream;
use proc_macro2::TokenTree;
use quote::ToTokens;
use quote::quote;

// ================
// === Template ===
// ================

/// Path of the `macro_rules!` macro invoked once per argument. Its arity is not checked here, a
/// mismatch is reported by rustc at the template itself.
pub(crate) struct Template {
    path: syn::Path,
}

impl Template {
    /// Accepts `name`, `path::to::name` and, for readability at call sites, `name!`.
    pub fn parse(arg: &Arg) -> Result<Self> {
        let mut tokens: Vec<TokenTree> = arg.peeled().into_iter().collect();
        if matches!(tokens.last(), Some(TokenTree::Punct(p)) if p.as_char() == '!') {
            tokens.pop();
        }
        let stream: TokenStream = tokens.into_iter().collect();
        let path = syn::parse2::<syn::Path>(stream)
            .map_err(|e| error!(e.span(), "{e}"))
            .context(|| error!(arg.span, "Expected the path of a macro to use as the template."))?;
        Ok(Self { path })
    }

    pub fn name(&self) -> String {
        self.path.to_token_stream().to_string()
    }

    /// `path! { params.. }`. The brace form needs no trailing `;` in statement position.
    pub fn invoke(&self, params: impl IntoIterator<Item = TokenStream>) -> TokenStream {
        let path = &self.path;
        let params = params.into_iter();
        quote! { #path ! { #(#params),* } }
    }
}

// ===================
// === FixedParams ===
// ===================

/// Parameters passed unchanged, ahead of the argument, to every template invocation.
#[derive(Debug, Default)]
pub(crate) struct FixedParams {
    pub params: Vec<Arg>,
    pub shape: Shape,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Shape {
    #[default]
    Positional,
    Scalar,
    Tuple,
}

impl FixedParams {
    /// Parameters given one by one, no shape detection.
    pub fn positional(params: Vec<Arg>) -> Self {
        Self { params, shape: Shape::Positional }
    }

    /// Shape detection is purely syntactic: a parenthesized argument is always the parameter tuple,
    /// anything else is one parameter. So `(x)` is the same as `x`, `((a, b))` passes the tuple
    /// `(a, b)` as one parameter, and `()` passes none.
    pub fn detect(arg: &Arg) -> Result<(Self, Option<Issue>)> {
        let Some(group) = arg.parenthesized() else {
            return Ok((Self { params: vec![arg.clone()], shape: Shape::Scalar }, None));
        };
        let stream = group.stream();
        let has_trailing_comma = matches!(
            stream.clone().into_iter().last(),
            Some(TokenTree::Punct(p)) if p.as_char() == ','
        );
        let params = split_args(stream)
            .context(|| error!(arg.span, "Invalid fixed parameter tuple."))?;
        let redundant = params.len() == 1
            && !has_trailing_comma
            && params.first().is_some_and(|p| p.parenthesized().is_none());
        let warning = redundant.then(|| warning!(group.span(),
            "Parentheses around a single fixed parameter are redundant, `{}` is passed as is. \
            Use `(({}))` to pass a parenthesized value.",
            params[0].tokens, params[0].tokens
        ));
        Ok((Self { params, shape: Shape::Tuple }, warning))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = TokenStream> + '_ {
        self.params.iter().map(ToTokens::to_token_stream)
    }
}

pub(crate) fn missing_span(args: &[Arg]) -> Span {
    args.last().map_or_else(Span::call_site, |a| a.span)
}

// =============
// === Tests ===
// =============
