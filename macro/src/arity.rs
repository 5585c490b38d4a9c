use crate::args::Arg;
use crate::config::Limits;
use crate::error::*;
use proc_macro2::Literal;
use proc_macro2::Span;
use proc_macro2::TokenStream;
use quote::ToTokens;

// =================
// === Operation ===
// =================

/// Every macro exported by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Operation {
    Narg,
    Not,
    IsEmpty,
    NotEmpty,
    Each,
    EachIdx,
    ParEachIdx,
    Par1EachIdx,
    Par2EachIdx,
}

/// Which configured ceiling bounds an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Ceiling {
    Count,
    Each,
}

impl Ceiling {
    pub fn config_key(self) -> &'static str {
        match self {
            Ceiling::Count => "count-limit",
            Ceiling::Each => "each-limit",
        }
    }

    pub fn value(self, limits: &Limits) -> usize {
        match self {
            Ceiling::Count => limits.count,
            Ceiling::Each => limits.each,
        }
    }
}

impl Operation {
    pub fn macro_name(self) -> &'static str {
        match self {
            Operation::Narg => "narg!",
            Operation::Not => "not!",
            Operation::IsEmpty => "is_empty!",
            Operation::NotEmpty => "not_empty!",
            Operation::Each => "each!",
            Operation::EachIdx => "each_idx!",
            Operation::ParEachIdx => "par_each_idx!",
            Operation::Par1EachIdx => "par1_each_idx!",
            Operation::Par2EachIdx => "par2_each_idx!",
        }
    }

    /// Plain iteration has its own, higher ceiling. The indexed forms share the counter's, as
    /// their indices are counted.
    pub fn ceiling(self) -> Ceiling {
        match self {
            Operation::Each => Ceiling::Each,
            _ => Ceiling::Count,
        }
    }

    /// Operations producing a number, which `not!` evaluates eagerly when nested in it.
    pub fn from_numeric_macro_name(name: &str) -> Option<Self> {
        match name {
            "narg" => Some(Operation::Narg),
            "not" => Some(Operation::Not),
            "is_empty" => Some(Operation::IsEmpty),
            "not_empty" => Some(Operation::NotEmpty),
            _ => None,
        }
    }

    /// Fail when `args` exceed the operation's ceiling, pointing at the first excess argument.
    pub fn check_arity(self, args: &[Arg], limits: &Limits) -> Result {
        let ceiling = self.ceiling();
        let limit = ceiling.value(limits);
        if args.len() <= limit { return Ok(()) }
        let span = args.get(limit).map_or_else(Span::call_site, |arg| arg.span);
        err!(span,
            "{}: {} arguments exceed the ceiling of {limit}. The ceiling is set by '{}' in \
            [package.metadata.va-iter].",
            self.macro_name(), args.len(), ceiling.config_key()
        )
    }
}

/// Decimal literal without a suffix, so it can be used as a `usize`, any other integer type or
/// a tuple field index.
pub(crate) fn number(n: usize) -> TokenStream {
    Literal::usize_unsuffixed(n).into_token_stream()
}

// =============
// === Tests ===
// =============
