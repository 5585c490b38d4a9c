use crate::Expansion;
use crate::args::Arg;
use crate::args::split_args;
use crate::arity::Operation;
use crate::arity::number;
use crate::config::Limits;
use crate::error::*;
use crate::template::FixedParams;
use crate::template::Template;
use crate::template::missing_span;
use proc_macro2::TokenStream;
use quote::ToTokens;

// ============
// === Form ===
// ============

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Form {
    Plain,
    Indexed,
}

impl Operation {
    /// Names of the parameters preceding the argument list.
    fn leading_params(self) -> &'static [&'static str] {
        match self {
            Operation::Each | Operation::EachIdx => &["template"],
            Operation::ParEachIdx => &["template", "fixed parameters"],
            Operation::Par1EachIdx => &["template", "fixed parameter"],
            Operation::Par2EachIdx =>
                &["template", "first fixed parameter", "second fixed parameter"],
            Operation::Narg | Operation::Not | Operation::IsEmpty | Operation::NotEmpty => &[],
        }
    }

    fn form(self) -> Form {
        match self {
            Operation::Each => Form::Plain,
            _ => Form::Indexed,
        }
    }
}

// ===============
// === Iterate ===
// ===============

/// Expand `each!`, `each_idx!` and the `par*_each_idx!` family.
pub(crate) fn iterate(op: Operation, input: TokenStream, limits: &Limits) -> Result<Expansion> {
    let (leading, args) = split_leading(op, input)?;
    let mut warnings = vec![];
    let mut leading = leading.into_iter();
    let template_arg = leading.next().context(|| error!("{}: missing the template.", op.macro_name()))?;
    let template = Template::parse(&template_arg)?;
    let fixed = match op {
        Operation::ParEachIdx => {
            let fixed_arg = leading.next().context(|| error!("{}: missing the fixed parameters.", op.macro_name()))?;
            let (fixed, warning) = FixedParams::detect(&fixed_arg)?;
            warnings.extend(warning);
            fixed
        }
        Operation::Par1EachIdx | Operation::Par2EachIdx => FixedParams::positional(leading.collect()),
        _ => FixedParams::default(),
    };
    op.check_arity(&args, limits)?;
    debug!(
        "{}: template `{}`, {} fixed parameter(s) ({:?}), {} argument(s)",
        op.macro_name(), template.name(), fixed.len(), fixed.shape, args.len()
    );
    let tokens = apply(&template, &fixed, &args, op.form());
    Ok(Expansion { tokens, warnings })
}

/// One invocation per argument, in order, without separators. Zero arguments give nothing.
fn apply(template: &Template, fixed: &FixedParams, args: &[Arg], form: Form) -> TokenStream {
    args.iter().enumerate().map(|(ix, arg)| {
        let index = (form == Form::Indexed).then(|| number(ix));
        let params = fixed.iter().chain(Some(arg.to_token_stream())).chain(index);
        template.invoke(params)
    }).collect()
}

fn split_leading(op: Operation, input: TokenStream) -> Result<(Vec<Arg>, Vec<Arg>)> {
    let names = op.leading_params();
    let mut args = split_args(input)?;
    if let Some(missing) = names.get(args.len()) {
        return err!(missing_span(&args),
            "{}: missing the {missing}. Usage: {}({}, args..).",
            op.macro_name(), op.macro_name(), names.join(", ")
        );
    }
    let rest = args.split_off(names.len());
    Ok((args, rest))
}

// =============
// === Tests ===
// =============
