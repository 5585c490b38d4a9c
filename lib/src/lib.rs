//! # 🔁 va-iter
//!
//! **va-iter** applies a `macro_rules!` template to every argument of a variadic list at compile
//! time. It counts arguments, tests them for emptiness, and expands a template once per argument,
//! optionally with the argument's index and a set of fixed leading parameters. Everything happens
//! during macro expansion, so the generated code carries no runtime cost.
//!
//! | Macro                                  | Expands to                                   | Ceiling |
//! | :---                                   | :---                                         | :---    |
//! | `narg!(a, b, c)`                       | `3`                                          | 64      |
//! | `not!(x)`                              | `1` if `x` is `0`, else `0`                  | -       |
//! | `is_empty!(a, b)` / `not_empty!(a, b)` | `0` / `1`                                    | 64      |
//! | `each!(f, a, b)`                       | `f! { a } f! { b }`                          | 256     |
//! | `each_idx!(f, a, b)`                   | `f! { a, 0 } f! { b, 1 }`                    | 64      |
//! | `par_each_idx!(f, (p, q), a, b)`       | `f! { p, q, a, 0 } f! { p, q, b, 1 }`        | 64      |
//! | `par_each_idx!(f, p, a, b)`            | `f! { p, a, 0 } f! { p, b, 1 }`              | 64      |
//! | `par1_each_idx!(f, p, a)`              | `f! { p, a, 0 }`                             | 64      |
//! | `par2_each_idx!(f, p, q, a)`           | `f! { p, q, a, 0 }`                          | 64      |
//!
//! <br/>
//!
//! # 🤩 Syntax
//!
//! Arguments are separated by top-level commas and forwarded to the template untouched: a
//! character or string literal, a path such as `tested.arg` or an expression such as `3 * 2` is
//! one argument. Commas inside `()`, `[]` or `{}` do not split, but commas inside `<>` or closure
//! parameters do, so wrap such arguments in parentheses. A single trailing comma is allowed.
//!
//! The template is the path of a `macro_rules!` macro, optionally followed by `!`. It is invoked
//! with braces, so each invocation is a valid item or statement on its own. Separators between
//! invocations, if any, come from the template.
//!
//! ```
//! use va_iter::each;
//!
//! let mut values = Vec::new();
//! macro_rules! push {
//!     ($value:expr) => { values.push($value); };
//! }
//! each!(push, 1, 2, 3);
//! assert_eq!(values, [1, 2, 3]);
//! ```
//!
//! Counts are unsuffixed integer literals, so they work in `const` context and array lengths:
//!
//! ```
//! use va_iter::narg;
//! use va_iter::not;
//!
//! const FIELDS: usize = narg!(name, last_name, birthdate);
//! let names: [&str; narg!(a, b)] = ["a", "b"];
//! assert_eq!(FIELDS, 3);
//! assert_eq!(names.len(), 2);
//! assert_eq!(not!(narg!()), 1);
//! ```
//!
//! <br/>
//!
//! # 🔢 Indices and Fixed Parameters
//!
//! `each_idx!` passes the argument's position as a second parameter. The index is an unsuffixed
//! literal, so it can also select a tuple field:
//!
//! ```
//! use va_iter::each_idx;
//!
//! let mut chars = ['-'; 3];
//! macro_rules! cache_char_at_idx {
//!     ($c:expr, $idx:tt) => { chars[$idx] = $c; };
//! }
//! each_idx!(cache_char_at_idx, 'a', 'b', 'c');
//! assert_eq!(chars, ['a', 'b', 'c']);
//! ```
//!
//! `par_each_idx!` additionally prepends fixed parameters to every invocation. A parenthesized
//! argument is always the list of fixed parameters, anything else is a single fixed parameter:
//!
//! ```
//! use va_iter::par_each_idx;
//!
//! struct Tested(u16, u16, u16);
//! let tested = Tested(6, 4, 2);
//!
//! macro_rules! check_scaled {
//!     ($factor:expr, $base:ident, $value:expr, $idx:tt) => {
//!         assert_eq!($value * $factor, $base.$idx);
//!     };
//! }
//! par_each_idx!(check_scaled, (2, tested), 3, 2, 1);
//!
//! macro_rules! check {
//!     ($base:ident, $value:expr, $idx:tt) => { assert_eq!($value * 2, $base.$idx); };
//! }
//! par_each_idx!(check, tested, 3, 2, 1);
//! ```
//!
//! Because parentheses always denote the list, `(x)` means the same as `x` (and triggers a
//! warning), while a parenthesized value is passed with a second pair: `((a, b))`. Use
//! `par1_each_idx!` or `par2_each_idx!` to pass fixed parameters positionally, without any shape
//! detection.
//!
//! <br/>
//!
//! # 🧮 Predicates
//!
//! ```
//! use va_iter::*;
//!
//! assert_eq!(not!(0), 1);
//! assert_eq!(not!(9), 0);
//! assert_eq!(is_empty!(), 1);
//! assert_eq!(is_empty!('a'), 0);
//! assert_eq!(not_empty!(3, b, 4), 1);
//! ```
//!
//! `not!` evaluates calls to this crate's numeric macros eagerly when they are written with the
//! crate path, as in `va_iter::narg!(..)`. Any other operand that is not a literal, for example a
//! constant or a call to a macro found by its bare name, is left to the compiler as
//! `if (x) == 0 { 1 } else { 0 }`, so it tests whatever that macro expands to in your scope:
//!
//! ```
//! use va_iter::not;
//!
//! macro_rules! indirect { ($x:expr) => { $x }; }
//! macro_rules! narg { ($($t:tt)*) => { 0 }; }
//! const ZERO: u8 = 0;
//! assert_eq!(not!(indirect!(0)), 1);
//! assert_eq!(not!(indirect!(1)), 0);
//! assert_eq!(not!(ZERO), 1);
//! assert_eq!(not!(narg!(a, b)), 1);
//! assert_eq!(not!(va_iter::narg!(a, b)), 0);
//! ```
//!
//! <br/>
//!
//! # 📚 Configuration
//!
//! Every operation has a fixed ceiling. Exceeding it is a compile error, never a truncated
//! expansion. The two ceilings can be changed per crate or per workspace:
//!
//! ```toml
//! [package.metadata.va-iter]  # or [workspace.metadata.va-iter]
//! count-limit = 64   # narg!, not!, is_empty!, not_empty!, each_idx!, par*_each_idx!
//! each-limit = 256   # each!
//! ```
//!
//! Values must be in `1..=4096`. Setting `VA_ITER_DEBUG` in the environment of the build prints
//! every expansion.
//!
//! ```compile_fail
//! // 65 arguments exceed the default count ceiling.
//! const N: usize = va_iter::narg!(
//!     1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
//!     1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
//!     1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
//!     1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
//!     65
//! );
//! ```
//!
//! ```compile_fail
//! // 257 arguments exceed the default each ceiling. The template accepts every argument.
//! macro_rules! consume { ($value:expr) => { let _ = $value; }; }
//! va_iter::each!(consume,
//!     1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
//!     1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
//!     1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
//!     1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
//!     1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
//!     1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
//!     1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
//!     1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
//!     257
//! );
//! ```
//!
//! ```compile_fail
//! // 65 arguments exceed the count ceiling, which also bounds the indexed forms.
//! macro_rules! consume { ($value:expr, $idx:tt) => { let _ = ($value, $idx); }; }
//! va_iter::each_idx!(consume,
//!     1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
//!     1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
//!     1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
//!     1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
//!     65
//! );
//! ```
//!
//! ```compile_fail
//! // Fixed parameters do not count towards the ceiling, the 65 arguments after them do.
//! macro_rules! consume {
//!     ($a:expr, $b:expr, $value:expr, $idx:tt) => { let _ = ($a, $b, $value, $idx); };
//! }
//! va_iter::par_each_idx!(consume, (1, 2),
//!     1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
//!     1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
//!     1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
//!     1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
//!     65
//! );
//! ```
//!
//! ```compile_fail
//! // An empty argument is rejected.
//! const N: usize = va_iter::narg!(1, , 2);
//! ```
//!
//! ```compile_fail
//! // The template is not a path.
//! macro_rules! consume { ($value:expr) => { let _ = $value; }; }
//! va_iter::each!(1 + 2, 1, 2);
//! ```
//!
//! ```compile_fail
//! // The template's arity does not match the call form.
//! macro_rules! one { ($a:expr) => {}; }
//! va_iter::each_idx!(one, 1, 2);
//! ```
//!
//! The manifest is read while the macros expand, and stable cargo does not track that read.
//! After changing the ceilings, rebuild the affected crates (`cargo clean -p <crate>` or touch
//! one of their sources) so the new values apply. Nightly compilers register the manifests as
//! build inputs and rebuild on their own.
//!
//! <br/>
//!
//! # ⚠️ Troubleshooting
//!
//! Warnings, such as redundant parentheses around a fixed parameter, are reported as compiler
//! diagnostics on nightly. On stable they are printed to the build output, which cargo only shows
//! for failing builds or with `-vv`.

#![cfg_attr(not(feature = "std"), no_std)]

pub use va_iter_internal::*;
