//! Crate with its own `[package.metadata.va-iter]` limits, overriding the workspace ones.

use va_iter::each;

macro_rules! flag {
    ($name:ident) => { pub const $name: bool = true; };
}

each!(flag, A, B, C, D, E, F, G, H);
