use proc_macro2::Span;
use proc_macro2::TokenStream;

// =============
// === Level ===
// =============

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Level {
    Warning,
    Error,
}

impl Level {
    pub const WARNING_PREFIX: &'static str = "[WARNING]";
    pub const ERROR_PREFIX: &'static str = "[ERROR]";

    #[cfg(not(nightly))]
    fn prefix(self) -> &'static str {
        match self {
            Level::Warning => Self::WARNING_PREFIX,
            Level::Error => Self::ERROR_PREFIX,
        }
    }
}

#[cfg(nightly)]
impl From<Level> for proc_macro::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Warning => proc_macro::Level::Warning,
            Level::Error => proc_macro::Level::Error,
        }
    }
}

/// Name of the environment variable enabling expansion traces.
pub(crate) const DEBUG_ENV: &str = "VA_ITER_DEBUG";

pub(crate) fn debug_enabled() -> bool {
    std::env::var_os(DEBUG_ENV).is_some()
}

macro_rules! debug { ($($ts:tt)*) => { if $crate::error::debug_enabled() { println!( $($ts)* )} }; }
pub(crate) use debug;

// ==============
// === Errors ===
// ==============

pub(crate) type Result<T=(), E=Issue> = std::result::Result<T, E>;

#[derive(Debug)]
pub(crate) struct Issue {
    pub level: Level,
    pub span: Option<Span>,
    pub message: String,
    pub cause: Option<Box<Issue>>,
}

impl Issue {
    pub fn msg(level: Level, span: Option<Span>, message: String) -> Self {
        Self { level, span, message, cause: None }
    }

    pub fn caused_by(mut self, cause: Issue) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    pub fn message_with_cause(&self) -> String {
        match &self.cause {
            None => self.message.clone(),
            Some(cause) =>
                format!("{}\nCaused by: {}", self.message, cause.message_with_cause()),
        }
    }

    /// Report a non-fatal issue. Nightly compilers get a real diagnostic, stable ones a prefixed
    /// line on stdout, which cargo shows for failing builds and with `-vv`.
    pub fn report(&self) {
        #[cfg(nightly)] {
            // `Span::unwrap` panics outside of a running proc macro.
            let span = self.span.unwrap_or_else(Span::call_site).unwrap();
            let message = self.message_with_cause();
            proc_macro::Diagnostic::spanned(span, self.level.into(), message).emit();
        }
        #[cfg(not(nightly))] {
            println!("{} {}", self.level.prefix(), self.message_with_cause());
        }
    }

    /// Brace form, valid in item, statement and expression position.
    pub fn compile_error(&self) -> TokenStream {
        let span = self.span.unwrap_or_else(Span::call_site);
        let message = self.message_with_cause();
        quote::quote_spanned! { span => compile_error! { #message } }
    }
}

macro_rules! issue   {
    ($l:expr,          $s:literal           ) => { Issue::msg($l, None,     format!($s)) };
    ($l:expr,          $s:literal, $($t:tt)*) => { Issue::msg($l, None,     format!($s, $($t)*)) };
    ($l:expr, $e:expr, $s:literal           ) => { Issue::msg($l, Some($e), format!($s)) };
    ($l:expr, $e:expr, $s:literal, $($t:tt)*) => { Issue::msg($l, Some($e), format!($s, $($t)*)) };
}

macro_rules! error   { ($($ts:tt)*) => { issue! { Level::Error,   $($ts)* }}; }
macro_rules! warning { ($($ts:tt)*) => { issue! { Level::Warning, $($ts)* }}; }
macro_rules! err     { ($($ts:tt)*) => { Err(error!($($ts)*)) }; }
pub(crate) use issue;
pub(crate) use error;
pub(crate) use warning;
pub(crate) use err;

// ===============
// === Context ===
// ===============

/// Wrap a failure in a higher level issue, keeping the original one as its cause.
pub(crate) trait Context<T, I> {
    fn context(self, issue: I) -> Result<T>;
}

impl<T, I> Context<T, I> for Result<T, Issue> where
I: FnOnce() -> Issue {
    fn context(self, issue: I) -> Result<T> {
        self.map_err(|e| issue().caused_by(e))
    }
}

impl<T, I> Context<T, I> for Option<T> where
I: FnOnce() -> Issue {
    fn context(self, issue: I) -> Result<T> {
        self.ok_or_else(issue)
    }
}

// ==============
// === Unwrap ===
// ==============

pub(crate) trait Unwrap {
    fn unwrap_or_compile_error(self) -> TokenStream;
}

impl Unwrap for Result<TokenStream, Issue> {
    fn unwrap_or_compile_error(self) -> TokenStream {
        self.unwrap_or_else(|e| e.compile_error())
    }
}

// =============
// === Tests ===
// =============
