//! Directive arguments and loose integer coercion.
//!
//! Directive arguments arrive as raw text tokens. A token is a number if and
//! only if it consists entirely of ASCII decimal digits; everything else
//! (including `-3`, `3.5` and `1e3`) stays text.

use std::collections::HashMap;
use std::fmt;

/// A single parsed directive argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// All-digit token
    Number(i64),

    /// Any other token, kept verbatim
    Text(String),
}

impl Arg {
    /// Classify a raw token.
    ///
    /// Digit runs too large for an `i64` saturate at `i64::MAX`.
    pub fn classify(token: &str) -> Self {
        if is_all_digits(token) {
            Self::Number(token.parse().unwrap_or(i64::MAX))
        } else {
            Self::Text(token.to_string())
        }
    }

    /// Create a text argument.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Try to get this argument as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// Split a `name=value` token into its name and classified value.
    fn as_named(&self) -> Option<(&str, Arg)> {
        let (name, value) = self.as_text()?.split_once('=')?;
        if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
            return None;
        }
        Some((name, Arg::classify(value)))
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

fn is_all_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Coerce an argument to an integer the way `parseInt(value, 10)` does.
///
/// Leading whitespace is skipped, an optional sign is accepted, and the
/// longest run of digits after it is used (`"12px"` is 12). Returns `None`
/// when there are no digits at all. Out-of-range values saturate.
pub fn parse_int(arg: &Arg) -> Option<i64> {
    match arg {
        Arg::Number(n) => Some(*n),
        Arg::Text(s) => parse_int_str(s),
    }
}

fn parse_int_str(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let value = rest[..digits_end]
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));
    Some(if negative { -value } else { value })
}

/// Argument list handed to a generator.
///
/// Tokens shaped like `name=value` are named options; all other tokens are
/// positional. Generators look options up by name first and fall back to a
/// position, so `@string(5,10)` and `@string(min=5,max=10)` are equivalent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratorArgs {
    /// Arguments in directive order
    args: Vec<Arg>,

    /// Indices into `args` of the positional arguments
    positional: Vec<usize>,

    /// Named options (last occurrence wins)
    named: HashMap<String, Arg>,
}

impl GeneratorArgs {
    /// Build from arguments in directive order.
    pub fn new(args: Vec<Arg>) -> Self {
        let mut positional = Vec::new();
        let mut named = HashMap::new();
        for (idx, arg) in args.iter().enumerate() {
            match arg.as_named() {
                Some((name, value)) => {
                    named.insert(name.to_string(), value);
                }
                None => positional.push(idx),
            }
        }

        Self {
            args,
            positional,
            named,
        }
    }

    /// All arguments in directive order, named ones included.
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Check if there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Look up an option by name, then by position among positional arguments.
    pub fn option(&self, name: &str, position: usize) -> Option<&Arg> {
        self.named.get(name).or_else(|| {
            self.positional
                .get(position)
                .map(|&idx| &self.args[idx])
        })
    }

    /// Look up an option and coerce it with [`parse_int`].
    pub fn option_int(&self, name: &str, position: usize) -> Option<i64> {
        self.option(name, position).and_then(parse_int)
    }

    /// Look up an option and render it as text.
    pub fn option_string(&self, name: &str, position: usize) -> Option<String> {
        self.option(name, position).map(ToString::to_string)
    }
}

impl From<Vec<Arg>> for GeneratorArgs {
    fn from(args: Vec<Arg>) -> Self {
        Self::new(args)
    }
}
