//! Placeholder resolution.
//!
//! A directive looks like `@opcode(arg,arg,...)`. The first such pattern in
//! the input is extracted, its opcode looked up (built-ins first, then the
//! fallback registry) and the generator invoked with the parsed arguments.
//! Input that holds no directive is handed back unchanged.
//!
//! Commas and parentheses inside arguments cannot be escaped: the argument
//! blob runs to the last `)` and is split on every `,`.

use crate::registry::{BuiltinRegistry, CustomRegistry, Generator, GeneratorRegistry, Layered};
use mock_core::{Arg, GeneratorArgs, MockValue};
use once_cell::sync::Lazy;
use rand::RngCore;
use regex::Regex;

static DIRECTIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@([A-Za-z0-9_]+)\((.*)\)").expect("directive pattern is valid"));

static OPTIONS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@([A-Za-z0-9_]+)(?:\|(.*))?$").expect("options pattern is valid"));

/// A parsed directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Generator name
    pub opcode: String,

    /// Arguments in directive order
    pub args: Vec<Arg>,
}

/// Extract the first `@opcode(args)` directive from `input`.
///
/// Empty segments are dropped, so `@string()` and `@string(5,)` carry zero
/// and one argument respectively.
pub fn parse_directive(input: &str) -> Option<Directive> {
    let caps = DIRECTIVE_RE.captures(input)?;
    let args = caps[2]
        .split(',')
        .filter(|segment| !segment.is_empty())
        .map(Arg::classify)
        .collect();

    Some(Directive {
        opcode: caps[1].to_string(),
        args,
    })
}

/// Parse the option form `@opcode|name=value&name=value`, or a bare `@opcode`.
///
/// The whole input must match. Pairs without `=` are ignored.
pub fn parse_options(input: &str) -> Option<Directive> {
    let caps = OPTIONS_RE.captures(input)?;
    let args = caps
        .get(2)
        .map(|options| {
            options
                .as_str()
                .split('&')
                .filter(|pair| pair.contains('='))
                .map(Arg::text)
                .collect()
        })
        .unwrap_or_default();

    Some(Directive {
        opcode: caps[1].to_string(),
        args,
    })
}

/// Resolves directives against the built-in generators and a fallback registry.
#[derive(Debug, Clone, Default)]
pub struct Resolver<F = CustomRegistry> {
    registry: Layered<BuiltinRegistry, F>,
}

impl Resolver {
    /// Resolver with only the built-in generators.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: GeneratorRegistry> Resolver<F> {
    /// Resolver that consults `fallback` for opcodes that are not built in.
    pub fn with_fallback(fallback: F) -> Self {
        Self {
            registry: Layered::new(BuiltinRegistry, fallback),
        }
    }

    /// The fallback registry.
    pub fn fallback(&self) -> &F {
        self.registry.fallback()
    }

    /// Look up the generator for an opcode.
    pub fn lookup(&self, opcode: &str) -> Option<Generator> {
        self.registry.lookup(opcode)
    }

    /// Resolve `input` using the thread-local RNG.
    ///
    /// Returns the input unchanged when it holds no directive and `None` when
    /// the opcode has no generator anywhere.
    pub fn resolve(&self, input: &str) -> Option<MockValue> {
        self.resolve_with(input, &mut rand::rng())
    }

    /// Resolve `input` drawing from `rng`.
    pub fn resolve_with<R: RngCore>(&self, input: &str, rng: &mut R) -> Option<MockValue> {
        match parse_directive(input) {
            Some(directive) => self.invoke(&directive, rng),
            None => Some(MockValue::string(input)),
        }
    }

    /// Resolve a template value using the thread-local RNG.
    ///
    /// Besides `@opcode(args)` this accepts the option form
    /// `@opcode|name=value&...` and a bare `@opcode`.
    pub fn mock(&self, input: &str) -> Option<MockValue> {
        self.mock_with(input, &mut rand::rng())
    }

    /// Resolve a template value drawing from `rng`.
    pub fn mock_with<R: RngCore>(&self, input: &str, rng: &mut R) -> Option<MockValue> {
        match parse_directive(input).or_else(|| parse_options(input)) {
            Some(directive) => self.invoke(&directive, rng),
            None => Some(MockValue::string(input)),
        }
    }

    /// Run the generator behind a parsed directive.
    pub fn invoke<R: RngCore>(&self, directive: &Directive, rng: &mut R) -> Option<MockValue> {
        let Some(generator) = self.lookup(&directive.opcode) else {
            tracing::debug!(opcode = %directive.opcode, "No generator for opcode");
            return None;
        };

        tracing::trace!(
            opcode = %directive.opcode,
            args = directive.args.len(),
            "Invoking generator"
        );
        let args = GeneratorArgs::new(directive.args.clone());
        let rng: &mut dyn RngCore = rng;
        Some(generator(&args, rng))
    }
}
