//! Generator set and placeholder resolver for fmock.
//!
//! This crate turns placeholder directives such as `@string(5,10)` into
//! random values. Parsing never fails: text without a directive comes back
//! unchanged, malformed options are clamped or defaulted, and an opcode
//! nobody knows resolves to `None`.
//!
//! # Architecture
//!
//! ```text
//!   "@string(5,10)"
//!        │
//!        ▼
//! ┌──────────────────┐     ┌─────────────────────────────┐
//! │     Resolver     │────▶│ Layered registry            │
//! │                  │     │  1. BuiltinRegistry         │
//! │  parse_directive │     │  2. fallback (CustomRegistry│
//! └────────┬─────────┘     │     or any GeneratorRegistry│
//!          │               └─────────────────────────────┘
//!          ▼
//!    Option<MockValue>
//! ```
//!
//! # Example
//!
//! ```rust
//! use mock_generator::{CustomRegistry, MockValue, Resolver};
//!
//! let resolver = Resolver::new();
//!
//! let value = resolver.resolve("@string(min=10,max=40,len=33)").unwrap();
//! assert_eq!(value.as_str().unwrap().len(), 33);
//!
//! assert_eq!(resolver.resolve("plain text"), Some(MockValue::string("plain text")));
//! assert_eq!(resolver.resolve("@unknown()"), None);
//!
//! let mut custom = CustomRegistry::new();
//! custom.register("answer", |_args, _rng| MockValue::Int(42)).unwrap();
//! let resolver = Resolver::with_fallback(custom);
//! assert_eq!(resolver.resolve("@answer()"), Some(MockValue::Int(42)));
//! ```
//!
//! # Generators
//!
//! - `integer` - Random integer in `[min, max]`
//! - `float` - Random float in `[min, max]` with fixed decimals
//! - `char` - One alphanumeric character
//! - `string` - Alphanumeric string within the global length bounds
//! - `boolean` - Fair coin
//! - `date` / `time` / `datetime` - Random moment since the epoch, formatted
//! - `uuid` - Random UUID v4
//! - `pick` - One of the given arguments

pub mod generators;
pub mod registry;
pub mod resolver;

// Re-exports for convenience
pub use mock_core::{Arg, GeneratorArgs, MockValue};
pub use registry::{
    BuiltinRegistry, CustomRegistry, Generator, GeneratorRegistry, Layered, RegistryError,
};
pub use resolver::{parse_directive, parse_options, Directive, Resolver};
