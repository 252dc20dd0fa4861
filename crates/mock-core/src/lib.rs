//! Core types for the fmock placeholder engine.
//!
//! This crate provides the foundational types shared by the generator set,
//! the resolver and the CLI:
//!
//! - [`MockValue`] - Value produced by a generator
//! - [`Arg`] - A single parsed directive argument (number or text)
//! - [`GeneratorArgs`] - Argument list with positional/named option lookup
//! - [`limits`] - Process-wide length bounds and default formats
//! - [`MockSchema`] - Custom generator definitions loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! mock-core (this crate)
//!    │
//!    ├─── mock-generator  (generator set, registries, resolver)
//!    │
//!    └─── fmock           (CLI)
//! ```
//!
//! # Example
//!
//! ```rust
//! use mock_core::{Arg, GeneratorArgs};
//!
//! let args = GeneratorArgs::new(vec![Arg::Number(5), Arg::text("max=40")]);
//!
//! assert_eq!(args.option_int("min", 0), Some(5));
//! assert_eq!(args.option_int("max", 1), Some(40));
//! assert_eq!(args.option_int("len", 2), None);
//! ```

pub mod args;
pub mod limits;
pub mod schema;
pub mod values;

// Re-exports for convenience
pub use args::{parse_int, Arg, GeneratorArgs};
pub use limits::{
    DATETIME_DEFAULT_FORMAT, DATE_DEFAULT_FORMAT, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER,
    STRING_MAX_LEN, STRING_MIN_LEN, TIME_DEFAULT_FORMAT,
};
pub use schema::{CustomGenerator, GeneratorConfig, MockSchema, SchemaError};
pub use values::MockValue;
