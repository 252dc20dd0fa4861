//! Generator lookup by opcode.
//!
//! The resolver asks a [`GeneratorRegistry`] for the callable behind an
//! opcode. Registries compose with [`Layered`]: the primary table is asked
//! first and the fallback only sees names the primary does not know.

use crate::generators::{self, generate_configured};
use mock_core::{GeneratorArgs, MockSchema, MockValue};
use rand::RngCore;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A callable generator.
pub type Generator = Arc<dyn Fn(&GeneratorArgs, &mut dyn RngCore) -> MockValue + Send + Sync>;

/// Error type for registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Name is not a valid opcode
    #[error("Invalid generator name '{0}': expected letters, digits or underscores")]
    InvalidName(String),

    /// Name already has a generator
    #[error("Generator already registered: {0}")]
    AlreadyRegistered(String),
}

/// Something that can resolve an opcode to a generator.
pub trait GeneratorRegistry: Send + Sync {
    /// Look up the generator for `name`.
    fn lookup(&self, name: &str) -> Option<Generator>;
}

/// The built-in generator set.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRegistry;

impl GeneratorRegistry for BuiltinRegistry {
    fn lookup(&self, name: &str) -> Option<Generator> {
        generators::builtin(name).map(|generator| Arc::new(generator) as Generator)
    }
}

/// User-registered generators, consulted for opcodes that are not built in.
#[derive(Clone, Default)]
pub struct CustomRegistry {
    generators: HashMap<String, Generator>,
}

impl CustomRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from custom generators declared in a schema.
    pub fn from_schema(schema: &MockSchema) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for custom in &schema.generators {
            let config = custom.generator.clone();
            registry.register(&custom.name, move |_args, rng| {
                generate_configured(&config, rng)
            })?;
        }
        Ok(registry)
    }

    /// Register a generator under `name`.
    pub fn register<F>(&mut self, name: &str, generator: F) -> Result<(), RegistryError>
    where
        F: Fn(&GeneratorArgs, &mut dyn RngCore) -> MockValue + Send + Sync + 'static,
    {
        if !is_valid_name(name) {
            return Err(RegistryError::InvalidName(name.to_string()));
        }
        if self.generators.contains_key(name) {
            return Err(RegistryError::AlreadyRegistered(name.to_string()));
        }
        if generators::builtin(name).is_some() {
            tracing::warn!(name, "Custom generator is shadowed by a built-in");
        }

        tracing::debug!(name, "Registered custom generator");
        self.generators.insert(name.to_string(), Arc::new(generator));
        Ok(())
    }

    /// Check if a generator is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.generators.contains_key(name)
    }

    /// Number of registered generators.
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Check if no generators are registered.
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl fmt::Debug for CustomRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.generators.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("CustomRegistry")
            .field("generators", &names)
            .finish()
    }
}

impl GeneratorRegistry for CustomRegistry {
    fn lookup(&self, name: &str) -> Option<Generator> {
        self.generators.get(name).cloned()
    }
}

/// Two registries queried in order.
#[derive(Debug, Clone, Default)]
pub struct Layered<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> Layered<P, F> {
    /// Compose `primary` with `fallback`.
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    /// The registry asked for names the primary does not know.
    pub fn fallback(&self) -> &F {
        &self.fallback
    }
}

impl<P, F> GeneratorRegistry for Layered<P, F>
where
    P: GeneratorRegistry,
    F: GeneratorRegistry,
{
    fn lookup(&self, name: &str) -> Option<Generator> {
        self.primary
            .lookup(name)
            .or_else(|| self.fallback.lookup(name))
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
