//! fmock library
//!
//! Shared pieces of the `fmock` command-line tool: resolver options and
//! output rendering. The engine itself lives in the `mock-generator` crate.
//!
//! # CLI Usage
//!
//! ```bash
//! # Resolve directives given as arguments
//! fmock '@string(5,10)' '@integer|min=1&max=100' '@date(YYYY/MM/DD)'
//!
//! # Resolve one directive per stdin line, three times each, as JSON
//! printf '@uuid()\n@boolean\n' | fmock --count 3 --json
//!
//! # Add custom generators from a YAML file
//! fmock --config generators.yaml '@color()'
//! ```

use anyhow::Context;
use clap::Parser;
use mock_core::{MockSchema, MockValue};
use mock_generator::{CustomRegistry, Resolver};
use std::path::PathBuf;

#[derive(Parser, Clone, Debug, Default)]
pub struct ResolverOpts {
    /// YAML file with custom generator definitions
    #[arg(long, value_name = "PATH", env = "FMOCK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of values to generate per directive
    #[arg(long, default_value = "1")]
    pub count: usize,

    /// Print every value as JSON
    #[arg(long)]
    pub json: bool,
}

impl ResolverOpts {
    /// Build a resolver, loading custom generators when a config file is set.
    pub fn build_resolver(&self) -> anyhow::Result<Resolver> {
        let Some(path) = &self.config else {
            return Ok(Resolver::new());
        };

        let schema = MockSchema::from_file(path)
            .with_context(|| format!("Failed to load generator config {}", path.display()))?;
        let custom = CustomRegistry::from_schema(&schema)
            .with_context(|| format!("Invalid generator config {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            generators = custom.len(),
            "Loaded custom generators"
        );

        Ok(Resolver::with_fallback(custom))
    }
}

/// Render a resolved value for output.
///
/// Text mode prints strings raw and nothing for an absent value; JSON mode
/// prints every value as JSON, with `null` for an absent one.
pub fn render(value: Option<&MockValue>, json: bool) -> anyhow::Result<Option<String>> {
    if json {
        let rendered = match value {
            Some(value) => serde_json::to_string(value).context("Failed to encode value")?,
            None => "null".to_string(),
        };
        return Ok(Some(rendered));
    }

    Ok(value.map(ToString::to_string))
}

/// Resolve every directive `count` times and collect the rendered lines.
pub fn resolve_all<I, S>(
    resolver: &Resolver,
    directives: I,
    opts: &ResolverOpts,
) -> anyhow::Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = Vec::new();
    for directive in directives {
        let directive = directive.as_ref();
        for _ in 0..opts.count {
            let value = resolver.mock(directive);
            if value.is_none() {
                tracing::warn!(directive, "Directive resolved to nothing");
            }
            if let Some(line) = render(value.as_ref(), opts.json)? {
                lines.push(line);
            }
        }
    }
    Ok(lines)
}
