//! Built-in value generators.
//!
//! Every generator takes the directive arguments and an RNG and always
//! produces a value. Bad options fall back to defaults or get clamped;
//! nothing here returns an error.
//!
//! | Opcode     | Options (name / position)              |
//! |------------|----------------------------------------|
//! | `integer`  | `min` 0, `max` 1                        |
//! | `float`    | `min` 0, `max` 1, `decimals` 2          |
//! | `char`     |                                        |
//! | `string`   | `min` 0, `max` 1, `len` 2               |
//! | `boolean`  |                                        |
//! | `date`     | `format` 0                              |
//! | `time`     | `format` 0                              |
//! | `datetime` | `format` 0                              |
//! | `uuid`     |                                        |
//! | `pick`     | any number of choices                   |

pub mod choice;
pub mod numeric;
pub mod text;
pub mod timestamp;
pub mod uuid;

use mock_core::{GeneratorArgs, GeneratorConfig, MockValue};
use rand::{Rng, RngCore};

/// Signature shared by all built-in generators.
pub type GeneratorFn = fn(&GeneratorArgs, &mut dyn RngCore) -> MockValue;

/// The built-in generator set, keyed by opcode.
pub const BUILTIN_GENERATORS: &[(&str, GeneratorFn)] = &[
    ("integer", numeric::generate_integer),
    ("float", numeric::generate_float),
    ("char", text::generate_char),
    ("string", text::generate_string),
    ("boolean", choice::generate_boolean),
    ("date", timestamp::generate_date),
    ("time", timestamp::generate_time),
    ("datetime", timestamp::generate_datetime),
    ("uuid", uuid::generate_uuid),
    ("pick", choice::generate_pick),
];

/// Find a built-in generator by opcode.
pub fn builtin(name: &str) -> Option<GeneratorFn> {
    BUILTIN_GENERATORS
        .iter()
        .find(|(opcode, _)| *opcode == name)
        .map(|(_, generator)| *generator)
}

/// Generate a value from a declarative generator configuration.
pub fn generate_configured<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> MockValue {
    match config {
        GeneratorConfig::UuidV4 => MockValue::String(uuid::uuid_v4(rng).to_string()),

        GeneratorConfig::IntRange { min, max } => {
            MockValue::Int(numeric::integer(rng, Some(*min), Some(*max)))
        }

        GeneratorConfig::FloatRange { min, max } => {
            let min = if min.is_finite() { *min } else { 0.0 };
            let max = if max.is_finite() { *max } else { 1.0 };
            MockValue::Float(numeric::float(rng, min, max, None))
        }

        GeneratorConfig::WeightedBool { true_weight } => {
            let weight = if true_weight.is_nan() {
                0.5
            } else {
                true_weight.clamp(0.0, 1.0)
            };
            MockValue::Bool(rng.random_bool(weight))
        }

        GeneratorConfig::OneOf { values } => {
            if values.is_empty() {
                MockValue::Null
            } else {
                let idx = rng.random_range(0..values.len());
                MockValue::from_yaml(&values[idx])
            }
        }

        GeneratorConfig::Static { value } => MockValue::from_yaml(value),

        GeneratorConfig::Null => MockValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_builtin_lookup() {
        assert!(builtin("string").is_some());
        assert!(builtin("integer").is_some());
        assert!(builtin("String").is_none());
        assert!(builtin("random_date").is_none());
    }

    #[test]
    fn test_builtin_names_are_unique() {
        let mut names: Vec<&str> = BUILTIN_GENERATORS.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BUILTIN_GENERATORS.len());
    }

    #[test]
    fn test_configured_int_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = GeneratorConfig::IntRange { min: 18, max: 80 };

        for _ in 0..100 {
            let value = generate_configured(&config, &mut rng).as_i64().unwrap();
            assert!((18..=80).contains(&value));
        }
    }

    #[test]
    fn test_configured_float_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = GeneratorConfig::FloatRange { min: 2.5, max: 7.5 };

        for _ in 0..100 {
            let value = generate_configured(&config, &mut rng).as_f64().unwrap();
            assert!((2.5..=7.5).contains(&value));
        }
    }

    #[test]
    fn test_configured_float_range_non_finite_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let configs = [
            GeneratorConfig::FloatRange { min: f64::NAN, max: f64::NAN },
            GeneratorConfig::FloatRange { min: f64::NEG_INFINITY, max: f64::INFINITY },
            GeneratorConfig::FloatRange { min: f64::INFINITY, max: f64::NAN },
        ];

        for config in &configs {
            for _ in 0..100 {
                let value = generate_configured(config, &mut rng).as_f64().unwrap();
                assert!((0.0..=1.0).contains(&value), "{config:?} gave {value}");
            }
        }

        let half_open = GeneratorConfig::FloatRange { min: 0.25, max: f64::NAN };
        let value = generate_configured(&half_open, &mut rng).as_f64().unwrap();
        assert!((0.25..=1.0).contains(&value));
    }

    #[test]
    fn test_configured_weighted_bool_out_of_range_weight() {
        let mut rng = StdRng::seed_from_u64(42);

        let always = GeneratorConfig::WeightedBool { true_weight: 7.0 };
        let never = GeneratorConfig::WeightedBool { true_weight: -1.0 };
        for _ in 0..100 {
            assert_eq!(generate_configured(&always, &mut rng), MockValue::Bool(true));
            assert_eq!(generate_configured(&never, &mut rng), MockValue::Bool(false));
        }
    }

    #[test]
    fn test_configured_one_of() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = GeneratorConfig::OneOf {
            values: vec![
                serde_yaml::Value::String("red".to_string()),
                serde_yaml::Value::String("blue".to_string()),
            ],
        };

        for _ in 0..100 {
            let value = generate_configured(&config, &mut rng);
            let s = value.as_str().unwrap();
            assert!(s == "red" || s == "blue");
        }

        let empty = GeneratorConfig::OneOf { values: vec![] };
        assert!(generate_configured(&empty, &mut rng).is_null());
    }

    #[test]
    fn test_configured_static_and_null() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = GeneratorConfig::Static {
            value: serde_yaml::from_str("42").unwrap(),
        };

        assert_eq!(generate_configured(&config, &mut rng), MockValue::Int(42));
        assert!(generate_configured(&GeneratorConfig::Null, &mut rng).is_null());
    }
}
