//! Numeric value generators.

use mock_core::{GeneratorArgs, MockValue, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
use rand::{Rng, RngCore};

const FLOAT_DEFAULT_DECIMALS: i64 = 2;
const FLOAT_MAX_DECIMALS: i64 = 10;

/// Draw an integer with `round(random() * (max - min) + min)`.
///
/// Missing bounds default to the safe-integer range. Rounding is half-up,
/// so the end points get half the weight of interior values. The result is
/// clamped to the bounds to absorb floating point error on huge ranges.
pub fn integer<R: Rng + ?Sized>(rng: &mut R, min: Option<i64>, max: Option<i64>) -> i64 {
    let min = min.unwrap_or(MIN_SAFE_INTEGER);
    let max = max.unwrap_or(MAX_SAFE_INTEGER);

    let draw = rng.random::<f64>() * (max as f64 - min as f64) + min as f64;
    let value = round_half_up(draw) as i64;

    value.clamp(min.min(max), min.max(max))
}

/// Draw a float in `[min, max]`, optionally rounded to `decimals` places.
pub fn float<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64, decimals: Option<u32>) -> f64 {
    let draw = rng.random::<f64>() * (max - min) + min;
    let value = match decimals {
        Some(decimals) => {
            let scale = 10f64.powi(decimals as i32);
            (draw * scale).round() / scale
        }
        None => draw,
    };

    value.clamp(min.min(max), min.max(max))
}

/// Round half towards positive infinity, like `Math.round`.
///
/// Compares the fraction instead of flooring `value + 0.5`, which rounds
/// `0.49999999999999994` up.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Parse a float bound, ignoring anything that is not a finite number.
fn parse_float(args: &GeneratorArgs, name: &str, position: usize) -> Option<f64> {
    args.option_string(name, position)?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// `@integer(min, max)`
pub fn generate_integer(args: &GeneratorArgs, rng: &mut dyn RngCore) -> MockValue {
    let min = args.option_int("min", 0);
    let max = args.option_int("max", 1);
    MockValue::Int(integer(rng, min, max))
}

/// `@float(min, max, decimals)`
pub fn generate_float(args: &GeneratorArgs, rng: &mut dyn RngCore) -> MockValue {
    let min = parse_float(args, "min", 0).unwrap_or(0.0);
    let max = parse_float(args, "max", 1).unwrap_or(1.0);
    let decimals = args
        .option_int("decimals", 2)
        .unwrap_or(FLOAT_DEFAULT_DECIMALS)
        .clamp(0, FLOAT_MAX_DECIMALS);

    MockValue::Float(float(rng, min, max, Some(decimals as u32)))
}
