//! Boolean and pick-from-list generators.

use mock_core::{Arg, GeneratorArgs, MockValue};
use rand::{Rng, RngCore};

/// Fair coin: true when a uniform `[0, 1)` draw is at least 0.5.
pub fn boolean<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.random::<f64>() >= 0.5
}

/// Convert a directive argument into the value it stands for.
pub fn arg_to_value(arg: &Arg) -> MockValue {
    match arg {
        Arg::Number(n) => MockValue::Int(*n),
        Arg::Text(s) => MockValue::String(s.clone()),
    }
}

/// `@boolean()`
pub fn generate_boolean(_args: &GeneratorArgs, rng: &mut dyn RngCore) -> MockValue {
    MockValue::Bool(boolean(rng))
}

/// `@pick(a, b, ...)`
///
/// Returns one of the arguments verbatim, or null when there are none.
pub fn generate_pick(args: &GeneratorArgs, rng: &mut dyn RngCore) -> MockValue {
    let choices = args.args();
    if choices.is_empty() {
        return MockValue::Null;
    }
    let idx = rng.random_range(0..choices.len());
    arg_to_value(&choices[idx])
}
