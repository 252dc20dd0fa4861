//! Character and string generators.

use super::numeric::integer;
use mock_core::{GeneratorArgs, MockValue, STRING_MAX_LEN, STRING_MIN_LEN};
use rand::{Rng, RngCore};

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Draw one alphanumeric character.
pub fn random_char<R: Rng + ?Sized>(rng: &mut R) -> char {
    let idx = integer(rng, Some(0), Some(ALPHABET.len() as i64 - 1));
    char::from(ALPHABET[idx as usize])
}

/// Work out how long a generated string should be.
///
/// A valid `len` inside the global bounds wins outright. Otherwise `min` and
/// `max` are pulled back inside `[STRING_MIN_LEN, STRING_MAX_LEN]` (a missing,
/// zero or out-of-range bound becomes the global one) and the length is drawn
/// between them.
pub fn string_length<R: Rng + ?Sized>(
    rng: &mut R,
    min: Option<i64>,
    max: Option<i64>,
    len: Option<i64>,
) -> usize {
    let bounds = STRING_MIN_LEN..=STRING_MAX_LEN;
    if let Some(len) = len.filter(|len| bounds.contains(len)) {
        return len as usize;
    }

    let max = match max {
        Some(max) if max != 0 && max <= STRING_MAX_LEN => max.max(STRING_MIN_LEN),
        _ => STRING_MAX_LEN,
    };
    let min = match min {
        Some(min) if min != 0 && min >= STRING_MIN_LEN => min.min(STRING_MAX_LEN),
        _ => STRING_MIN_LEN,
    };

    integer(rng, Some(min), Some(max)) as usize
}

/// Build a random alphanumeric string of the given length.
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| random_char(rng)).collect()
}

/// `@char()`
pub fn generate_char(_args: &GeneratorArgs, rng: &mut dyn RngCore) -> MockValue {
    MockValue::String(random_char(rng).to_string())
}

/// `@string(min, max, len)`
pub fn generate_string(args: &GeneratorArgs, rng: &mut dyn RngCore) -> MockValue {
    let len = string_length(
        rng,
        args.option_int("min", 0),
        args.option_int("max", 1),
        args.option_int("len", 2),
    );
    MockValue::String(random_string(rng, len))
}
