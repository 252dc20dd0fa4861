//! Date and time generators.
//!
//! Patterns use dayjs-style tokens (`YYYY-MM-DD`, `HH:mm:ss`, ...). They are
//! translated to chrono strftime items before formatting. Text inside
//! `[...]` is emitted literally, as is any character that is not a token.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone, Utc};
use mock_core::{
    GeneratorArgs, MockValue, DATETIME_DEFAULT_FORMAT, DATE_DEFAULT_FORMAT, TIME_DEFAULT_FORMAT,
};
use rand::{Rng, RngCore};
use std::fmt::{self, Write};

/// Pattern tokens and their strftime equivalents, longest first.
const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("MMMM", "%B"),
    ("dddd", "%A"),
    ("MMM", "%b"),
    ("ddd", "%a"),
    ("SSS", "%3f"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("HH", "%H"),
    ("hh", "%I"),
    ("mm", "%M"),
    ("ss", "%S"),
    ("ZZ", "%z"),
    ("M", "%-m"),
    ("D", "%-d"),
    ("d", "%w"),
    ("H", "%-H"),
    ("h", "%-I"),
    ("m", "%-M"),
    ("s", "%-S"),
    ("A", "%p"),
    ("a", "%P"),
    ("Z", "%:z"),
];

/// Draw a timestamp uniformly between the Unix epoch and `now`.
pub fn random_date_before<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
    let span = now.timestamp_millis().max(0) as f64;
    let millis = (rng.random::<f64>() * span) as i64;
    DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH)
}

/// Draw a timestamp uniformly between the Unix epoch and the current time.
pub fn random_date<R: Rng + ?Sized>(rng: &mut R) -> DateTime<Utc> {
    random_date_before(rng, Utc::now())
}

/// Translate a dayjs-style pattern into a strftime string.
pub fn translate_pattern(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;

    while let Some(c) = rest.chars().next() {
        if c == '[' {
            if let Some(end) = rest.find(']') {
                push_literal(&mut out, &rest[1..end]);
                rest = &rest[end + 1..];
                continue;
            }
        }

        if let Some((token, spec)) = TOKENS.iter().find(|(token, _)| rest.starts_with(token)) {
            out.push_str(spec);
            rest = &rest[token.len()..];
            continue;
        }

        push_literal(&mut out, &rest[..c.len_utf8()]);
        rest = &rest[c.len_utf8()..];
    }

    out
}

fn push_literal(out: &mut String, text: &str) {
    for c in text.chars() {
        if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
    }
}

/// Render a timestamp with a dayjs-style pattern.
///
/// Never fails: a pattern chrono cannot render comes back verbatim.
pub fn format_date<Tz>(date: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let strftime = translate_pattern(pattern);
    let items: Vec<Item<'_>> = StrftimeItems::new(&strftime).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        tracing::warn!(pattern, "Unrenderable date pattern");
        return pattern.to_string();
    }

    let mut out = String::new();
    if write!(out, "{}", date.format_with_items(items.iter())).is_err() {
        tracing::warn!(pattern, "Failed to format date");
        return pattern.to_string();
    }
    out
}

fn generate_formatted(args: &GeneratorArgs, rng: &mut dyn RngCore, default: &str) -> MockValue {
    let pattern = args
        .option_string("format", 0)
        .unwrap_or_else(|| default.to_string());
    let date = random_date(rng).with_timezone(&Local);
    MockValue::String(format_date(&date, &pattern))
}

/// `@date(format)`
pub fn generate_date(args: &GeneratorArgs, rng: &mut dyn RngCore) -> MockValue {
    generate_formatted(args, rng, DATE_DEFAULT_FORMAT)
}

/// `@time(format)`
pub fn generate_time(args: &GeneratorArgs, rng: &mut dyn RngCore) -> MockValue {
    generate_formatted(args, rng, TIME_DEFAULT_FORMAT)
}

/// `@datetime(format)`
pub fn generate_datetime(args: &GeneratorArgs, rng: &mut dyn RngCore) -> MockValue {
    generate_formatted(args, rng, DATETIME_DEFAULT_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use mock_core::Arg;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 7, 15, 4, 5).unwrap()
    }

    #[test]
    fn test_translate_pattern() {
        assert_eq!(translate_pattern("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(translate_pattern("HH:mm:ss"), "%H:%M:%S");
        assert_eq!(translate_pattern("[YYYY] YYYY"), "YYYY %Y");
        assert_eq!(translate_pattern("100%"), "100%%");
        assert_eq!(translate_pattern("[x"), "[x");
    }

    #[test]
    fn test_format_date_tokens() {
        let date = fixed_date();

        assert_eq!(format_date(&date, "YYYY-MM-DD"), "2024-03-07");
        assert_eq!(format_date(&date, "HH:mm:ss"), "15:04:05");
        assert_eq!(format_date(&date, "YY/M/D"), "24/3/7");
        assert_eq!(format_date(&date, "h:mm A"), "3:04 PM");
        assert_eq!(format_date(&date, "dddd, MMMM D"), "Thursday, March 7");
        assert_eq!(format_date(&date, "[at] HH[h]"), "at 15h");
        assert_eq!(format_date(&date, "Z"), "+00:00");
    }

    #[test]
    fn test_random_date_before_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let now = fixed_date();

        for _ in 0..1000 {
            let date = random_date_before(&mut rng, now);
            assert!(date >= DateTime::UNIX_EPOCH);
            assert!(date <= now);
        }
    }

    #[test]
    fn test_random_date_before_epoch_is_epoch() {
        let mut rng = StdRng::seed_from_u64(42);
        let now = DateTime::UNIX_EPOCH;
        assert_eq!(random_date_before(&mut rng, now), DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_generate_date_default_format() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_date(&GeneratorArgs::default(), &mut rng);

        let s = value.as_str().unwrap();
        assert!(NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok(), "got {s}");
    }

    #[test]
    fn test_generate_time_default_format() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_time(&GeneratorArgs::default(), &mut rng);

        let s = value.as_str().unwrap();
        assert!(NaiveTime::parse_from_str(s, "%H:%M:%S").is_ok(), "got {s}");
    }

    #[test]
    fn test_generate_datetime_default_format() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_datetime(&GeneratorArgs::default(), &mut rng);

        let s = value.as_str().unwrap();
        assert!(
            NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").is_ok(),
            "got {s}"
        );
    }

    #[test]
    fn test_generate_date_custom_format() {
        let mut rng = StdRng::seed_from_u64(42);
        let args = GeneratorArgs::new(vec![Arg::text("format=DD/MM/YYYY")]);
        let value = generate_date(&args, &mut rng);

        let s = value.as_str().unwrap();
        assert!(NaiveDate::parse_from_str(s, "%d/%m/%Y").is_ok(), "got {s}");
    }
}
