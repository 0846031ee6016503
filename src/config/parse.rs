//! Lenient parsing of string-typed config inputs

/// Parse a base-10 integer prefix and keep it only if it is positive.
///
/// Leading whitespace and an optional sign are accepted, then the longest run
/// of ASCII digits; anything after the digits is ignored (`"250ms"` is 250).
/// Zero, negative values, inputs with no digits and values that overflow
/// `u64` all yield `None` so the caller falls through to the next source.
pub fn parse_positive_int(input: Option<&str>) -> Option<u64> {
    let raw = input?.trim_start();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let digits_end = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_end == 0 || negative {
        return None;
    }
    match rest[..digits_end].parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(value) => Some(value),
    }
}

/// Boolean-ish flag: `1`, `true` or `yes`, trimmed and case-insensitive.
pub fn parse_truthy(input: Option<&str>) -> bool {
    match input {
        Some(value) => matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"),
        None => false,
    }
}

/// Treat empty and whitespace-only strings as absent.
pub fn non_blank(input: Option<&str>) -> Option<&str> {
    input.filter(|value| !value.trim().is_empty())
}
