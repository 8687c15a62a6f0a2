//! List limit coercion
//!
//! Callers hand the limit over as loosely typed JSON (often straight from a
//! query string). It is coerced to a positive integer. Anything that cannot
//! be coerced, including zero, is an `InvalidArgument`.

use crate::error::{AppError, Result};
use serde_json::Value;

/// Workshops returned when the caller gives no limit
pub const DEFAULT_LIST_LIMIT: u32 = 100;

/// Coerce an optional raw limit into a row cap
pub fn coerce_limit(raw: Option<&Value>) -> Result<u32> {
    let parsed = match raw {
        None | Some(Value::Null) => return Ok(DEFAULT_LIST_LIMIT),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Some(Value::String(s)) => parse_int_prefix(s),
        Some(_) => None,
    };

    match parsed {
        Some(value) if value > 0 => Ok(u32::try_from(value).unwrap_or(u32::MAX)),
        Some(value) => Err(AppError::InvalidArgument(format!(
            "limit must be a positive integer, got {}",
            value
        ))),
        None => Err(AppError::InvalidArgument(format!(
            "limit must be numeric, got {}",
            raw.map(Value::to_string).unwrap_or_default()
        ))),
    }
}

/// Integer-prefix parse: leading whitespace, optional sign, then digits.
/// Whatever follows the digits is ignored ("10abc" -> 10).
fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    // Saturate instead of failing on absurdly long digit runs
    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
