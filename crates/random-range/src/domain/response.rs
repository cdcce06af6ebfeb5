//! Parsing of the remote service's plain-text answer.

use random_core::error::RandomError;

use super::bounds::Bounds;

/// Reads a leading base-10 integer from `body`.
///
/// Leading whitespace and an optional sign are accepted, and anything after
/// the last digit is ignored. Returns `None` when no digits are present or
/// the value does not fit in an `i64`.
#[must_use]
pub fn parse_leading_integer(body: &str) -> Option<i64> {
    let trimmed = body.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digit_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digit_len == 0 {
        return None;
    }
    trimmed[..sign_len + digit_len].parse().ok()
}

/// Turns a response body into the item's random number.
///
/// # Errors
///
/// Returns `RandomError::InvalidApiResponse`, carrying the raw body, if it
/// holds no integer or the integer falls outside `bounds`.
pub fn resolve_response(body: &str, bounds: &Bounds) -> Result<i64, RandomError> {
    match parse_leading_integer(body) {
        Some(value) if bounds.contains(value) => Ok(value),
        _ => Err(RandomError::InvalidApiResponse {
            body: body.to_owned(),
        }),
    }
}
