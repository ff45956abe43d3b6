//! Pure validation of user input before any request reaches the wire

/// Returns true iff the lowercase-folded `code` appears in `candidates`.
///
/// `candidates` itself is not normalized; callers supply it in lowercase
/// (e.g. `"namsuq"`).
pub fn validate_type(candidates: &str, code: char) -> bool {
    candidates.contains(code.to_ascii_lowercase())
}

/// Returns true iff `raw` is a plain decimal number within `min..=max`.
///
/// Anything that is not purely ASCII digits is rejected: empty strings,
/// whitespace, `+`/`-` signs, decimal points. Callers cap the input length
/// before validation; a digit string too long for `u32` fails the parse and
/// is rejected rather than wrapping.
pub fn validate_length(raw: &str, min: u32, max: u32) -> bool {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match raw.parse::<u32>() {
        Ok(value) => value >= min && value <= max,
        Err(_) => false,
    }
}

/// Case-insensitive test that `code` is not the quit sentinel. The session
/// loop keeps requesting while this holds.
pub fn should_continue(code: char, sentinel: char) -> bool {
    code.to_ascii_lowercase() != sentinel.to_ascii_lowercase()
}
