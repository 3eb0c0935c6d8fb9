use serde_json::Value;

/// Returns `true` if `candidate` is a string with non-whitespace content.
///
/// Non-string values (numbers, nulls, arrays, ...) are never valid names.
/// The store does not call this itself; callers check names before handing
/// them to a mutating operation.
#[must_use]
pub fn is_valid_name(candidate: &Value) -> bool {
    candidate.as_str().is_some_and(is_valid_name_str)
}

/// Returns `true` if `candidate` is non-empty once surrounding whitespace is
/// trimmed.
#[must_use]
pub fn is_valid_name_str(candidate: &str) -> bool {
    !candidate.trim().is_empty()
}
