use crate::normalize_array_brackets;

const ARRAY_MARKER: &str = "[]";

/// Whether a type token names a user-defined type.
///
/// Primitive keywords are all lowercase; package types are capitalized.
/// Bracket contents are erased before the check.
pub fn is_user_defined(type_token: &str) -> bool {
    normalize_array_brackets(type_token)
        .chars()
        .any(char::is_uppercase)
}

/// Turn a classified type token into its descriptor.
///
/// `pkg.Type` → `"pkg.Type"`, `Type[]` → `"Type"[]`; primitives such as
/// `float64[]` pass through unchanged.
pub fn annotate_type(type_token: &str) -> String {
    let token = normalize_array_brackets(type_token);
    if !is_user_defined(&token) {
        return token.into_owned();
    }
    match token.strip_suffix(ARRAY_MARKER) {
        Some(base) => format!("\"{base}\"{ARRAY_MARKER}"),
        None => format!("\"{token}\""),
    }
}
