/// Convert snake_case to CamelCase.
///
/// Splits on `_` and uppercases the first character of every part. The rest
/// of each part is kept as written, so acronyms survive.
///
/// # Examples
/// ```
/// use sloggen_core::utils::to_camel_case;
/// assert_eq!(to_camel_case("request_id"), "RequestId");
/// assert_eq!(to_camel_case("http_URL"), "HttpURL");
/// assert_eq!(to_camel_case("UserId"), "UserId");  // idempotent
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for part in s.split('_') {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

/// Split a `key:value` flag value into its two parts.
///
/// Returns `None` unless the value contains exactly one `:`.
///
/// # Examples
/// ```
/// use sloggen_core::utils::split_pair;
/// assert_eq!(split_pair("trace:-8"), Some(("trace", "-8")));
/// assert_eq!(split_pair("badvalue"), None);
/// assert_eq!(split_pair("a:b:c"), None);
/// ```
pub fn split_pair(s: &str) -> Option<(&str, &str)> {
    let (key, value) = s.split_once(':')?;
    if value.contains(':') {
        return None;
    }
    Some((key, value))
}
