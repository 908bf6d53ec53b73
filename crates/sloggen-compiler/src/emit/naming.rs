//! Go names and literals derived from model entries.

use sloggen_core::utils::to_camel_case;

/// `slog` constructors with a dedicated typed signature.
const TYPED_CONSTRUCTORS: [&str; 8] = [
    "String", "Int64", "Int", "Uint64", "Float64", "Bool", "Time", "Duration",
];

/// Name of the `slog` function that builds an attribute of type `typ`.
///
/// The `time.` qualifier is dropped and the name compared ignoring case;
/// anything without a typed constructor goes through `slog.Any`.
pub fn slog_constructor(typ: &str) -> &'static str {
    let name = typ.strip_prefix("time.").unwrap_or(typ);
    TYPED_CONSTRUCTORS
        .iter()
        .find(|ctor| ctor.eq_ignore_ascii_case(name))
        .copied()
        .unwrap_or("Any")
}

/// `LevelTrace` for `trace`.
pub fn level_const(name: &str) -> String {
    format!("Level{}", to_camel_case(name))
}

/// Upper-case `s` the way Go's `strings.ToUpper` does.
///
/// Go applies the simple one-to-one mapping per character, so characters
/// whose full mapping expands (`ß` → `SS`) stay as they are. The Greek
/// letters with ypogegrammeni are the exception: their simple uppercase is
/// the titlecase form.
pub fn go_to_upper(s: &str) -> String {
    s.chars().map(simple_upper).collect()
}

fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    if let (Some(first), None) = (upper.next(), upper.next()) {
        return first;
    }
    let shifted = match c {
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            u32::from(c) + 8
        }
        '\u{1FB3}' | '\u{1FC3}' | '\u{1FF3}' => u32::from(c) + 9,
        _ => return c,
    };
    char::from_u32(shifted).unwrap_or(c)
}

/// Quote `s` as a Go interpreted string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
