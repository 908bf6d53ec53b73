//! Lexical checks on generated Go.
//!
//! The emitter builds text directly, so these checks stand in for the parse
//! a formatter would do: anything they accept renders to source that
//! `gofmt` parses unchanged.

use unicode_general_category::{GeneralCategory, get_general_category};

use super::error::SyntaxError;

const KEYWORDS: [&str; 25] = [
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Nesting limit for type expressions.
const MAX_TYPE_DEPTH: usize = 32;

pub fn is_keyword(s: &str) -> bool {
    KEYWORDS.contains(&s)
}

/// Go `letter`: a Unicode letter (category L) or `_`.
fn is_letter(c: char) -> bool {
    c == '_'
        || matches!(
            get_general_category(c),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
        )
}

/// Go `unicode_digit`: category Nd.
fn is_digit(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::DecimalNumber)
}

/// A Go identifier that is not a keyword.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    is_letter(first) && chars.all(|c| is_letter(c) || is_digit(c)) && !is_keyword(s)
}

pub fn check_package(name: &str) -> Result<(), SyntaxError> {
    if is_identifier(name) && name != "_" {
        return Ok(());
    }
    Err(SyntaxError::InvalidPackage(name.to_string()))
}

/// Import paths must be non-empty, graphic, and free of spaces and the
/// characters Go reserves.
pub fn check_import(path: &str) -> Result<(), SyntaxError> {
    const RESERVED: &str = "!\"#$%&'()*,:;<=>?[\\]^`{|}";
    let valid = !path.is_empty()
        && path.chars().all(|c| {
            !c.is_whitespace() && !c.is_control() && !RESERVED.contains(c) && c != '\u{FFFD}'
        });
    if valid {
        return Ok(());
    }
    Err(SyntaxError::InvalidImport(path.to_string()))
}

/// Accepts Go type expressions as written in a parameter list: named,
/// qualified and instantiated types, pointers, slices, arrays, maps,
/// channels, function signatures, and single-line `interface{...}` and
/// `struct{...}` bodies.
pub fn check_type(key: &str, typ: &str) -> Result<(), SyntaxError> {
    match parse_type(typ, 0) {
        Some("") => Ok(()),
        _ => Err(SyntaxError::InvalidType {
            key: key.to_string(),
            typ: typ.to_string(),
        }),
    }
}

// Each parser consumes a prefix of its input and returns the remainder, or
// `None` if the prefix is not the expected construct.

/// Parse one type expression.
fn parse_type(s: &str, depth: usize) -> Option<&str> {
    if depth > MAX_TYPE_DEPTH {
        return None;
    }
    let depth = depth + 1;

    if let Some(rest) = s.strip_prefix('*') {
        return parse_type(rest, depth);
    }
    if let Some(rest) = s.strip_prefix("[]") {
        return parse_type(rest, depth);
    }
    if let Some(rest) = s.strip_prefix("map[") {
        let rest = parse_type(rest, depth)?.strip_prefix(']')?;
        return parse_type(rest, depth);
    }
    if let Some(rest) = s.strip_prefix('[') {
        let rest = parse_array_len(rest)?.strip_prefix(']')?;
        return parse_type(rest, depth);
    }
    for prefix in ["<-chan ", "chan<- ", "chan "] {
        if let Some(rest) = s.strip_prefix(prefix) {
            return parse_type(rest, depth);
        }
    }
    if let Some(rest) = s.strip_prefix("func") {
        if rest.starts_with('(') {
            return parse_signature(rest, depth);
        }
    }
    if let Some(rest) = s.strip_prefix("interface{") {
        return parse_body(rest, depth, parse_interface_elem);
    }
    if let Some(rest) = s.strip_prefix("struct{") {
        return parse_body(rest, depth, parse_field);
    }

    let rest = parse_type_name(s)?;
    match rest.strip_prefix('[') {
        Some(args) => parse_type_args(args, depth),
        None => Some(rest),
    }
}

/// Array length: a decimal literal or a (qualified) constant name.
fn parse_array_len(s: &str) -> Option<&str> {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    if len > 0 {
        return Some(&s[len..]);
    }
    parse_type_name(s)
}

/// `Name` or `pkg.Name`.
fn parse_type_name(s: &str) -> Option<&str> {
    let rest = parse_identifier(s)?;
    match rest.strip_prefix('.') {
        Some(rest) => parse_identifier(rest),
        None => Some(rest),
    }
}

/// `A, B]` after the opening bracket of an instantiation.
fn parse_type_args(s: &str, depth: usize) -> Option<&str> {
    let mut rest = parse_type(s, depth)?;
    loop {
        if let Some(after) = rest.strip_prefix(']') {
            return Some(after);
        }
        let after = rest.strip_prefix(',')?;
        let after = after.strip_prefix(' ').unwrap_or(after);
        rest = parse_type(after, depth)?;
    }
}

/// `(params)` followed by an optional result type or `(results)`.
fn parse_signature(s: &str, depth: usize) -> Option<&str> {
    let rest = parse_params(s, depth)?;
    let Some(after) = rest.strip_prefix(' ') else {
        return Some(rest);
    };
    if after.starts_with('(') {
        return parse_params(after, depth);
    }
    Some(parse_type(after, depth).unwrap_or(rest))
}

/// A parenthesized parameter list, trailing comma allowed.
fn parse_params(s: &str, depth: usize) -> Option<&str> {
    let mut rest = skip_space(s.strip_prefix('(')?);
    loop {
        if let Some(after) = rest.strip_prefix(')') {
            return Some(after);
        }
        rest = skip_space(parse_param(rest, depth)?);
        if let Some(after) = rest.strip_prefix(')') {
            return Some(after);
        }
        rest = skip_space(rest.strip_prefix(',')?);
    }
}

/// `T`, `...T`, `name T` or `name ...T`.
fn parse_param(s: &str, depth: usize) -> Option<&str> {
    if let Some(after) = parse_identifier(s).and_then(|r| r.strip_prefix(' ')) {
        return parse_variadic(skip_space(after), depth);
    }
    parse_variadic(s, depth)
}

fn parse_variadic(s: &str, depth: usize) -> Option<&str> {
    parse_type(s.strip_prefix("...").unwrap_or(s), depth)
}

/// Elements separated by `;` up to the closing brace.
fn parse_body(
    s: &str,
    depth: usize,
    element: fn(&str, usize) -> Option<&str>,
) -> Option<&str> {
    let mut rest = skip_space(s);
    loop {
        if let Some(after) = rest.strip_prefix('}') {
            return Some(after);
        }
        rest = skip_space(element(rest, depth)?);
        if let Some(after) = rest.strip_prefix('}') {
            return Some(after);
        }
        rest = skip_space(rest.strip_prefix(';')?);
    }
}

/// A method `Name(params) result` or a type union `~A | B`.
fn parse_interface_elem(s: &str, depth: usize) -> Option<&str> {
    if let Some(after) = parse_identifier(s) {
        if after.starts_with('(') {
            return parse_signature(after, depth);
        }
    }
    let mut rest = parse_type(s.strip_prefix('~').unwrap_or(s), depth)?;
    while let Some(after) = skip_space(rest).strip_prefix('|') {
        let after = skip_space(after);
        rest = parse_type(after.strip_prefix('~').unwrap_or(after), depth)?;
    }
    Some(rest)
}

/// `A, B T` or an embedded type, then an optional tag.
fn parse_field(s: &str, depth: usize) -> Option<&str> {
    let rest = match parse_named_field(s, depth) {
        Some(rest) => rest,
        None => parse_type(s, depth)?,
    };
    parse_tag(rest)
}

fn parse_named_field(s: &str, depth: usize) -> Option<&str> {
    let mut rest = parse_identifier(s)?;
    while let Some(after) = rest.strip_prefix(',') {
        rest = parse_identifier(skip_space(after))?;
    }
    parse_type(skip_space(rest.strip_prefix(' ')?), depth)
}

/// Optional raw or interpreted string tag.
fn parse_tag(s: &str) -> Option<&str> {
    let trimmed = skip_space(s);
    if let Some(body) = trimmed.strip_prefix('`') {
        let end = body.find('`')?;
        return Some(&body[end + 1..]);
    }
    if let Some(body) = trimmed.strip_prefix('"') {
        let mut escaped = false;
        for (i, c) in body.char_indices() {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => return Some(&body[i + 1..]),
                '\n' => return None,
                _ => {}
            }
        }
        return None;
    }
    Some(s)
}

fn skip_space(s: &str) -> &str {
    s.trim_start_matches([' ', '\t'])
}

fn parse_identifier(s: &str) -> Option<&str> {
    let end = s
        .char_indices()
        .find(|&(_, c)| !(is_letter(c) || is_digit(c)))
        .map_or(s.len(), |(i, _)| i);
    let (ident, rest) = s.split_at(end);
    is_identifier(ident).then_some(rest)
}
