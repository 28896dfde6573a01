/// Parses an integer with automatic base detection.
///
/// Accepts an optional leading `+` or `-`, then an optional base prefix:
/// `0b`/`0B` for binary, `0o`/`0O` for octal, `0x`/`0X` for hexadecimal.
/// Anything else is parsed as decimal. The digits after the prefix must be
/// non-empty and valid for the detected base, and the result must fit in an
/// `i64`.
///
/// Integer literals produced by the lexer keep their base prefix, so this is
/// the single place where literal text becomes a value. The `int` builtin
/// funnels through here as well.
///
/// # Parameters
/// - `text`: The literal text, e.g. `"42"`, `"0x1F"`, `"-0b101"`.
///
/// # Returns
/// - `Some(i64)`: The parsed value.
/// - `None`: If the text is empty, has digits invalid for its base, or does
///   not fit in an `i64`.
///
/// # Example
/// ```
/// use quill::util::num::parse_integer;
///
/// assert_eq!(parse_integer("42"), Some(42));
/// assert_eq!(parse_integer("0x1F"), Some(31));
/// assert_eq!(parse_integer("-0b101"), Some(-5));
/// assert_eq!(parse_integer("0b"), None);
/// assert_eq!(parse_integer("abc"), None);
/// ```
#[must_use]
pub fn parse_integer(text: &str) -> Option<i64> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let (base, digits) = detect_base(unsigned);
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    // The sign travels with the digits so that `i64::MIN`, whose magnitude
    // does not fit in an `i64`, still parses.
    if negative {
        i64::from_str_radix(&format!("-{digits}"), base).ok()
    } else {
        i64::from_str_radix(digits, base).ok()
    }
}

/// Splits a literal into its base and digit portion.
fn detect_base(text: &str) -> (u32, &str) {
    if let Some(digits) = strip_base_prefix(text, 'b') {
        (2, digits)
    } else if let Some(digits) = strip_base_prefix(text, 'o') {
        (8, digits)
    } else if let Some(digits) = strip_base_prefix(text, 'x') {
        (16, digits)
    } else {
        (10, text)
    }
}

fn strip_base_prefix(text: &str, marker: char) -> Option<&str> {
    let rest = text.strip_prefix('0')?;
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.eq_ignore_ascii_case(&marker) => Some(chars.as_str()),
        _ => None,
    }
}
