//! Typst escaping. User text is always spliced into the generated source as
//! string literals inside code mode, so the escape set is the string-literal
//! one: backslash and double quote. Same contract as the LaTeX escaper —
//! total, single pass, not idempotent.

/// Escape text for a Typst string literal (the content between `"` quotes).
pub fn escape_str(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            other => out.push(other),
        }
    }
    out
}

/// Quote a value as a Typst string literal.
pub fn str_literal(text: &str) -> String {
    format!("\"{}\"", escape_str(text))
}

/// Render a list of strings as a Typst array literal. The trailing comma
/// keeps one-element arrays from collapsing into a parenthesized scalar.
pub fn str_array(items: &[&str]) -> String {
    if items.is_empty() {
        return "()".to_string();
    }
    let inner = items
        .iter()
        .map(|i| str_literal(i))
        .collect::<Vec<_>>()
        .join(", ");
    format!("({inner},)")
}
