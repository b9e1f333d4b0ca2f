//! LaTeX escaping and field formatting.
//!
//! Every function here is total: any input (including empty strings) maps to
//! a string, never an error. Escaping is a single pass and is deliberately
//! not idempotent — escaping already-escaped text double-escapes it, so each
//! output slot must be escaped exactly once.

/// Escape a string for literal inclusion in LaTeX body text.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\textbackslash{}"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '$' => out.push_str("\\$"),
            '&' => out.push_str("\\&"),
            '#' => out.push_str("\\#"),
            '%' => out.push_str("\\%"),
            '_' => out.push_str("\\_"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            other => out.push(other),
        }
    }
    out
}

/// Escape a URL for the target argument of `\href{}`.
///
/// The full escape table would corrupt valid URL syntax (underscores,
/// tildes in paths), so only the characters that break LaTeX parsing are
/// rewritten: `%` starts a comment, `#` is a parameter marker, `~` needs
/// the empty-group form.
pub fn escape_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for ch in url.chars() {
        match ch {
            '%' => out.push_str("\\%"),
            '#' => out.push_str("\\#"),
            '~' => out.push_str("\\~{}"),
            other => out.push(other),
        }
    }
    out
}

/// Trim, drop blank input, escape the rest.
pub fn format_bullet(bullet: &str) -> String {
    let trimmed = bullet.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        escape(trimmed)
    }
}

/// Drop empty or whitespace-only entries, preserving the order of the rest.
pub fn filter_blank_entries(entries: &[String]) -> Vec<&str> {
    entries
        .iter()
        .map(|s| s.as_str())
        .filter(|s| !s.trim().is_empty())
        .collect()
}

const DANGEROUS_COMMANDS: &[&str] = &[
    "\\input{",
    "\\include{",
    "\\write",
    "\\immediate",
    "\\openout",
    "\\closeout",
    "\\newwrite",
    "\\special{",
    "\\catcode",
];

/// Defense-in-depth predicate flagging raw LaTeX injection patterns
/// (file inclusion, write streams, catcode changes). This is a check, not a
/// transformation: the caller decides what to do with a flagged input.
pub fn is_safe_input(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    !DANGEROUS_COMMANDS.iter().any(|cmd| lower.contains(cmd))
}
