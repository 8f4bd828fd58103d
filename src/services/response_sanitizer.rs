use once_cell::sync::Lazy;
use regex::Regex;

// A run of three or more backticks. A glued `json` tag goes with it, as does
// any other tag that ends the line (```python). Other glued words are content.
static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)```+(?:json\b|[A-Za-z0-9_+\-]*[ \t]*\r?$)?")
        .expect("CODE_FENCE is a valid regex pattern")
});

// The service sometimes over-escapes math-like text: \( x \) or \\( x \\).
static ESCAPED_PAREN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\+([()])").expect("ESCAPED_PAREN is a valid regex pattern")
});

/// Strips known noise from a raw service reply.
///
/// Steps run in a fixed order: fences, escaped parentheses, line endings,
/// surrounding whitespace. The output contains no fence token, no backslash
/// directly before a parenthesis and no carriage return, so running it again
/// changes nothing.
pub fn sanitize(raw: &str) -> String {
    let without_fences = CODE_FENCE.replace_all(raw, "");
    let unescaped = ESCAPED_PAREN.replace_all(&without_fences, "$1");
    let normalized = unescaped.replace("\r\n", "\n").replace('\r', "\n");

    normalized.trim().to_string()
}
