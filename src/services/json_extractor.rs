/// Narrows sanitized text to the span from the first `{` to the last `}`.
///
/// This is a boundary heuristic, not a parser: braces inside string values
/// are not treated specially, so the result is only right when the reply
/// holds at most one JSON object. When no ordered brace pair exists the
/// input is returned unchanged and the parse step reports the failure.
pub fn extract(sanitized: &str) -> &str {
    match (sanitized.find('{'), sanitized.rfind('}')) {
        (Some(start), Some(end)) if end > start => &sanitized[start..=end],
        _ => sanitized,
    }
}
