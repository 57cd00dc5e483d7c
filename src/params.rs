/// Parse a path or query id the way the dashboard links produce them.
/// Anything that is not a plain integer counts as "no such row".
pub fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok()
}

/// Non-empty query value, `None` for a missing or blank parameter.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
