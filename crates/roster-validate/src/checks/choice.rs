//! Enumerated value membership.

pub fn check(label: &str, raw: &str, allowed: &[&str]) -> Option<String> {
    let trimmed = raw.trim();
    if allowed
        .iter()
        .any(|value| value.eq_ignore_ascii_case(trimmed))
    {
        return None;
    }
    Some(format!("{label} must be one of: {}", allowed.join(", ")))
}
