//! Bounded integer checks.

pub fn check(label: &str, raw: &str, min: i64, max: i64) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(format!("{label} is required"));
    }

    // Unparsable input is rejected outright, never defaulted.
    let Ok(value) = trimmed.parse::<i64>() else {
        return Some(format!("{label} must be a whole number"));
    };

    if value < min || value > max {
        return Some(format!("{label} must be between {min} and {max}"));
    }

    None
}
