//! Person name checks.

use std::sync::LazyLock;

use regex::Regex;

use crate::NameStrictness;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;

/// Letters in any script plus the separators found in real names.
static NAME_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}\p{M}][\p{L}\p{M}\s'.\-]*$").expect("Invalid name regex")
});

pub fn check(label: &str, raw: &str, strictness: NameStrictness) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(format!("{label} is required"));
    }

    let chars = trimmed.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
        return Some(format!(
            "{label} must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters"
        ));
    }

    if !NAME_CHARS.is_match(trimmed) {
        return Some(format!(
            "{label} may only contain letters, spaces, apostrophes, hyphens and periods"
        ));
    }

    if strictness == NameStrictness::FullName && trimmed.split_whitespace().count() < 2 {
        return Some(format!("{label} must include a first and last name"));
    }

    None
}
