//! Email and phone number checks.

use std::sync::LazyLock;

use regex::Regex;

pub const PHONE_MIN_DIGITS: usize = 10;
pub const PHONE_MAX_DIGITS: usize = 15;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .expect("Invalid email regex")
});

static PHONE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9 ().\-]+$").expect("Invalid phone regex"));

pub fn check_email(label: &str, raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(format!("{label} is required"));
    }
    if !EMAIL.is_match(trimmed) {
        return Some(format!("{label} must look like name@domain.tld"));
    }
    None
}

pub fn check_phone(label: &str, raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(format!("{label} is required"));
    }
    if !PHONE_CHARS.is_match(trimmed) {
        return Some(format!(
            "{label} may only contain digits, spaces, dashes, dots and parentheses"
        ));
    }
    let digits = trimmed.chars().filter(char::is_ascii_digit).count();
    if !(PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits) {
        return Some(format!(
            "{label} must have between {PHONE_MIN_DIGITS} and {PHONE_MAX_DIGITS} digits"
        ));
    }
    None
}
