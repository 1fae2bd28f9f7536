use roster_validate::{NameStrictness, ValidationOptions};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_RECORD_COUNT: usize = 50;

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Page size used at startup and restored by a reset.
    pub default_page_size: usize,
    /// Number of records generated at first run and on reset.
    pub record_count: usize,
    pub name_strictness: NameStrictness,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            record_count: DEFAULT_RECORD_COUNT,
            name_strictness: NameStrictness::default(),
        }
    }
}

impl EngineOptions {
    pub fn with_default_page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = page_size.max(1);
        self
    }

    pub fn with_record_count(mut self, count: usize) -> Self {
        self.record_count = count;
        self
    }

    pub fn with_name_strictness(mut self, strictness: NameStrictness) -> Self {
        self.name_strictness = strictness;
        self
    }

    pub(crate) fn validation(&self) -> ValidationOptions {
        ValidationOptions::default().with_name_strictness(self.name_strictness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EngineOptions::default();
        assert_eq!(options.default_page_size, 10);
        assert_eq!(options.record_count, 50);
        assert_eq!(options.name_strictness, NameStrictness::Lenient);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        assert_eq!(EngineOptions::default().with_default_page_size(0).default_page_size, 1);
    }
}
