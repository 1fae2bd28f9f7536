use crate::Record;

/// Source of fresh records, used at first run and on reset.
///
/// Implementations must hand out unique identifiers and values that pass
/// field validation.
pub trait RecordGenerator {
    fn generate(&mut self, count: usize) -> Vec<Record>;
}

impl<F> RecordGenerator for F
where
    F: FnMut(usize) -> Vec<Record>,
{
    fn generate(&mut self, count: usize) -> Vec<Record> {
        self(count)
    }
}
