use crate::generator::IdGenerator;
use arena_core::FighterId;
use std::sync::atomic::{AtomicU64, Ordering};

/// A deterministic id generator using a sequential counter.
///
/// Produces ids like "ft000000", "ft000001". Ids are unique within a
/// single instance only, so it suits tests and single-process demos.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
    prefix: String,
}

impl SeqGenerator {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::with_offset(prefix, 0)
    }

    /// Creates a generator whose first id uses `offset` as its counter.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
            prefix: prefix.into(),
        }
    }
}

impl IdGenerator for SeqGenerator {
    fn generate(&self) -> FighterId {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        FighterId::new(format!("{}{:06}", self.prefix, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_sequential_ids() {
        let generator = SeqGenerator::with_prefix("ft");

        assert_eq!(generator.generate().as_str(), "ft000000");
        assert_eq!(generator.generate().as_str(), "ft000001");
        assert_eq!(generator.generate().as_str(), "ft000002");
    }

    #[test]
    fn with_offset() {
        let generator = SeqGenerator::with_offset("ft", 1000);

        assert_eq!(generator.generate().as_str(), "ft001000");
        assert_eq!(generator.generate().as_str(), "ft001001");
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SeqGenerator>();
    }
}
