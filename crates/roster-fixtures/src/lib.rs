//! Synthetic student records.
//!
//! [`RandomRoster`] produces internally consistent fixture data: unique ids,
//! well-formed emails and phone numbers, and category/status values drawn
//! from the model's fixed sets. Seeded generators are deterministic, which
//! the tests rely on.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use roster_model::{Major, Record, RecordGenerator, RecordId, Status};

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Amara", "Bea", "Carlos", "Chen", "Dana", "Elif", "Farah", "Grace", "Hiro",
    "Ines", "Jonas", "Kofi", "Lena", "Mateo", "Nadia", "Omar", "Priya", "Quinn", "Rosa", "Sven",
    "Tariq", "Uma", "Viktor", "Wen", "Yara", "Zane",
];

const LAST_NAMES: &[&str] = &[
    "Abara", "Becker", "Castillo", "Dubois", "Eriksen", "Fischer", "Garcia", "Hughes", "Ivanova",
    "Jensen", "Kowalski", "Larsen", "Moreau", "Nakamura", "Okafor", "Patel", "Quispe", "Rossi",
    "Silva", "Tanaka", "Ueda", "Varga", "Walsh", "Yilmaz", "Zhang",
];

const EMAIL_DOMAINS: &[&str] = &["example.edu", "students.example.org", "campus.example.com"];

/// Status distribution: mostly active students.
const STATUS_WEIGHTS: [(Status, u32); 4] = [
    (Status::Active, 60),
    (Status::Inactive, 15),
    (Status::Graduated, 20),
    (Status::Suspended, 5),
];

/// Random record factory. Identifiers keep increasing across calls so two
/// batches from the same generator never collide.
#[derive(Debug, Clone)]
pub struct RandomRoster {
    rng: StdRng,
    next_id: u32,
}

impl RandomRoster {
    /// Generator seeded from the operating system.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Deterministic generator.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self { rng, next_id: 1 }
    }

    /// Start numbering at `first_id` instead of 1.
    pub fn starting_at(mut self, first_id: u32) -> Self {
        self.next_id = first_id.max(1);
        self
    }

    fn record(&mut self) -> Record {
        let id = RecordId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);

        let first = pick(&mut self.rng, FIRST_NAMES);
        let last = pick(&mut self.rng, LAST_NAMES);
        let domain = pick(&mut self.rng, EMAIL_DOMAINS);

        Record {
            id,
            name: format!("{first} {last}"),
            email: format!(
                "{}.{}{}@{domain}",
                first.to_ascii_lowercase(),
                last.to_ascii_lowercase(),
                id.get()
            ),
            phone: self.phone(),
            age: self.rng.random_range(17..=35),
            grade: self.rng.random_range(40..=100),
            major: *Major::ALL.choose(&mut self.rng).unwrap_or(&Major::Mathematics),
            status: self.status(),
        }
    }

    fn phone(&mut self) -> String {
        let area = self.rng.random_range(200..=999);
        let exchange = self.rng.random_range(200..=999);
        let line = self.rng.random_range(0..=9999);
        format!("({area}) {exchange}-{line:04}")
    }

    fn status(&mut self) -> Status {
        let total: u32 = STATUS_WEIGHTS.iter().map(|(_, weight)| weight).sum();
        let mut roll = self.rng.random_range(0..total);
        for (status, weight) in STATUS_WEIGHTS {
            if roll < weight {
                return status;
            }
            roll -= weight;
        }
        Status::Active
    }
}

impl Default for RandomRoster {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordGenerator for RandomRoster {
    fn generate(&mut self, count: usize) -> Vec<Record> {
        (0..count).map(|_| self.record()).collect()
    }
}

fn pick(rng: &mut StdRng, values: &[&'static str]) -> &'static str {
    values.choose(rng).copied().unwrap_or_default()
}
