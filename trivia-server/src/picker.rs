//! Random question selection for quizzes
//!
//! The quiz handler asks a `QuestionPicker` for an index instead of
//! reaching for a global RNG, so tests can seed the choice.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses one index uniformly from `0..len`
pub trait QuestionPicker: Send + Sync {
    /// Returns `None` when `len` is zero.
    fn pick(&self, len: usize) -> Option<usize>;
}

/// Picker backed by the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl QuestionPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> Option<usize> {
        (len > 0).then(|| rand::thread_rng().gen_range(0..len))
    }
}

/// Deterministic picker for tests
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl QuestionPicker for SeededPicker {
    fn pick(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        Some(rng.gen_range(0..len))
    }
}
