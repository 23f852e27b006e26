//! Deterministic random number generation for sample data.
//!
//! RULE: Seeding never calls a platform RNG.
//! All randomness flows through `SeedRng` instances derived from a single
//! master seed. Each record type draws from its own stream, seeded from
//! (master_seed XOR stream_index). This means:
//!   - Changing how many workouts are generated never changes the users.
//!   - The same seed always produces the same database contents.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for one record stream.
pub struct SeedRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl SeedRng {
    /// Create an RNG from the master seed and a stable stream index.
    /// The index must never change once assigned.
    pub fn new(master_seed: u64, stream_index: u64) -> Self {
        let derived_seed = master_seed ^ (stream_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.gen_range(0..n)
    }

    /// Roll an integer in [lo, hi], both inclusive.
    pub fn int_between(&mut self, lo: u32, hi: u32) -> u32 {
        self.inner.gen_range(lo..=hi)
    }

    /// Roll a float in [lo, hi] rounded to 2 decimals.
    pub fn uniform_2dp(&mut self, lo: f64, hi: f64) -> f64 {
        let v = lo + (hi - lo) * self.next_f64();
        crate::records::round2(v)
    }

    /// Pick one element uniformly. `items` must be non-empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let idx = self.next_u64_below(items.len() as u64) as usize;
        &items[idx]
    }
}

/// All stream RNGs for one seeding run.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_stream(&self, stream: SeedStream) -> SeedRng {
        SeedRng::new(self.master_seed, stream as u64).with_name(stream.name())
    }
}

/// Stable stream assignments.
/// NEVER reorder or remove entries, only append.
/// Reordering changes every stream's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum SeedStream {
    Users = 0,
    Workouts = 1,
    Nutrition = 2,
    Sleep = 3,
    HealthMetrics = 4,
}

impl SeedStream {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Workouts => "workouts",
            Self::Nutrition => "nutrition",
            Self::Sleep => "sleep",
            Self::HealthMetrics => "health_metrics",
        }
    }
}
