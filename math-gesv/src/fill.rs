//! Filling the system with values
//!
//! The driver draws entries through [`EntrySource`] so tests can inject a
//! fixed seed or an exact script of values. Production runs use an unseeded
//! [`UniformEntries`].
//!
//! Draw order: A row by row (`A[i + j*lda]` for each row `i`, then each
//! column `j`), then B in memory order.

use math_lapack::DenseColMajor;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Source of matrix entries.
pub trait EntrySource {
    /// Next value to store
    fn next_entry(&mut self) -> f64;
}

/// Uniform values in `[-0.5, 0.5)` from a `rand` generator.
#[derive(Debug, Clone)]
pub struct UniformEntries<R: Rng> {
    rng: R,
}

impl<R: Rng> UniformEntries<R> {
    /// Wrap an existing generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformEntries<StdRng> {
    /// Seeded generator when `seed` is given, otherwise seeded from the thread RNG.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => {
                let mut thread_rng = rand::rng();
                StdRng::from_rng(&mut thread_rng)
            }
        };
        Self { rng }
    }
}

impl<R: Rng> EntrySource for UniformEntries<R> {
    fn next_entry(&mut self) -> f64 {
        self.rng.random_range(-0.5..0.5)
    }
}

/// Replays a fixed list of values, then zeros once exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEntries {
    values: Vec<f64>,
    next: usize,
}

impl ScriptedEntries {
    /// Values are handed out in draw order.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }

    /// Number of values handed out so far
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl EntrySource for ScriptedEntries {
    fn next_entry(&mut self) -> f64 {
        let value = self.values.get(self.next).copied().unwrap_or(0.0);
        self.next += 1;
        value
    }
}

/// How the coefficient matrix A is filled. B is always drawn from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillPattern {
    /// Every entry drawn from the source
    #[default]
    Random,
    /// The identity matrix (no draws)
    Identity,
    /// All zeros (no draws)
    Zeros,
}

impl FillPattern {
    /// Name accepted by [`FromStr`] and serde.
    pub fn as_str(self) -> &'static str {
        match self {
            FillPattern::Random => "random",
            FillPattern::Identity => "identity",
            FillPattern::Zeros => "zeros",
        }
    }
}

impl fmt::Display for FillPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FillPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(FillPattern::Random),
            "identity" => Ok(FillPattern::Identity),
            "zeros" | "zero" => Ok(FillPattern::Zeros),
            _ => Err(format!(
                "unknown fill pattern '{s}' (expected random, identity or zeros)"
            )),
        }
    }
}

/// Fill A according to `pattern`. A must start zeroed.
pub fn fill_matrix<S: EntrySource + ?Sized>(
    a: &mut DenseColMajor,
    pattern: FillPattern,
    source: &mut S,
) {
    match pattern {
        FillPattern::Random => {
            for i in 0..a.rows() {
                for j in 0..a.cols() {
                    a.set(i, j, source.next_entry());
                }
            }
        }
        FillPattern::Identity => {
            for i in 0..a.rows().min(a.cols()) {
                a.set(i, i, 1.0);
            }
        }
        FillPattern::Zeros => {}
    }
}

/// Fill B in memory order (column after column).
pub fn fill_rhs<S: EntrySource + ?Sized>(b: &mut DenseColMajor, source: &mut S) {
    for j in 0..b.cols() {
        for i in 0..b.rows() {
            b.set(i, j, source.next_entry());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_entries_in_range() {
        let mut source = UniformEntries::from_seed(Some(7));
        for _ in 0..10_000 {
            let v = source.next_entry();
            assert!(v.is_finite());
            assert!((-0.5..0.5).contains(&v), "{v} out of range");
        }
    }

    #[test]
    fn test_same_seed_same_values() {
        let mut s1 = UniformEntries::from_seed(Some(42));
        let mut s2 = UniformEntries::from_seed(Some(42));
        let v1: Vec<f64> = (0..16).map(|_| s1.next_entry()).collect();
        let v2: Vec<f64> = (0..16).map(|_| s2.next_entry()).collect();
        assert_eq!(v1, v2);
    }

    #[test]
    fn test_unseeded_source_stays_in_range() {
        let mut source = UniformEntries::from_seed(None);
        assert!((0..100).map(|_| source.next_entry()).all(|v| (-0.5..0.5).contains(&v)));
    }

    #[test]
    fn test_random_fill_draws_rows_first() {
        let mut a = DenseColMajor::try_zeros(2, 3, "A").unwrap();
        let mut source = ScriptedEntries::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        fill_matrix(&mut a, FillPattern::Random, &mut source);

        // Row 0 = [1, 2, 3], row 1 = [4, 5, 6], stored column-major
        assert_eq!(a.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(source.consumed(), 6);
    }

    #[test]
    fn test_rhs_fill_is_memory_order() {
        let mut b = DenseColMajor::try_zeros(2, 2, "B").unwrap();
        let mut source = ScriptedEntries::new(vec![1.0, 2.0, 3.0, 4.0]);
        fill_rhs(&mut b, &mut source);
        assert_eq!(b.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_identity_and_zero_patterns_draw_nothing() {
        let mut source = ScriptedEntries::new(vec![9.0; 4]);

        let mut a = DenseColMajor::try_zeros(3, 3, "A").unwrap();
        fill_matrix(&mut a, FillPattern::Identity, &mut source);
        assert_eq!(a.get(1, 1), 1.0);
        assert_eq!(a.get(0, 1), 0.0);

        let mut z = DenseColMajor::try_zeros(3, 3, "A").unwrap();
        fill_matrix(&mut z, FillPattern::Zeros, &mut source);
        assert!(z.as_slice().iter().all(|&v| v == 0.0));

        assert_eq!(source.consumed(), 0);
    }

    #[test]
    fn test_fill_pattern_parsing() {
        assert_eq!("identity".parse::<FillPattern>(), Ok(FillPattern::Identity));
        assert_eq!("ZEROS".parse::<FillPattern>(), Ok(FillPattern::Zeros));
        assert!("ones".parse::<FillPattern>().is_err());
    }
}
