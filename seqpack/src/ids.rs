//! Random identifier generation.

use rand::Rng;

/// Default number of identifiers generated per run.
pub const DEFAULT_COUNT: usize = 2000;

/// Default largest identifier value (inclusive).
pub const DEFAULT_MAX: u64 = 999;

/// Parameters for [`generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// How many identifiers to produce.
    pub count: usize,
    /// Largest identifier value; values are drawn from `1..=max`.
    pub max: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            max: DEFAULT_MAX,
        }
    }
}

/// Generates `config.count` identifiers uniformly distributed in
/// `1..=config.max`. Duplicates are kept and order is significant.
///
/// A `max` of zero is treated as one so that every identifier stays
/// positive.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, config: GeneratorConfig) -> Vec<u64> {
    let max = config.max.max(1);
    (0..config.count).map(|_| rng.gen_range(1..=max)).collect()
}
