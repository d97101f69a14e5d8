//! Sample data helpers: evenly spaced grids and seeded Gaussian noise.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::error::{ChartError, Result};

/// `n` evenly spaced values from `start` to `stop`, both included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Deterministic RNG for reproducible sample data.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `n` draws from N(mean, sd²).
pub fn gaussian<R: rand::Rng + ?Sized>(n: usize, mean: f64, sd: f64, rng: &mut R) -> Result<Vec<f64>> {
    let normal = Normal::new(mean, sd)
        .map_err(|e| ChartError::InvalidParameter(format!("normal({mean}, {sd}): {e}")))?;
    Ok((0..n).map(|_| normal.sample(rng)).collect())
}
