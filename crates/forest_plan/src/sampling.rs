//! Bounded random draws over a shared [`RngCore`].
//!
//! Every sampling operation in the crate goes through these helpers so that a run
//! consumes the random stream in a fixed, predictable pattern. Each helper draws a
//! fixed number of words from the generator, except [`uniform_u32_inclusive`] which
//! rejects biased words and may loop; the loop is still a pure function of the
//! stream, so seeded runs stay reproducible.
use rand::RngCore;

/// Generate a random float in the range [0, 1) with 53 bits of precision.
#[inline]
pub fn unit(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Uniform float in the closed interval `[min, max]`.
///
/// Callers are expected to pass `min <= max`; the result is clamped so that
/// rounding never leaves the interval.
#[inline]
pub fn uniform_f32(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "uniform_f32 requires min <= max");
    let t = unit(rng);
    let v = min as f64 + (max as f64 - min as f64) * t;
    (v as f32).clamp(min, max)
}

/// Uniform integer in the closed interval `[min, max]`.
///
/// Returns `min` without touching the generator when `min == max`.
pub fn uniform_u32_inclusive(rng: &mut dyn RngCore, min: u32, max: u32) -> u32 {
    debug_assert!(min <= max, "uniform_u32_inclusive requires min <= max");
    if min >= max {
        return min;
    }

    let span = (max - min) as u64 + 1;
    // Largest multiple of `span` that fits; words at or above it would bias the result.
    let zone = u64::MAX - (u64::MAX % span);
    loop {
        let v = rng.next_u64();
        if v < zone {
            return min + (v % span) as u32;
        }
    }
}

/// Bernoulli trial with success probability `p`.
///
/// `p <= 0` (and NaN) never succeeds, `p >= 1` always succeeds. Always consumes one draw.
#[inline]
pub fn bernoulli(rng: &mut dyn RngCore, p: f64) -> bool {
    unit(rng) < p
}

/// Pick a uniformly random element of `items`.
pub fn choose<'a, T>(rng: &mut dyn RngCore, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let idx = uniform_u32_inclusive(rng, 0, (items.len() - 1) as u32) as usize;
    items.get(idx)
}
