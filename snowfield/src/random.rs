use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Returns a uniformly distributed value in `[low, high)`, or `low` when the range is empty.
pub fn uniform(rng: &mut ChaCha8Rng, low: f64, high: f64) -> f64 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}
