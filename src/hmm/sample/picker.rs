use ndarray::ArrayView1;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

///
/// Pick an index from a cumulative distribution `[p0, p0+p1, ...]`.
///
/// Draws `r` uniformly from `[0, 1)` and returns the first index whose
/// cumulative probability is greater than `r`. If there is none (the last
/// cumulative value is slightly below 1), the last index is returned.
///
/// This is the only place randomness is consumed.
///
pub fn pick_from_cumulative<R: Rng>(rng: &mut R, cumulative: ArrayView1<f64>) -> usize {
    let r: f64 = rng.gen();
    cumulative
        .iter()
        .position(|&c| c > r)
        .unwrap_or_else(|| cumulative.len().saturating_sub(1))
}

///
/// Seeded random number generator used for sampling
///
pub fn rng_from_seed(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::rngs::mock::StepRng;

    #[test]
    fn pick_lowest_draw() {
        // r = 0 skips zero-probability entries
        let mut rng = StepRng::new(0, 0);
        let c = array![0.0, 0.4, 1.0];
        assert_eq!(pick_from_cumulative(&mut rng, c.view()), 1);
    }

    #[test]
    fn pick_highest_draw() {
        // r is just below 1
        let mut rng = StepRng::new(u64::MAX, 0);
        let c = array![0.5, 1.0];
        assert_eq!(pick_from_cumulative(&mut rng, c.view()), 1);
        // rounding leaves the last cumulative value below r
        let c = array![0.2, 0.5, 0.99995];
        assert_eq!(pick_from_cumulative(&mut rng, c.view()), 2);
    }

    #[test]
    fn pick_frequency() {
        let mut rng = rng_from_seed(0);
        let c = array![0.6, 1.0];
        let n = 10000;
        let n0 = (0..n)
            .filter(|_| pick_from_cumulative(&mut rng, c.view()) == 0)
            .count();
        let freq = n0 as f64 / n as f64;
        println!("freq={}", freq);
        assert_abs_diff_eq!(freq, 0.6, epsilon = 0.03);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let c = array![0.1, 0.3, 0.6, 1.0];
        let mut r1 = rng_from_seed(11);
        let mut r2 = rng_from_seed(11);
        let xs: Vec<usize> = (0..20).map(|_| pick_from_cumulative(&mut r1, c.view())).collect();
        let ys: Vec<usize> = (0..20).map(|_| pick_from_cumulative(&mut r2, c.view())).collect();
        assert_eq!(xs, ys);
    }
}
