use rand::Rng;

use crate::range::{MAX_ANSWER, MIN_ANSWER};

/// Draws an answer uniformly from `MIN_ANSWER..=MAX_ANSWER`.
pub fn generate_answer<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.gen_range(MIN_ANSWER..=MAX_ANSWER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::in_range;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn always_in_range() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..10_000 {
            assert!(in_range(generate_answer(&mut rng)));
        }
    }

    #[test]
    fn reaches_every_value() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 10];
        for _ in 0..1_000 {
            seen[(generate_answer(&mut rng) - MIN_ANSWER) as usize] = true;
        }
        assert!(seen.iter().all(|x| *x), "missing values: {:?}", seen);
    }

    #[test]
    fn same_seed_same_answers() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let first: Vec<i64> = (0..20).map(|_| generate_answer(&mut a)).collect();
        let second: Vec<i64> = (0..20).map(|_| generate_answer(&mut b)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn works_with_thread_rng() {
        let mut rng = rand::thread_rng();
        assert!(in_range(generate_answer(&mut rng)));
    }
}
