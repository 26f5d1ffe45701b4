use rand::RngExt;

pub struct Poisson;

impl Poisson {
    /// Knuth's multiplication method. Non-positive rates always yield zero.
    pub fn sample<R: RngExt + ?Sized>(lambda: f64, rng: &mut R) -> u32 {
        if lambda <= 0.0 {
            return 0;
        }

        let limit = (-lambda).exp();

        let mut k = 0;
        let mut p = 1.0;

        loop {
            k += 1;
            p *= rng.random::<f64>();

            if p <= limit {
                break;
            }
        }

        k - 1
    }
}
