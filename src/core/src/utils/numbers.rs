use rand::RngExt;

pub struct IntegerUtils;

impl IntegerUtils {
    /// Uniform integer in `min..=max`. Returns `min` when the range is empty.
    pub fn random<R: RngExt + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }

        rng.random_range(min..=max)
    }
}

pub struct FloatUtils;

impl FloatUtils {
    /// Uniform float in `min..=max`. Returns `min` when the range is empty.
    pub fn random<R: RngExt + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }

        rng.random_range(min..=max)
    }

    pub fn round_to(value: f32, digits: i32) -> f32 {
        let factor = 10f32.powi(digits);
        (value * factor).round() / factor
    }
}
