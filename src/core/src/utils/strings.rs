use rand::RngExt;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

pub struct StringUtils;

impl StringUtils {
    /// Capitalized pseudo-name, used when no name data exists for a country.
    pub fn random_string<R: RngExt + ?Sized>(rng: &mut R, len: usize) -> String {
        let mut result: String = (0..len)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();

        if let Some(first) = result.get_mut(0..1) {
            first.make_ascii_uppercase();
        }

        result
    }
}
