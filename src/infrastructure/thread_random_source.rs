// Random source backed by the thread-local generator
use crate::application::random_source::RandomSource;
use rand::Rng;

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn next_in_range(&self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        rand::thread_rng().gen_range(min..max)
    }

    fn unique_seed(&self) -> u64 {
        rand::random::<u64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_in_range_stays_in_bounds() {
        let random = ThreadRandomSource;
        for _ in 0..1000 {
            let value = random.next_in_range(-3, 7);
            assert!((-3..7).contains(&value));
        }
        assert_eq!(random.next_in_range(5, 5), 5);
        assert_eq!(random.next_in_range(9, 2), 9);
    }

    #[test]
    fn test_unique_token_is_hex() {
        let token = ThreadRandomSource.unique_token();
        assert_eq!(token.len(), 16);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
