// Source of randomness, injected wherever identifiers or nonces are generated

pub trait RandomSource: Send + Sync {
    /// Uniformly distributed value in `min..max`; returns `min` when the range is empty
    fn next_in_range(&self, min: i32, max: i32) -> i32;

    /// A value suitable for seeding or identifying something uniquely
    fn unique_seed(&self) -> u64;

    /// Hex rendering of a fresh unique seed
    fn unique_token(&self) -> String {
        format!("{:016x}", self.unique_seed())
    }
}
