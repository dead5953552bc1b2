/// Source of the random term added by the fraud model.
///
/// Injected so tests and reproducible deployments can pin it.
pub trait NoiseSource: Send + Sync {
    /// Uniform integer in `[0, upper)`. Must return 0 when `upper` is 0.
    fn next_below(&self, upper: u32) -> u32;
}
