use rand::Rng;

/// Chooses one candidate out of `len`.
///
/// Production code picks uniformly at random; tests plug in a deterministic picker
/// so composed replies can be asserted exactly.
pub trait TemplatePicker: Send + Sync {
    /// Returns an index in `0..len`. Only called with `len > 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform random choice backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl TemplatePicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always picks the same slot, clamped to the available range.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl TemplatePicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}
