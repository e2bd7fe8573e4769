#[derive(Clone, Debug)]
pub struct Config {
    /// Number of concentric square-ring pairs.
    pub ring_count: usize,
    /// Per-ring rotation offsets in radians. Empty means "draw them
    /// randomly at construction time"; non-empty must match `ring_count`.
    pub offsets: Vec<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ring_count: 4,
            offsets: Vec::new(),
        }
    }
}
