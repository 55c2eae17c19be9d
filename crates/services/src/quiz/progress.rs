/// Aggregated view of session progress, useful for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub dispatched: usize,
    pub remaining: usize,
    pub is_terminal: bool,
}
