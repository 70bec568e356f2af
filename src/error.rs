#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("color code too long: {length} bytes > {budget} byte budget")]
    CapacityExceeded { length: usize, budget: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
