use gridtrace_core::ConfigError;

/// Errors from [`MazeGen::generate`](crate::MazeGen::generate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error("invalid maze configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    /// Every attempt produced a maze where the end cannot be reached.
    #[error("no solvable maze after {attempts} attempts")]
    GenerationFailed { attempts: usize },
}
