use thiserror::Error;

/// Errors raised by chain traversal.
///
/// Degenerate inputs such as an empty chain passed to removal or reversal are
/// not errors; those operations handle them directly.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ChainError {
    #[error("chain is empty; at least one node is required")]
    EmptyChain,
    #[error("chain has more than {limit} nodes; it may contain a cycle")]
    LimitExceeded { limit: usize },
    #[error("failed to write chain output")]
    Format(#[from] core::fmt::Error),
}
