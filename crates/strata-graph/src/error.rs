use thiserror::Error;

/// Result alias for graph operations.
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

/// Errors raised by graph construction and querying.
#[derive(Debug, Error)]
pub enum GraphError {
    /// An edge referenced a module that is not a node of the graph.
    #[error("Unknown module: '{0}'")]
    UnknownModule(String),

    /// A filter pattern failed to compile.
    #[error("Invalid filter pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A structural invariant does not hold.
    #[error("Graph invariant violated for '{module}': {reason}")]
    InvariantViolation { module: String, reason: String },
}
