use thiserror::Error;

/// Failures of the server lifecycle: binding the listener and running the accept loop.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The configured address could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop stopped with an I/O error.
    #[error("server stopped unexpectedly: {0}")]
    Serve(#[from] std::io::Error),

    /// The background serving task panicked or was aborted.
    #[error("server task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
