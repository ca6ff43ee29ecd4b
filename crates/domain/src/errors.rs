use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Carries the exact client-facing validation message.
    #[error("{0}")]
    MissingParameters(String),

    #[error("Upstream provider returned HTTP {0}")]
    UpstreamStatus(u16),

    #[error("Fetch failed: {0}")]
    FetchFailed(String),
}
