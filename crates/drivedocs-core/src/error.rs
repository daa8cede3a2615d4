use drivedocs_client::ClientError;
use thiserror::Error;

/// Pipeline error taxonomy.
///
/// Remote failures pass through unchanged so callers can still distinguish
/// a session-validation refusal from a generic API failure.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("end-user license agreement not accepted")]
    EulaPending,

    #[error("downloads are restricted for this database")]
    DownloadRestricted,

    #[error("fetch cycle superseded by a newer one")]
    StaleCycle,
}

impl CoreError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Client(client) if client.is_validation())
    }
}
