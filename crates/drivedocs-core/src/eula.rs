//! End-user license agreement gate.
//!
//! Main content must not render while the gate is pending; declining is a
//! local decision that the caller maps to leaving the application.

use std::sync::Arc;

use drivedocs_client::DocStore;
use drivedocs_models::{EulaStatus, SessionInfo};

use crate::error::CoreError;

/// Outcome of presenting the agreement to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EulaDecision {
    Accepted,
    Declined,
}

pub struct EulaGate {
    store: Arc<dyn DocStore>,
    session: SessionInfo,
}

impl EulaGate {
    pub fn new(store: Arc<dyn DocStore>, session: SessionInfo) -> Self {
        Self { store, session }
    }

    pub async fn status(&self) -> Result<EulaStatus, CoreError> {
        Ok(self.store.check_eula(&self.session).await?)
    }

    /// Record acceptance with the backend.
    pub async fn accept(&self) -> Result<EulaDecision, CoreError> {
        self.store.accept_eula(&self.session).await?;
        tracing::info!(user = %self.session.user_name, "EULA accepted");
        Ok(EulaDecision::Accepted)
    }

    /// Declining makes no remote call; the caller redirects away.
    pub fn decline(&self) -> EulaDecision {
        tracing::info!(user = %self.session.user_name, "EULA declined");
        EulaDecision::Declined
    }

    /// Guard for document operations: pending acceptance blocks them.
    pub async fn ensure_accepted(&self) -> Result<(), CoreError> {
        match self.status().await? {
            EulaStatus::Accepted => Ok(()),
            EulaStatus::Pending => Err(CoreError::EulaPending),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use drivedocs_models::{DatabaseConfig, DriveFile, FilePreview};
    use std::sync::atomic::{AtomicBool, Ordering};

    struct FakeStore {
        accepted: AtomicBool,
    }

    #[async_trait]
    impl DocStore for FakeStore {
        async fn fetch_files(
            &self,
            _session: &SessionInfo,
            _tags: &[String],
        ) -> drivedocs_client::Result<Vec<DriveFile>> {
            Ok(Vec::new())
        }

        async fn database_config(
            &self,
            _session: &SessionInfo,
            _tags: &[String],
        ) -> drivedocs_client::Result<DatabaseConfig> {
            Ok(DatabaseConfig::default())
        }

        async fn open_file(
            &self,
            _session: &SessionInfo,
            _path: &str,
            _name: &str,
        ) -> drivedocs_client::Result<FilePreview> {
            Ok(FilePreview { url: String::new(), content_type: None })
        }

        async fn read_file(
            &self,
            _session: &SessionInfo,
            _path: &str,
            _name: &str,
        ) -> drivedocs_client::Result<Vec<u8>> {
            Ok(Vec::new())
        }

        async fn read_file_url(
            &self,
            _session: &SessionInfo,
            _path: &str,
            _name: &str,
        ) -> drivedocs_client::Result<String> {
            Ok(String::new())
        }

        async fn check_eula(&self, _session: &SessionInfo) -> drivedocs_client::Result<EulaStatus> {
            Ok(if self.accepted.load(Ordering::SeqCst) {
                EulaStatus::Accepted
            } else {
                EulaStatus::Pending
            })
        }

        async fn accept_eula(&self, _session: &SessionInfo) -> drivedocs_client::Result<()> {
            self.accepted.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    fn gate() -> EulaGate {
        EulaGate::new(
            Arc::new(FakeStore { accepted: AtomicBool::new(false) }),
            SessionInfo {
                database: "acme".into(),
                session_id: "s-1".into(),
                user_name: "dana@acme.com".into(),
                server: "my.geotab.example".into(),
            },
        )
    }

    #[tokio::test]
    async fn pending_gate_blocks_document_operations() {
        let gate = gate();
        assert!(matches!(gate.ensure_accepted().await, Err(CoreError::EulaPending)));
    }

    #[tokio::test]
    async fn acceptance_unblocks_the_gate() {
        let gate = gate();
        assert_eq!(gate.accept().await.unwrap(), EulaDecision::Accepted);
        assert!(gate.ensure_accepted().await.is_ok());
    }

    #[tokio::test]
    async fn decline_is_local() {
        let gate = gate();
        assert_eq!(gate.decline(), EulaDecision::Declined);
        // still pending remotely
        assert_eq!(gate.status().await.unwrap(), EulaStatus::Pending);
    }
}
