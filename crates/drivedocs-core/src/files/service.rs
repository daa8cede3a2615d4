//! Document fetch orchestration.

use std::sync::Arc;

use drivedocs_client::{DocStore, Gateway, infer_content_type};
use drivedocs_models::{
    DatabaseConfig, DeviceSelection, DriveFile, FilePreview, ResolvedContext, SessionInfo,
};

use crate::context::resolve_context;
use crate::cycle::FetchCycle;
use crate::error::CoreError;
use crate::files::tag_associations;

/// One document with its resolved associations.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedFile {
    pub file: DriveFile,
    pub associated: Vec<String>,
}

/// The outcome of one fetch cycle: the resolved context and the displayable,
/// tagged document list.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub context: ResolvedContext,
    pub files: Vec<TaggedFile>,
}

/// Orchestrates resolve → fetch → tag over the remote seams.
///
/// Holds no document state; every [`refresh`](Self::refresh) is a fresh
/// cycle guarded by a generation token.
pub struct DocumentService {
    gateway: Arc<dyn Gateway>,
    store: Arc<dyn DocStore>,
    session: SessionInfo,
    cycle: FetchCycle,
}

impl DocumentService {
    pub fn new(gateway: Arc<dyn Gateway>, store: Arc<dyn DocStore>, session: SessionInfo) -> Self {
        Self { gateway, store, session, cycle: FetchCycle::new() }
    }

    pub fn session(&self) -> &SessionInfo {
        &self.session
    }

    /// Run one full fetch cycle.
    ///
    /// Context-resolution failure degrades to an empty context (the document
    /// fetch then surfaces its own validation error); a cycle superseded
    /// while fetching yields [`CoreError::StaleCycle`] instead of stale data.
    /// Malformed documents (no file name) are dropped before tagging.
    pub async fn refresh(&self, selection: &DeviceSelection) -> Result<Snapshot, CoreError> {
        let token = self.cycle.begin();

        let context = match resolve_context(self.gateway.as_ref(), &self.session, selection).await {
            Ok(context) => context,
            Err(error) => {
                tracing::error!(%error, "context resolution failed, continuing with empty context");
                ResolvedContext::empty()
            }
        };

        let files = self.store.fetch_files(&self.session, &context.query_tags()).await?;

        if !self.cycle.is_current(token) {
            tracing::debug!("discarding superseded fetch cycle");
            return Err(CoreError::StaleCycle);
        }

        let files = files
            .into_iter()
            .filter(DriveFile::is_displayable)
            .map(|file| TaggedFile { associated: tag_associations(&file, &context), file })
            .collect();

        Ok(Snapshot { context, files })
    }

    pub async fn database_config(&self, tags: &[String]) -> Result<DatabaseConfig, CoreError> {
        Ok(self.store.database_config(&self.session, tags).await?)
    }

    /// Read a document's bytes, refusing when the database restricts
    /// downloads.
    pub async fn download(&self, file: &DriveFile) -> Result<Vec<u8>, CoreError> {
        let config = self.store.database_config(&self.session, &[]).await?;
        if config.restrict_download {
            return Err(CoreError::DownloadRestricted);
        }
        Ok(self.store.read_file(&self.session, &file.path, &file.file_name).await?)
    }

    /// Resolve a document to a preview handle, inferring the content type
    /// from the file name when the backend omits it.
    pub async fn open(&self, file: &DriveFile) -> Result<FilePreview, CoreError> {
        let mut preview = self.store.open_file(&self.session, &file.path, &file.file_name).await?;
        if preview.content_type.is_none() {
            preview.content_type = infer_content_type(&file.file_name).map(String::from);
        }
        Ok(preview)
    }

    /// Resolve a document to a raw signed URL.
    pub async fn file_url(&self, file: &DriveFile) -> Result<String, CoreError> {
        Ok(self.store.read_file_url(&self.session, &file.path, &file.file_name).await?)
    }
}
