use std::fmt::Debug;

use google_drive3::{api::Scope, DriveHub};
use tokio::runtime::Runtime;

/// MIME types the original screening flow accepts from a Drive folder.
const RESUME_MIME_TYPES: [&str; 4] = [
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.google-apps.document",
    "text/plain",
];

/// One résumé file sitting in a Drive folder, before any text conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveDocumentRef {
    pub file_id: String,
    pub name: String,
    pub mime_type: Option<String>,
}

impl DriveDocumentRef {
    /// Files that are not already a `text/*` MIME type still need the
    /// hosting application's conversion step before the engine can see
    /// them as a [`crate::screening::CandidateDocument`].
    pub fn needs_conversion(&self) -> bool {
        match self
            .mime_type
            .as_deref()
            .and_then(|raw| raw.parse::<mime::Mime>().ok())
        {
            Some(parsed) => parsed.type_() != mime::TEXT,
            None => true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DriveOperationError {
    #[error("drive operation failed: {0}")]
    Backend(String),
    #[error("drive runtime unavailable: {0}")]
    Runtime(String),
}

/// Seam between the screening workflows and Drive, so batch discovery can
/// be exercised with fakes and never reaches the network in tests.
pub trait DriveGateway: Debug {
    fn list_resume_files(
        &self,
        folder_id: &str,
    ) -> Result<Vec<DriveDocumentRef>, DriveOperationError>;
}

/// Thin wrapper around the generated google-drive3 client allowing
/// synchronous workflows to interact with Drive without exposing async
/// details. Listing only: downloading media and normalizing it to text
/// stays with the hosting application's loader adapter.
pub struct GoogleDriveSource<C>
where
    C: google_drive3::common::Connector + Send + Sync + 'static,
{
    hub: DriveHub<C>,
    runtime: Runtime,
}

impl<C> GoogleDriveSource<C>
where
    C: google_drive3::common::Connector + Send + Sync + 'static,
{
    pub fn new(hub: DriveHub<C>, runtime: Runtime) -> Self {
        Self { hub, runtime }
    }

    pub fn with_runtime(hub: DriveHub<C>) -> Result<Self, DriveOperationError> {
        let runtime =
            Runtime::new().map_err(|err| DriveOperationError::Runtime(err.to_string()))?;
        Ok(Self::new(hub, runtime))
    }

    fn map_error<E: std::fmt::Display>(err: E) -> DriveOperationError {
        DriveOperationError::Backend(err.to_string())
    }

    fn list_query(folder_id: &str) -> String {
        let mime_filter = RESUME_MIME_TYPES
            .iter()
            .map(|mime_type| format!("mimeType='{mime_type}'"))
            .collect::<Vec<_>>()
            .join(" or ");
        format!("'{folder_id}' in parents and trashed=false and ({mime_filter})")
    }
}

impl<C> Debug for GoogleDriveSource<C>
where
    C: google_drive3::common::Connector + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleDriveSource").finish_non_exhaustive()
    }
}

impl<C> DriveGateway for GoogleDriveSource<C>
where
    C: google_drive3::common::Connector + Send + Sync + 'static,
{
    fn list_resume_files(
        &self,
        folder_id: &str,
    ) -> Result<Vec<DriveDocumentRef>, DriveOperationError> {
        let query = Self::list_query(folder_id);
        let result = self.runtime.block_on(async {
            self.hub
                .files()
                .list()
                .q(&query)
                .param("fields", "files(id,name,mimeType)")
                .page_size(100)
                .include_items_from_all_drives(true)
                .supports_all_drives(true)
                .add_scope(Scope::Readonly)
                .doit()
                .await
        });

        let (_, file_list) = result.map_err(GoogleDriveSource::<C>::map_error)?;
        let files = file_list.files.unwrap_or_default();
        Ok(files
            .into_iter()
            .map(|file| DriveDocumentRef {
                file_id: file.id.unwrap_or_default(),
                name: file.name.unwrap_or_else(|| "untitled".to_string()),
                mime_type: file.mime_type,
            })
            .collect())
    }
}
