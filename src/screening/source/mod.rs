//! Document loader seam. The engine only ever sees plain text per document
//! identifier; turning container formats (PDF, DOCX) into text is the
//! adapter's job, not engine logic.

pub mod drive;

use std::path::PathBuf;

use super::document::CandidateDocument;

/// Loader adapter contract: produce the batch's documents as plain text.
pub trait TextSource {
    fn documents(&self) -> Result<Vec<CandidateDocument>, SourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read candidate documents: {0}")]
    Io(#[from] std::io::Error),
    #[error("document '{0}' is not plain UTF-8 text")]
    NotText(String),
}

/// In-memory source for upload-style batches where the text arrived inline.
#[derive(Debug, Clone, Default)]
pub struct MemoryTextSource {
    documents: Vec<CandidateDocument>,
}

impl MemoryTextSource {
    pub fn new(documents: Vec<CandidateDocument>) -> Self {
        Self { documents }
    }
}

impl TextSource for MemoryTextSource {
    fn documents(&self) -> Result<Vec<CandidateDocument>, SourceError> {
        Ok(self.documents.clone())
    }
}

/// Directory of already-normalized `.txt` files, one candidate per file,
/// file stem as the document identifier. Entries are sorted by identifier
/// so repeated loads of the same directory produce the same batch order.
#[derive(Debug, Clone)]
pub struct DirectoryTextSource {
    root: PathBuf,
}

impl DirectoryTextSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TextSource for DirectoryTextSource {
    fn documents(&self) -> Result<Vec<CandidateDocument>, SourceError> {
        let mut documents = Vec::new();

        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
                continue;
            }

            let id = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_string)
                .ok_or_else(|| SourceError::NotText(path.display().to_string()))?;

            let text = std::fs::read_to_string(&path)
                .map_err(|err| match err.kind() {
                    std::io::ErrorKind::InvalidData => SourceError::NotText(id.clone()),
                    _ => SourceError::Io(err),
                })?;

            documents.push(CandidateDocument::uploaded(id, text));
        }

        documents.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(documents)
    }
}
