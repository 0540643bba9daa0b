//! Document bytes → plain text.
//!
//! PDF parsing is delegated to `pdf-extract` and runs on the blocking pool.
//! The extractor is built once at startup from [`ExtractorConfig`] and carried
//! in `AppState`.

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Uploaded file is empty")]
    Empty,

    #[error("File exceeds the upload limit of {limit} bytes")]
    TooLarge { limit: usize },

    #[error("{0}")]
    UnsupportedFormat(String),

    #[error("Failed to extract text from PDF: {0}")]
    ExtractionFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Unsupported,
}

impl DocumentKind {
    /// Decides the document type from the declared MIME type, the file
    /// extension, and finally the leading bytes.
    pub fn detect(file_name: &str, content_type: Option<&str>, bytes: &[u8]) -> Self {
        let name = file_name.to_lowercase();
        let mime = content_type.unwrap_or_default().to_lowercase();

        if mime == "application/pdf" || name.ends_with(".pdf") || bytes.starts_with(PDF_MAGIC) {
            DocumentKind::Pdf
        } else if name.ends_with(".docx")
            || mime == "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        {
            DocumentKind::Docx
        } else {
            DocumentKind::Unsupported
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub max_upload_bytes: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextExtractor {
    config: ExtractorConfig,
}

impl TextExtractor {
    /// One-time setup, called from `main` before the router is built.
    pub fn init(config: ExtractorConfig) -> Self {
        info!(
            "Text extractor initialized (max upload: {} bytes)",
            config.max_upload_bytes
        );
        Self { config }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.config.max_upload_bytes
    }

    /// Extracts page-ordered plain text from an uploaded document.
    pub async fn extract(
        &self,
        file_name: &str,
        content_type: Option<&str>,
        bytes: Bytes,
    ) -> Result<String, ExtractionError> {
        if bytes.is_empty() {
            return Err(ExtractionError::Empty);
        }
        if bytes.len() > self.config.max_upload_bytes {
            warn!("Rejecting {file_name}: {} bytes", bytes.len());
            return Err(ExtractionError::TooLarge {
                limit: self.config.max_upload_bytes,
            });
        }

        match DocumentKind::detect(file_name, content_type, &bytes) {
            DocumentKind::Pdf => {}
            DocumentKind::Docx => {
                return Err(ExtractionError::UnsupportedFormat(
                    "DOCX files are not yet supported. Please upload a PDF.".to_string(),
                ))
            }
            DocumentKind::Unsupported => {
                return Err(ExtractionError::UnsupportedFormat(
                    "Unsupported file format. Please upload a PDF file.".to_string(),
                ))
            }
        }

        debug!("Extracting text from {file_name} ({} bytes)", bytes.len());

        // pdf-extract panics on some malformed inputs; the join error catches it.
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| {
                warn!("PDF extraction task aborted: {e}");
                ExtractionError::ExtractionFailed("the PDF could not be parsed".to_string())
            })?
            .map_err(|e| ExtractionError::ExtractionFailed(e.to_string()))?;

        Ok(normalize_page_breaks(&text))
    }
}

/// Turns form-feed page separators into line breaks.
fn normalize_page_breaks(text: &str) -> String {
    text.replace('\u{c}', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> TextExtractor {
        TextExtractor::init(ExtractorConfig {
            max_upload_bytes: 64,
        })
    }

    #[test]
    fn test_detect_by_mime_extension_and_magic() {
        assert_eq!(
            DocumentKind::detect("resume", Some("application/pdf"), b""),
            DocumentKind::Pdf
        );
        assert_eq!(DocumentKind::detect("Resume.PDF", None, b""), DocumentKind::Pdf);
        assert_eq!(
            DocumentKind::detect("upload.bin", None, b"%PDF-1.7\n"),
            DocumentKind::Pdf
        );
        assert_eq!(DocumentKind::detect("cv.docx", None, b"PK"), DocumentKind::Docx);
        assert_eq!(
            DocumentKind::detect("notes.txt", Some("text/plain"), b"hello"),
            DocumentKind::Unsupported
        );
    }

    #[tokio::test]
    async fn test_empty_upload_rejected() {
        let err = extractor()
            .extract("a.pdf", None, Bytes::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Empty));
    }

    #[tokio::test]
    async fn test_oversized_upload_rejected() {
        let err = extractor()
            .extract("a.pdf", None, Bytes::from(vec![b'x'; 65]))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::TooLarge { limit: 64 }));
    }

    #[tokio::test]
    async fn test_docx_is_unsupported() {
        let err = extractor()
            .extract("cv.docx", None, Bytes::from_static(b"PK\x03\x04"))
            .await
            .unwrap_err();
        match err {
            ExtractionError::UnsupportedFormat(msg) => assert!(msg.contains("DOCX")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_garbage_pdf_fails_extraction() {
        let err = extractor()
            .extract("a.pdf", None, Bytes::from_static(b"%PDF-1.4 not really"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::ExtractionFailed(_)));
    }

    #[test]
    fn test_page_breaks_become_newlines() {
        assert_eq!(normalize_page_breaks("one\u{c}two"), "one\ntwo");
    }
}
