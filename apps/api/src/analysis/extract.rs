//! Text extraction from uploaded resumes.
//!
//! Only PDF is supported. The heavy lifting is `pdf_extract`; this module
//! moves it onto the blocking pool and normalizes its failures.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::analysis::Upload;

/// Characters of extracted text echoed to the debug log.
const LOG_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("PDF extraction task aborted: {0}")]
    Aborted(#[from] tokio::task::JoinError),
}

/// Turns PDF bytes into plain text. Carried in `AppState` as `Arc<dyn TextExtractor>`.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, pdf: Bytes) -> Result<String, ExtractError>;
}

/// `pdf_extract`-backed extractor.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, pdf: Bytes) -> Result<String, ExtractError> {
        // pdf_extract is synchronous and may panic on malformed input;
        // a panic surfaces here as a JoinError.
        tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&pdf).map_err(|e| ExtractError::Pdf(e.to_string()))
        })
        .await?
    }
}

/// Returns the trimmed resume text, or an empty string when the upload is not a PDF.
pub async fn extract_resume_text(
    upload: &Upload,
    extractor: &dyn TextExtractor,
) -> Result<String, ExtractError> {
    if !upload.is_pdf() {
        // Not flagged to the caller: a non-PDF reads as "no text".
        warn!(
            "Skipping extraction for non-PDF upload (declared type: {})",
            upload.media_type.as_deref().unwrap_or("none")
        );
        return Ok(String::new());
    }

    info!(
        "Extracting text from uploaded PDF ({} bytes, name: {})",
        upload.bytes.len(),
        upload.file_name.as_deref().unwrap_or("unnamed")
    );
    let text = extractor.extract(upload.bytes.clone()).await?;
    let text = text.trim().to_string();

    let preview: String = text.chars().take(LOG_PREVIEW_CHARS).collect();
    debug!("Extracted text (first {LOG_PREVIEW_CHARS} chars): {preview}");

    Ok(text)
}
