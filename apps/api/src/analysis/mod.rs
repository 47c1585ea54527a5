//! Resume analysis: multipart ingress, PDF text extraction, prompt templating
//! and the single call to the remote model.

pub mod extract;
pub mod handlers;
pub mod prompts;
pub mod service;

use bytes::Bytes;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// The resume file as received in one request. Held in memory only.
#[derive(Debug, Clone)]
pub struct Upload {
    pub bytes: Bytes,
    /// Declared `Content-Type` of the multipart part, if the client sent one.
    pub media_type: Option<String>,
    /// Client-side file name. Logged, never trusted.
    pub file_name: Option<String>,
}

impl Upload {
    /// True when the declared media type is `application/pdf`, ignoring parameters and case.
    pub fn is_pdf(&self) -> bool {
        self.media_type
            .as_deref()
            .and_then(|mt| mt.split(';').next())
            .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(PDF_MEDIA_TYPE))
    }
}

/// A validated analysis request: both inputs present, job description non-blank.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub job_description: String,
    pub upload: Upload,
}
