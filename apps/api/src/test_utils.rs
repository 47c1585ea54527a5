//! Stubs and state builders shared by handler and service tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::HeaderValue;
use bytes::Bytes;

use crate::analysis::extract::{ExtractError, TextExtractor};
use crate::config::Config;
use crate::llm_client::{GenerationOutcome, GenerativeModel, LlmError};
use crate::state::AppState;

pub const ALLOWED_ORIGIN: &str = "http://localhost:5173";

pub fn test_config() -> Config {
    Config {
        gemini_api_key: "test-key".to_string(),
        gemini_base_url: "http://127.0.0.1:9".to_string(),
        port: 0,
        rust_log: "debug".to_string(),
        allowed_origins: vec![HeaderValue::from_static(ALLOWED_ORIGIN)],
        max_upload_bytes: 1024 * 1024,
    }
}

pub fn test_state(extractor: Arc<StubExtractor>, model: Arc<StubModel>) -> AppState {
    test_state_with(extractor, model)
}

pub fn test_state_with(extractor: Arc<dyn TextExtractor>, model: Arc<StubModel>) -> AppState {
    AppState {
        config: test_config(),
        model,
        extractor,
    }
}

/// A one-page PDF showing `text` in Helvetica, with a correct xref table.
/// `text` must not contain unbalanced parentheses or backslashes.
pub fn minimal_pdf(text: &str) -> Vec<u8> {
    let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R \
         /Resources << /Font << /F1 5 0 R >> >> >>"
            .to_string(),
        format!("<< /Length {} >>\nstream\n{content}\nendstream", content.len()),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_at = pdf.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        xref.push_str(&format!("{offset:010} 00000 n \n"));
    }
    xref.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
        objects.len() + 1
    ));
    pdf.extend_from_slice(xref.as_bytes());
    pdf
}

/// Extractor that returns canned text (or fails) and counts calls.
pub struct StubExtractor {
    text: Option<String>,
    calls: AtomicUsize,
}

impl StubExtractor {
    pub fn returning(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            text: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextExtractor for StubExtractor {
    async fn extract(&self, _pdf: Bytes) -> Result<String, ExtractError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.text
            .clone()
            .ok_or_else(|| ExtractError::Pdf("invalid file header".to_string()))
    }
}

enum Reply {
    Text(String),
    NoText(Option<String>),
    Fail { status: u16, message: String },
    Panic,
}

/// Model that records every prompt it is sent.
pub struct StubModel {
    reply: Reply,
    prompts: Mutex<Vec<String>>,
}

impl StubModel {
    fn with(reply: Reply) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::with(Reply::Text(text.to_string()))
    }

    pub fn no_text(reason: Option<&str>) -> Self {
        Self::with(Reply::NoText(reason.map(String::from)))
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self::with(Reply::Fail {
            status,
            message: message.to_string(),
        })
    }

    pub fn panicking() -> Self {
        Self::with(Reply::Panic)
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl GenerativeModel for StubModel {
    async fn generate(&self, prompt: &str) -> Result<GenerationOutcome, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Reply::Text(text) => Ok(GenerationOutcome::Text(text.clone())),
            Reply::NoText(reason) => Ok(GenerationOutcome::NoText {
                reason: reason.clone(),
            }),
            Reply::Fail { status, message } => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
            Reply::Panic => panic!("model backend crashed"),
        }
    }
}
