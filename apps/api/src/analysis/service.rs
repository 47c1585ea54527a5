//! Analysis pipeline: extract → build prompt → call model.

use tracing::{info, warn};

use crate::analysis::extract::{extract_resume_text, TextExtractor};
use crate::analysis::prompts::build_analysis_prompt;
use crate::analysis::AnalysisRequest;
use crate::errors::{AppError, UpstreamFailure};
use crate::llm_client::{GenerationOutcome, GenerativeModel};

pub const NO_READABLE_TEXT: &str = "No readable text found in resume";

/// Runs one analysis and returns the model's text verbatim.
///
/// The model is called at most once, and only after the resume yielded text.
pub async fn analyze(
    request: &AnalysisRequest,
    extractor: &dyn TextExtractor,
    model: &dyn GenerativeModel,
) -> Result<String, AppError> {
    let resume_text = match extract_resume_text(&request.upload, extractor).await {
        Ok(text) => text,
        Err(e) => {
            // An unreadable PDF is the caller's problem, not ours.
            warn!("Resume extraction failed: {e}");
            return Err(AppError::Validation(NO_READABLE_TEXT.to_string()));
        }
    };

    if resume_text.is_empty() {
        return Err(AppError::Validation(NO_READABLE_TEXT.to_string()));
    }

    let prompt = build_analysis_prompt(&request.job_description, &resume_text);

    info!("Sending analysis request to {}", crate::llm_client::MODEL);
    let outcome = model
        .generate(&prompt)
        .await
        .map_err(UpstreamFailure::from)?;

    match outcome {
        GenerationOutcome::Text(text) => {
            info!("AI response received ({} chars)", text.len());
            Ok(text)
        }
        GenerationOutcome::NoText { reason } => Err(UpstreamFailure::NoText { reason }.into()),
    }
}
