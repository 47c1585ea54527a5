//! Axum route handler for the Analysis API.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

use crate::analysis::{service, AnalysisRequest, Upload};
use crate::errors::AppError;
use crate::state::AppState;

pub const RESUME_FIELD: &str = "resume";
pub const JOB_DESCRIPTION_FIELD: &str = "jobDescription";

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
}

/// Raw multipart fields, before validation.
#[derive(Debug, Default)]
struct AnalysisForm {
    resume: Option<Upload>,
    job_description: Option<String>,
}

impl TryFrom<AnalysisForm> for AnalysisRequest {
    type Error = AppError;

    fn try_from(form: AnalysisForm) -> Result<Self, Self::Error> {
        let upload = form
            .resume
            .ok_or_else(|| AppError::Validation("No resume uploaded".to_string()))?;
        let job_description = form
            .job_description
            .filter(|jd| !jd.trim().is_empty())
            .ok_or_else(|| AppError::Validation("No job description provided".to_string()))?;
        Ok(AnalysisRequest {
            job_description,
            upload,
        })
    }
}

/// POST /analyze
///
/// Multipart fields: `resume` (PDF file) and `jobDescription` (text).
/// A body that is not multipart reads as an empty form.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = match multipart {
        Ok(multipart) => read_form(multipart).await?,
        Err(rejection) => {
            warn!("Request to /analyze is not multipart: {rejection}");
            AnalysisForm::default()
        }
    };
    let request = AnalysisRequest::try_from(form)?;

    let analysis_id = Uuid::new_v4();
    let analysis = service::analyze(&request, state.extractor.as_ref(), state.model.as_ref())
        .instrument(info_span!("analyze", %analysis_id))
        .await?;

    Ok(Json(AnalyzeResponse { analysis }))
}

async fn read_form(mut multipart: Multipart) -> Result<AnalysisForm, AppError> {
    let mut form = AnalysisForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        match field.name() {
            Some(RESUME_FIELD) => {
                let media_type = field.content_type().map(String::from);
                let file_name = field.file_name().map(String::from);
                let bytes = field.bytes().await.map_err(multipart_error)?;
                form.resume = Some(Upload {
                    bytes,
                    media_type,
                    file_name,
                });
            }
            Some(JOB_DESCRIPTION_FIELD) => {
                form.job_description = Some(field.text().await.map_err(multipart_error)?);
            }
            // Unknown fields are drained and ignored.
            _ => {}
        }
    }

    Ok(form)
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::UploadTooLarge;
    }
    warn!("Malformed multipart request: {}", e.body_text());
    AppError::Validation("Malformed multipart request".to_string())
}
