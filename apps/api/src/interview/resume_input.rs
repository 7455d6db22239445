//! Extracts the resume from a `/generate` request.
//!
//! Accepts `application/x-www-form-urlencoded` with a `resume` field, or
//! `multipart/form-data` with either a `resume` text field or a `resume_file`
//! upload (plain text or PDF). Anything else counts as no resume.

use std::fmt::Display;

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    Form,
};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::AppError;

pub const RESUME_FIELD: &str = "resume";
pub const RESUME_FILE_FIELD: &str = "resume_file";
const UNREADABLE_FILE: &str = "could not read resume file";

#[derive(Debug, Deserialize)]
struct ResumeForm {
    resume: Option<String>,
}

/// Non-empty resume text. Rejects with `AppError::InvalidInput` otherwise.
#[derive(Debug)]
pub struct ResumeText(pub String);

#[async_trait]
impl<S> FromRequest<S> for ResumeText
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        let resume = if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| rejected("multipart body", e.status(), e))?;
            read_multipart(multipart).await?
        } else {
            match Form::<ResumeForm>::from_request(req, state).await {
                Ok(Form(form)) => form.resume,
                Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                    return Err(rejected("form body", e.status(), e));
                }
                Err(e) => {
                    debug!(status = %e.status(), "Unreadable form body: {e}");
                    None
                }
            }
        };

        resume
            .filter(|r| !r.trim().is_empty())
            .map(ResumeText)
            .ok_or_else(AppError::missing_resume)
    }
}

/// The first non-empty `resume` field wins over any file; among files the
/// first non-empty `resume_file` is used.
async fn read_multipart(mut multipart: Multipart) -> Result<Option<String>, AppError> {
    let mut text: Option<String> = None;
    let mut file: Option<(Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| rejected("multipart field", e.status(), e))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(RESUME_FIELD) if text.is_none() => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| rejected("resume field", e.status(), e))?;
                if !value.trim().is_empty() {
                    text = Some(value);
                }
            }
            Some(RESUME_FILE_FIELD) if file.is_none() => {
                let content_type = field.content_type().map(str::to_owned);
                let bytes = field.bytes().await.map_err(|e| {
                    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                        return rejected("resume file", e.status(), e);
                    }
                    warn!("Failed to read uploaded resume: {e}");
                    unreadable_file()
                })?;
                if !bytes.is_empty() {
                    file = Some((content_type, bytes.to_vec()));
                }
            }
            _ => {}
        }
    }

    if text.is_some() {
        return Ok(text);
    }

    match file {
        Some((content_type, bytes)) => {
            read_resume_file(content_type.as_deref(), bytes).await.map(Some)
        }
        None => Ok(None),
    }
}

/// Decodes `text/*` uploads as UTF-8 and extracts text from anything else as PDF.
async fn read_resume_file(content_type: Option<&str>, bytes: Vec<u8>) -> Result<String, AppError> {
    if content_type.is_some_and(|ct| ct.starts_with("text/")) {
        return String::from_utf8(bytes).map_err(|_| unreadable_file());
    }

    // pdf-extract is CPU-bound and may panic on hostile input.
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| {
            warn!("PDF extraction aborted: {e}");
            unreadable_file()
        })?
        .map_err(|e| {
            warn!("PDF extraction failed: {e:?}");
            unreadable_file()
        })
}

/// Maps a body rejection: over the size limit is 413, anything else counts
/// as no resume.
fn rejected(what: &str, status: StatusCode, detail: impl Display) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        warn!("Rejected oversized {what}: {detail}");
        return AppError::PayloadTooLarge;
    }
    debug!(%status, "Unreadable {what}: {detail}");
    AppError::missing_resume()
}

fn unreadable_file() -> AppError {
    AppError::InvalidInput(UNREADABLE_FILE.to_string())
}
