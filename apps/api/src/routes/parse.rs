//! Upload-and-parse route: the input boundary of the extraction pipeline.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;

use crate::decode::decode_pdf;
use crate::errors::AppError;
use crate::extraction::extract_resume;
use crate::extraction::models::ResumeExtraction;
use crate::state::AppState;

/// POST /api/v1/resumes/parse
///
/// Accepts a multipart `file` field holding one PDF, guards content type and
/// size, then decodes and extracts. Decoding and extraction are CPU-bound, so
/// both run inside `spawn_blocking` to keep the tokio scheduler unblocked.
pub async fn handle_parse_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeExtraction>, AppError> {
    let payload = read_pdf_field(&mut multipart).await?;

    if payload.len() > state.config.max_upload_bytes {
        return Err(AppError::PayloadTooLarge(
            "File size too large. Maximum allowed size is 5MB.".to_string(),
        ));
    }

    let recognizer = state.recognizer.clone();
    let extraction = tokio::task::spawn_blocking(move || {
        let text = decode_pdf(&payload)?;
        extract_resume(&text, recognizer.as_ref())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in parse: {e}")))??;

    Ok(Json(extraction))
}

/// Pulls the `file` field out of the multipart body, rejecting anything that
/// is not declared as a PDF.
async fn read_pdf_field(multipart: &mut Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        if field.content_type() != Some("application/pdf") {
            return Err(AppError::Validation(
                "Invalid file format. Please upload a PDF file.".to_string(),
            ));
        }

        return field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")));
    }

    Err(AppError::Validation(
        "Missing 'file' field in multipart body".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::ner::LexicalRecognizer;
    use crate::routes::build_router;
    use crate::state::AppState;

    const BOUNDARY: &str = "test-boundary";

    fn make_state(max_upload_bytes: usize) -> AppState {
        AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                max_upload_bytes,
            },
            recognizer: Arc::new(LexicalRecognizer),
        }
    }

    fn make_upload_request(field_name: &str, content_type: &str, payload: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; \
                 name=\"{field_name}\"; filename=\"resume.pdf\"\r\n\
                 Content-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(payload);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/parse")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn error_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_rejects_non_pdf_content_type() {
        let app = build_router(make_state(5 * 1024 * 1024));
        let response = app
            .oneshot(make_upload_request("file", "text/plain", b"hello"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = error_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            body["error"]["message"],
            "Invalid file format. Please upload a PDF file."
        );
    }

    #[tokio::test]
    async fn test_rejects_missing_file_field() {
        let app = build_router(make_state(5 * 1024 * 1024));
        let response = app
            .oneshot(make_upload_request(
                "attachment",
                "application/pdf",
                b"%PDF-1.4",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = error_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_rejects_payload_over_size_ceiling() {
        let app = build_router(make_state(16));
        let oversized = vec![b'a'; 64];
        let response = app
            .oneshot(make_upload_request("file", "application/pdf", &oversized))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body = error_body(response).await;
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_undecodable_bytes_report_decode_error() {
        let app = build_router(make_state(5 * 1024 * 1024));
        let response = app
            .oneshot(make_upload_request(
                "file",
                "application/pdf",
                b"not a pdf at all",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = error_body(response).await;
        assert_eq!(body["error"]["code"], "DECODE_ERROR");
    }
}
