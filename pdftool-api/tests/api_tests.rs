//! Unit and integration tests for pdftool-api

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use pdftool::test_helpers::{create_pdf_without_form, create_w8ben_form_pdf};
use pdftool::{FileSystemLoader, FormFieldService, MemoryLoader};
use pdftool_api::{app, ErrorResponse, MappingEntry};
use serde_json::json;
use tower::util::ServiceExt;

fn memory_app() -> Router {
    let loader = MemoryLoader::new()
        .with_resource("forms/fw8ben.pdf", create_w8ben_form_pdf())
        .with_resource("forms/plain.pdf", create_pdf_without_form())
        .with_resource("forms/garbage.pdf", b"garbage".to_vec());
    app(FormFieldService::new(loader))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use axum::response::IntoResponse;
    use pdftool::PdfToolError;
    use pdftool_api::AppError;

    #[test]
    fn test_error_response_serialization() {
        let error = ErrorResponse {
            error: "Test error message".to_string(),
        };

        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["error"], "Test error message");
    }

    #[test]
    fn test_source_not_found_is_internal_error() {
        let app_error: AppError = PdfToolError::SourceNotFound("x.pdf".to_string()).into();
        assert_eq!(app_error.to_string(), "Invalid source path: x.pdf");

        let response = app_error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_parse_error_is_internal_error() {
        let app_error: AppError = PdfToolError::Parse("bad xref".to_string()).into();

        let response = app_error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_mapping_entry_serialization() {
        let entry = MappingEntry {
            form_field_name: "topmostSubform[0].Page1[0].f_1[0]".to_string(),
            api_name: "name".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({ "formFieldName": "topmostSubform[0].Page1[0].f_1[0]", "apiName": "name" })
        );
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_health_check_endpoint() {
        let (status, json) = get_json(memory_app(), "/api/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "pdftool API");
        assert!(json["version"].is_string());
    }

    #[tokio::test]
    async fn test_form_fields_endpoint() {
        let (status, json) =
            get_json(memory_app(), "/api/form-fields?source=forms/fw8ben.pdf").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_object().unwrap().len(), 7);
        assert_eq!(
            json["topmostSubform[0].Page1[0].f_1[0]"],
            json!({ "name": "name", "type": "TEXT", "value": "Jan Novak" })
        );
        assert_eq!(
            json["topmostSubform[0].Page1[0].c1_01[0]"],
            json!({ "name": "ftinNotLegallyRequired", "type": "CHECKBOX", "checked": true })
        );
        assert_eq!(
            json["topmostSubform[0]"],
            json!({ "name": "topmostSubform[0]", "type": "OTHER" })
        );
    }

    #[tokio::test]
    async fn test_form_fields_without_form() {
        let (status, json) =
            get_json(memory_app(), "/api/form-fields?source=forms/plain.pdf").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({}));
    }

    #[tokio::test]
    async fn test_missing_source_is_500() {
        let (status, json) =
            get_json(memory_app(), "/api/form-fields?source=forms/missing.pdf").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Invalid source path: forms/missing.pdf");
    }

    #[tokio::test]
    async fn test_unparseable_source_is_500() {
        let (status, json) =
            get_json(memory_app(), "/api/form-fields?source=forms/garbage.pdf").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["error"].as_str().unwrap().starts_with("Error processing PDF"));
    }

    #[tokio::test]
    async fn test_missing_query_parameter() {
        let response = memory_app()
            .oneshot(
                Request::builder()
                    .uri("/api/form-fields")
                    .method("GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_file_system_loader_app() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("forms")).unwrap();
        std::fs::write(dir.path().join("forms/fw8ben.pdf"), create_w8ben_form_pdf()).unwrap();
        let app = app(FormFieldService::new(FileSystemLoader::new(dir.path())));

        let (status, json) =
            get_json(app.clone(), "/api/form-fields?source=forms/fw8ben.pdf").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_object().unwrap().len(), 7);

        let (status, _) = get_json(app, "/api/form-fields?source=../fw8ben.pdf").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_mappings_endpoint() {
        let (status, json) = get_json(memory_app(), "/api/mappings").await;

        assert_eq!(status, StatusCode::OK);
        let entries: Vec<MappingEntry> = serde_json::from_value(json).unwrap();
        assert_eq!(entries.len(), pdftool::forms::field_mappings().len());
        assert_eq!(
            entries[0],
            MappingEntry {
                form_field_name: "topmostSubform[0].Page1[0].f_1[0]".to_string(),
                api_name: "name".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_upload_endpoint() {
        let boundary = "pdftoolboundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"fw8ben.pdf\"\r\nContent-Type: application/pdf\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(&create_w8ben_form_pdf());
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        let response = memory_app()
            .oneshot(
                Request::builder()
                    .uri("/api/form-fields/upload")
                    .method("POST")
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["topmostSubform[0].Page1[0].f_1[0]"]["name"], "name");
    }

    #[tokio::test]
    async fn test_upload_without_file_is_500() {
        let boundary = "pdftoolboundary";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nhello\r\n--{boundary}--\r\n"
        );

        let response = memory_app()
            .oneshot(
                Request::builder()
                    .uri("/api/form-fields/upload")
                    .method("POST")
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "No file provided in upload");
    }
}
