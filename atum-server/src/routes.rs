//! HTTP handlers for the Atum server.

use actix_web::{HttpResponse, Responder, get, post, web};
use atum_core::{
    CodeGenerationRequest, CodeGenerationResponse, GenerateDocsRequest, GenerateDocsResponse,
    GenerateTestsRequest, GenerateTestsResponse, QualityReport, QualityReportRequest,
    generate_quality_report,
};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::llm::LlmService;
use crate::openapi::ApiDoc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend.
    pub llm: LlmService,
}

/// Liveness payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    /// Human-readable status.
    pub status: String,
}

/// Error response payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub message: String,
}

fn task_failed(operation: &str, err: impl std::fmt::Display) -> HttpResponse {
    log::error!("{operation} task failed: {err}");
    HttpResponse::InternalServerError().json(ErrorResponse {
        message: format!("{operation} task failed: {err}"),
    })
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Backend is up", body = StatusResponse)
    ),
    tag = "system"
)]
#[get("/")]
/// Report that the backend is running.
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(StatusResponse {
        status: "Backend is running".to_string(),
    })
}

#[utoipa::path(
    post,
    path = "/generate",
    request_body = CodeGenerationRequest,
    responses(
        (status = 200, description = "Generated code or validation notes", body = CodeGenerationResponse),
        (status = 500, description = "Generation task failed", body = ErrorResponse)
    ),
    tag = "generation"
)]
#[post("/generate")]
/// Generate source code from a natural-language request.
pub async fn generate(
    state: web::Data<AppState>,
    payload: web::Json<CodeGenerationRequest>,
) -> impl Responder {
    let request = payload.into_inner();
    let llm = state.llm.clone();
    match web::block(move || llm.generate_code(&request)).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => task_failed("code generation", err),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/generate-tests",
    request_body = GenerateTestsRequest,
    responses(
        (status = 200, description = "Generated tests or validation notes", body = GenerateTestsResponse),
        (status = 500, description = "Generation task failed", body = ErrorResponse)
    ),
    tag = "generation"
)]
#[post("/api/v1/generate-tests")]
/// Generate unit tests for a code snippet.
pub async fn generate_unit_tests(
    state: web::Data<AppState>,
    payload: web::Json<GenerateTestsRequest>,
) -> impl Responder {
    let request = payload.into_inner();
    let llm = state.llm.clone();
    match web::block(move || llm.generate_tests(&request)).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => task_failed("test generation", err),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/generate-docs",
    request_body = GenerateDocsRequest,
    responses(
        (status = 200, description = "Generated documentation or validation notes", body = GenerateDocsResponse),
        (status = 500, description = "Generation task failed", body = ErrorResponse)
    ),
    tag = "generation"
)]
#[post("/api/v1/generate-docs")]
/// Generate Markdown documentation for a code snippet.
pub async fn generate_documentation(
    state: web::Data<AppState>,
    payload: web::Json<GenerateDocsRequest>,
) -> impl Responder {
    let request = payload.into_inner();
    let llm = state.llm.clone();
    match web::block(move || llm.generate_docs(&request)).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => task_failed("documentation generation", err),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/quality-report",
    request_body = QualityReportRequest,
    responses(
        (status = 200, description = "Quality report", body = QualityReport)
    ),
    tag = "quality"
)]
#[post("/api/v1/quality-report")]
/// Score a code snippet without contacting the generation backend.
pub async fn quality_report(payload: web::Json<QualityReportRequest>) -> impl Responder {
    HttpResponse::Ok().json(generate_quality_report(&payload))
}

#[utoipa::path(
    get,
    path = "/api/openapi.json",
    responses(
        (status = 200, description = "OpenAPI document", body = serde_json::Value)
    ),
    tag = "system"
)]
#[get("/api/openapi.json")]
/// Serve the OpenAPI document.
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
