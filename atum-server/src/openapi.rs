//! OpenAPI document for the Atum server.

use utoipa::OpenApi;

use atum_core::{
    CodeGenerationRequest, CodeGenerationResponse, GenerateDocsRequest, GenerateDocsResponse,
    GenerateTestsRequest, GenerateTestsResponse, Grade, MetricResult, QualityReport,
    QualityReportRequest,
};

use crate::routes::{ErrorResponse, StatusResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::generate,
        crate::routes::generate_unit_tests,
        crate::routes::generate_documentation,
        crate::routes::quality_report,
        crate::routes::openapi_json
    ),
    components(
        schemas(
            StatusResponse,
            ErrorResponse,
            CodeGenerationRequest,
            CodeGenerationResponse,
            GenerateTestsRequest,
            GenerateTestsResponse,
            GenerateDocsRequest,
            GenerateDocsResponse,
            QualityReportRequest,
            QualityReport,
            MetricResult,
            Grade
        )
    ),
    tags(
        (name = "generation", description = "LLM-backed generation"),
        (name = "quality", description = "Static quality scoring"),
        (name = "system", description = "System endpoints")
    )
)]
/// OpenAPI document for the Atum server.
pub struct ApiDoc;
