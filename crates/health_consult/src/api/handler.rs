use std::sync::Arc;

use axum::extract::{Extension, Json, Path};
use tracing::{error, info};
use utoipa::OpenApi;

use crate::api::error::InnerApiError;
use crate::api::request::ConsultRequest;
use crate::api::response::{ConsultResponse, ConsultationItem, ErrorResponse, MessageResponse};
use crate::api::wrapper::{ApiError, ApiResponse};
use crate::consult::{compose_message, ConsultationResult, ConsultationService, ProductSummary};
use crate::store::{ConsultationStore, DeleteOutcome};

/// 기록 저장 실패 시 응답에 덧붙이는 경고
pub const PERSISTENCE_WARNING: &str = "⚠️ 상담 기록을 저장하지 못했습니다. 이번 상담은 기록 목록에 나타나지 않습니다.";

#[derive(OpenApi)]
#[openapi(
    paths(consult, list_consultations, delete_consultation),
    components(schemas(
        ConsultRequest,
        ConsultResponse,
        ConsultationResult,
        ProductSummary,
        ConsultationItem,
        MessageResponse,
        ErrorResponse
    ))
)]
pub struct ApiDoc;

/// 건강 고민 상담
#[utoipa::path(
    post,
    path = "/consult",
    request_body = ConsultRequest,
    responses(
        (status = 200, body = ConsultResponse),
        (status = 500, body = ErrorResponse),
    )
)]
pub async fn consult(
    Extension(service): Extension<Arc<ConsultationService>>,
    Extension(store): Extension<ConsultationStore>,
    Json(request): Json<ConsultRequest>,
) -> Result<ApiResponse<ConsultResponse>, ApiError> {
    let outcome = service.process_consultation(&request.message).await?;

    let ai_response = compose_message(&outcome.result);
    let mut warnings = outcome.warnings;

    // 기록 저장은 최선 노력: 실패해도 상담 결과는 돌려준다
    match store
        .save(&request.message, &ai_response, outcome.result.prescription())
        .await
    {
        Ok(id) => info!("상담 완료: 기록 id={}", id),
        Err(e) => {
            error!("상담 기록 저장 실패: {}", e);
            warnings.push(PERSISTENCE_WARNING.to_string());
        }
    }

    Ok(ApiResponse::ok(ConsultResponse {
        result: outcome.result,
        warnings,
    }))
}

/// 상담 기록 목록 (최신순)
#[utoipa::path(
    get,
    path = "/consultations",
    responses(
        (status = 200, body = Vec<ConsultationItem>),
    )
)]
pub async fn list_consultations(
    Extension(store): Extension<ConsultationStore>,
) -> Result<ApiResponse<Vec<ConsultationItem>>, ApiError> {
    let items = store.list().await.into_iter().map(ConsultationItem::from).collect();
    Ok(ApiResponse::ok(items))
}

/// 상담 기록 삭제
#[utoipa::path(
    delete,
    path = "/consultations/{id}",
    params(
        ("id" = i32, Path, description = "상담 기록 ID")
    ),
    responses(
        (status = 200, body = MessageResponse),
        (status = 404, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    )
)]
pub async fn delete_consultation(
    Extension(store): Extension<ConsultationStore>,
    Path(id): Path<i32>,
) -> Result<ApiResponse<MessageResponse>, ApiError> {
    match store.delete_by_id(id).await {
        DeleteOutcome::Deleted => Ok(ApiResponse::ok(MessageResponse {
            message: "삭제되었습니다.".to_string(),
        })),
        DeleteOutcome::NotFound => Err(InnerApiError::NotFound(id).into()),
        DeleteOutcome::Failed => Err(InnerApiError::DeleteFailed(id).into()),
    }
}
