use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::api::error::InnerApiError;
use crate::api::response::ErrorResponse;

const INTERNAL_ERROR_MESSAGE: &str = "서버 내부 오류가 발생했습니다.";

/// 성공 응답. 본문은 데이터 자체를 JSON 으로 직렬화한다.
pub struct ApiResponse<T: Serialize> {
    status_code: StatusCode,
    data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status_code: StatusCode::OK,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status_code, Json(self.data)).into_response()
    }
}

/// 핸들러 오류. `InnerApiError` 는 상태 코드에 대응되고 나머지는 500 으로 처리한다.
pub struct ApiError(anyhow::Error);

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(value: E) -> Self {
        Self(value.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0.downcast_ref::<InnerApiError>() {
            Some(inner @ InnerApiError::NotFound(id)) => {
                debug!("상담 기록 없음: id={}", id);
                (StatusCode::NOT_FOUND, inner.to_string())
            }
            Some(inner @ InnerApiError::DeleteFailed(id)) => {
                warn!("상담 기록 삭제 요청 실패: id={}", id);
                (StatusCode::INTERNAL_SERVER_ERROR, inner.to_string())
            }
            None => {
                error!("요청 처리 중 오류: {:#}", self.0);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE.to_string())
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
