use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct ConsultRequest {
    /// 사용자의 건강 고민 (자유 텍스트)
    pub message: String,
}
