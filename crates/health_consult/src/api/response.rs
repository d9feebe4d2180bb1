use serde::Serialize;
use utoipa::ToSchema;

use crate::consult::ConsultationResult;
use crate::store::ConsultationRecord;

#[derive(Serialize, ToSchema)]
pub struct ConsultResponse {
    #[serde(flatten)]
    pub result: ConsultationResult,
    /// 건너뛴 식약처 조회, 기록 저장 실패 등 치명적이지 않은 경고
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationItem {
    pub id: i32,
    pub date: String,
    pub time: String,
    pub user_message: String,
    pub ai_response: String,
    pub summary: String,
}

impl From<ConsultationRecord> for ConsultationItem {
    fn from(record: ConsultationRecord) -> Self {
        Self {
            id: record.id,
            date: record.date(),
            time: record.time(),
            summary: record.summary(),
            user_message: record.user_message,
            ai_response: record.ai_response,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
