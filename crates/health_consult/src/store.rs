use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use tracing::{debug, error, info};

use crate::utils::time_format::{now_standard_string, parse_standard_string};
use health_consult_entity::consultation;

const SUMMARY_PREVIEW_CHARS: usize = 50;

/// 저장된 상담 기록
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsultationRecord {
    pub id: i32,
    pub user_message: String,
    pub ai_response: String,
    pub prescription: Option<String>,
    pub created_at: String,
}

impl From<consultation::Model> for ConsultationRecord {
    fn from(model: consultation::Model) -> Self {
        Self {
            id: model.id,
            user_message: model.user_message,
            ai_response: model.ai_response,
            prescription: model.prescription,
            created_at: model.created_at,
        }
    }
}

impl ConsultationRecord {
    /// `YYYY-MM-DD` (KST)
    pub fn date(&self) -> String {
        parse_standard_string(&self.created_at)
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// `HH:MM` (KST)
    pub fn time(&self) -> String {
        parse_standard_string(&self.created_at)
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }

    /// 처방 문장이 있으면 그대로, 없으면 사용자 메시지 앞 50자 + "..."
    pub fn summary(&self) -> String {
        match self.prescription.as_deref() {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => {
                let preview: String = self.user_message.chars().take(SUMMARY_PREVIEW_CHARS).collect();
                format!("{}...", preview)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    Failed,
}

/// 상담 기록 저장소
#[derive(Clone)]
pub struct ConsultationStore {
    db: DatabaseConnection,
}

impl ConsultationStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// 기록을 하나 추가하고 새 id 를 돌려준다. 생성 시각은 저장 시점의 KST.
    pub async fn save(&self, user_message: &str, ai_response: &str, prescription: Option<&str>) -> Result<i32, DbErr> {
        let record = consultation::ActiveModel {
            user_message: Set(user_message.to_string()),
            ai_response: Set(ai_response.to_string()),
            prescription: Set(prescription.map(str::to_string)),
            created_at: Set(now_standard_string()),
            ..Default::default()
        };

        let saved = record.insert(&self.db).await?;
        debug!("상담 기록 저장: id={}", saved.id);
        Ok(saved.id)
    }

    /// 최신순 목록. 조회 실패 시 빈 목록.
    pub async fn list(&self) -> Vec<ConsultationRecord> {
        match self.try_list().await {
            Ok(records) => records,
            Err(e) => {
                error!("상담 기록 조회 실패: {}", e);
                Vec::new()
            }
        }
    }

    async fn try_list(&self) -> Result<Vec<ConsultationRecord>, DbErr> {
        let records = consultation::Entity::find()
            .order_by_desc(consultation::Column::CreatedAt)
            .order_by_desc(consultation::Column::Id)
            .all(&self.db)
            .await?;
        Ok(records.into_iter().map(ConsultationRecord::from).collect())
    }

    pub async fn delete_by_id(&self, id: i32) -> DeleteOutcome {
        match self.try_delete_by_id(id).await {
            Ok(true) => {
                info!("상담 기록 삭제: id={}", id);
                DeleteOutcome::Deleted
            }
            Ok(false) => DeleteOutcome::NotFound,
            Err(e) => {
                error!("상담 기록 삭제 실패: id={} - {}", id, e);
                DeleteOutcome::Failed
            }
        }
    }

    async fn try_delete_by_id(&self, id: i32) -> Result<bool, DbErr> {
        let result = consultation::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
