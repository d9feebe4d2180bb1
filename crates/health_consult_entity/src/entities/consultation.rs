use sea_orm::entity::prelude::*;

/// 상담 기록 실체
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "consultation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub user_message: String,
    #[sea_orm(column_type = "Text")]
    pub ai_response: String,
    /// 성분 추출에 실패한 상담은 None
    #[sea_orm(column_type = "Text", nullable)]
    pub prescription: Option<String>,
    /// UTC+9 고정 오프셋의 RFC 3339 문자열
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
