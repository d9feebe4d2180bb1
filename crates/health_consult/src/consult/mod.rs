mod compose;
mod extractor;
mod orchestrator;
mod summarizer;

pub use compose::compose_message;
pub use extractor::extract_keywords;
pub use orchestrator::ConsultationService;
pub use summarizer::summarize_description;

#[cfg(test)]
pub(crate) use extractor::EXTRACTION_SYSTEM_PROMPT;
#[cfg(test)]
pub(crate) use summarizer::SUMMARY_SYSTEM_PROMPT;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 성분이 하나도 추출되지 않았을 때의 안내 문구
pub const NO_KEYWORDS_MESSAGE: &str = "😥 유의미한 건강기능식품 성분이 추출되지 않았습니다.";

/// 추천 제품 요약
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductSummary {
    pub name: String,
    #[serde(rename = "desc")]
    pub short_description: String,
}

/// 상담 결과. JSON 에서는 `result` 또는 `prescription` 필드 유무로 구분된다.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ConsultationResult {
    Success {
        prescription: String,
        products: Vec<ProductSummary>,
    },
    Failure {
        result: String,
    },
}

impl ConsultationResult {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            result: message.into(),
        }
    }

    pub fn prescription(&self) -> Option<&str> {
        match self {
            Self::Success { prescription, .. } => Some(prescription),
            Self::Failure { .. } => None,
        }
    }
}

/// 상담 결과와 처리 중 발생한 치명적이지 않은 경고
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsultOutcome {
    pub result: ConsultationResult,
    pub warnings: Vec<String>,
}

/// 식약처 조회 실패 시 처리 방식
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RegistryFailurePolicy {
    /// 해당 성분만 건너뛰고 경고를 남긴다
    #[default]
    SkipKeyword,
    /// 상담 전체를 실패 결과로 돌려준다
    FailRequest,
}

/// "루테인, 아스타잔틴 등의 영양성분의 섭취가 필요해요."
pub fn prescription_sentence(keywords: &[String]) -> String {
    format!("{} 등의 영양성분의 섭취가 필요해요.", keywords.join(", "))
}
