//! 언어 모델 호출 추상화
//!
//! 상담 파이프라인은 `ChatModel` 트레이트만 알고, 실제 구현은 OpenAI 호환
//! chat/completions 클라이언트다. 테스트에서는 가짜 구현을 주입한다.

mod openai;

pub use openai::OpenAiChatClient;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("LLM 이 설정되지 않았습니다: {0}")]
    NotConfigured(String),
    #[error("LLM 요청 실패: {0}")]
    Request(#[from] reqwest::Error),
    #[error("LLM API 오류: {status} {body}")]
    Api { status: u16, body: String },
    #[error("LLM 응답이 비어 있습니다")]
    EmptyResponse,
}

/// system + user 두 메시지로 구성된 단발성 대화 완성
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, system: &str, user: &str, temperature: f32) -> Result<String, LlmError>;
}
