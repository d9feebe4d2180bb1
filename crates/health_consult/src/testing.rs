//! 단위 테스트용 가짜 LLM / 식약처 클라이언트

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::consult::{EXTRACTION_SYSTEM_PROMPT, SUMMARY_SYSTEM_PROMPT};
use crate::llm::{ChatModel, LlmError};
use crate::registry::{ProductCandidate, ProductRegistry, RegistryLookup};

/// 성분 추출에는 고정 응답을, 요약에는 `"{원문}" 요약` 형태의 응답을 돌려준다.
#[derive(Default)]
pub struct FakeChatModel {
    keywords_reply: String,
    fail_summaries: bool,
    pub extract_calls: AtomicUsize,
    pub summarized: Mutex<Vec<String>>,
}

impl FakeChatModel {
    pub fn with_keywords(reply: &str) -> Self {
        Self {
            keywords_reply: reply.to_string(),
            ..Default::default()
        }
    }

    pub fn failing_summaries(mut self) -> Self {
        self.fail_summaries = true;
        self
    }

    pub fn summary_calls(&self) -> usize {
        self.summarized.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatModel for FakeChatModel {
    async fn complete(&self, system: &str, user: &str, _temperature: f32) -> Result<String, LlmError> {
        if system == EXTRACTION_SYSTEM_PROMPT {
            self.extract_calls.fetch_add(1, Ordering::SeqCst);
            return Ok(self.keywords_reply.clone());
        }
        assert_eq!(system, SUMMARY_SYSTEM_PROMPT, "알 수 없는 프롬프트");
        if self.fail_summaries {
            return Err(LlmError::Api {
                status: 429,
                body: "rate limited".to_string(),
            });
        }
        self.summarized.lock().unwrap().push(user.to_string());
        Ok(format!("  \"{}\" 요약  ", user))
    }
}

#[derive(Default)]
pub struct FakeRegistry {
    lookups: HashMap<String, RegistryLookup>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeRegistry {
    pub fn with(mut self, ingredient: &str, lookup: RegistryLookup) -> Self {
        self.lookups.insert(ingredient.to_string(), lookup);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ProductRegistry for FakeRegistry {
    async fn fetch_products_by_ingredient(&self, ingredient: &str) -> RegistryLookup {
        self.calls.lock().unwrap().push(ingredient.to_string());
        self.lookups
            .get(ingredient)
            .cloned()
            .unwrap_or_else(|| RegistryLookup::Found(Vec::new()))
    }
}

pub fn product(name: &str, claim: &str) -> ProductCandidate {
    ProductCandidate {
        name: name.to_string(),
        raw_material: String::new(),
        functional_claim: claim.to_string(),
    }
}
