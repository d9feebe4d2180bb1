use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{
    extract_keywords, prescription_sentence, summarize_description, ConsultOutcome, ConsultationResult,
    ProductSummary, RegistryFailurePolicy, NO_KEYWORDS_MESSAGE,
};
use crate::config::ConsultConfig;
use crate::llm::{ChatModel, LlmError};
use crate::registry::{ProductRegistry, RegistryLookup};

/// 성분 추출 → 식약처 조회 → 중복 제거 → 요약 으로 이어지는 상담 파이프라인
///
/// 모든 외부 호출은 순차적으로 이루어진다. LLM 오류는 그대로 전파되어 상담 전체를 중단한다.
pub struct ConsultationService {
    model: Arc<dyn ChatModel>,
    registry: Arc<dyn ProductRegistry>,
    config: ConsultConfig,
}

impl ConsultationService {
    pub fn new(model: Arc<dyn ChatModel>, registry: Arc<dyn ProductRegistry>, config: ConsultConfig) -> Self {
        Self {
            model,
            registry,
            config,
        }
    }

    pub async fn process_consultation(&self, message: &str) -> Result<ConsultOutcome, LlmError> {
        let keywords = extract_keywords(self.model.as_ref(), message).await?;
        if keywords.is_empty() {
            info!("추출된 성분이 없습니다");
            return Ok(ConsultOutcome {
                result: ConsultationResult::failure(NO_KEYWORDS_MESSAGE),
                warnings: Vec::new(),
            });
        }
        info!("추출된 성분: {}", keywords.join(", "));

        let mut shown: HashSet<String> = HashSet::new();
        let mut products = Vec::new();
        let mut warnings = Vec::new();

        for keyword in &keywords {
            let candidates = match self.registry.fetch_products_by_ingredient(keyword).await {
                RegistryLookup::Found(candidates) => candidates,
                RegistryLookup::Unavailable(e) => match self.config.registry_failure_policy {
                    RegistryFailurePolicy::SkipKeyword => {
                        warn!("성분 '{}' 조회 실패로 건너뜁니다", keyword);
                        warnings.push(e.to_string());
                        continue;
                    }
                    RegistryFailurePolicy::FailRequest => {
                        warn!("성분 '{}' 조회 실패로 상담을 중단합니다", keyword);
                        return Ok(ConsultOutcome {
                            result: ConsultationResult::failure(e.to_string()),
                            warnings,
                        });
                    }
                },
            };

            let mut count = 0;
            for candidate in candidates {
                if count >= self.config.max_products_per_keyword {
                    break;
                }
                // 기능성 문구가 비어 있어도 이름은 먼저 기록한다
                if !shown.insert(candidate.name.clone()) {
                    continue;
                }
                let claim = normalize_claim(&candidate.functional_claim);
                if claim.is_empty() {
                    debug!("기능성 정보가 없는 품목 제외: {}", candidate.name);
                    continue;
                }

                let short_description = summarize_description(self.model.as_ref(), &claim).await?;
                products.push(ProductSummary {
                    name: candidate.name,
                    short_description,
                });
                count += 1;
            }
            debug!("성분 '{}' 추천 제품 {} 개", keyword, count);
        }

        Ok(ConsultOutcome {
            result: ConsultationResult::Success {
                prescription: prescription_sentence(&keywords),
                products,
            },
            warnings,
        })
    }
}

/// 앞뒤 공백 제거 후 줄바꿈은 공백으로, CR 은 삭제
fn normalize_claim(raw: &str) -> String {
    raw.trim().replace('\n', " ").replace('\r', "")
}
