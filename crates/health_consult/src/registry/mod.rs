//! 식품안전나라(식약처) 건강기능식품 품목 조회
//!
//! API 는 성분 검색을 지원하지 않으므로 고정된 페이지 구간(1~100)을 통째로
//! 받아 원재료명/주된 기능성 필드에 대해 클라이언트 측에서 부분 문자열 필터링한다.

mod error;

pub use error::RegistryError;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::RegistryConfig;

/// 식약처 응답의 품목 한 건
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ProductCandidate {
    /// 품목명
    #[serde(rename = "PRDLST_NM", default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// 원재료명
    #[serde(rename = "RAWMTRL_NM", default, deserialize_with = "null_as_empty")]
    pub raw_material: String,
    /// 주된 기능성
    #[serde(rename = "PRIMARY_FNCLTY", default, deserialize_with = "null_as_empty")]
    pub functional_claim: String,
}

// 식약처 응답은 빈 값을 null 로 주기도 한다
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// 조회 결과. 실패는 후보 목록과 섞이지 않도록 별도 변형으로 돌려준다.
#[derive(Clone, Debug)]
pub enum RegistryLookup {
    Found(Vec<ProductCandidate>),
    Unavailable(RegistryError),
}

#[async_trait]
pub trait ProductRegistry: Send + Sync {
    async fn fetch_products_by_ingredient(&self, ingredient: &str) -> RegistryLookup;
}

pub struct RegistryClient {
    client: Client,
    config: RegistryConfig,
}

impl RegistryClient {
    pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(RegistryError::from)?;

        Ok(Self { client, config })
    }

    /// `{base}/{key}/{service}/{format}/{start}/{end}`
    fn page_url(&self) -> String {
        let c = &self.config;
        format!(
            "{}/{}/{}/{}/{}/{}",
            c.base_url.trim_end_matches('/'),
            c.api_key,
            c.service,
            c.format,
            c.start,
            c.end
        )
    }

    async fn fetch_page(&self) -> Result<Value, RegistryError> {
        let body = self
            .client
            .get(self.page_url())
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(body)
    }
}

#[async_trait]
impl ProductRegistry for RegistryClient {
    async fn fetch_products_by_ingredient(&self, ingredient: &str) -> RegistryLookup {
        match self.fetch_page().await {
            Ok(body) => {
                let products = filter_products(&body, &self.config.service, ingredient);
                debug!("식약처 조회 완료: 성분 '{}' → {} 건", ingredient, products.len());
                RegistryLookup::Found(products)
            }
            Err(e) => {
                warn!("식약처 조회 실패: 성분 '{}' - {}", ingredient, e);
                RegistryLookup::Unavailable(e)
            }
        }
    }
}

/// `{service}.row` 의 품목 중 원재료명 또는 주된 기능성에 `ingredient` 가 포함된 것만 남긴다.
///
/// 봉투나 `row` 키가 없으면 빈 목록. 형식이 맞지 않는 행은 건너뛴다.
pub fn filter_products(body: &Value, service: &str, ingredient: &str) -> Vec<ProductCandidate> {
    let Some(rows) = body
        .get(service)
        .and_then(|envelope| envelope.get("row"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    rows.iter()
        .filter_map(|row| match ProductCandidate::deserialize(row) {
            Ok(product) => Some(product),
            Err(e) => {
                debug!("형식이 맞지 않는 품목 행을 건너뜁니다: {}", e);
                None
            }
        })
        .filter(|p| p.raw_material.contains(ingredient) || p.functional_claim.contains(ingredient))
        .collect()
}
