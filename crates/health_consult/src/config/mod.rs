mod args;

use std::net::SocketAddr;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub use args::Args;

use crate::consult::RegistryFailurePolicy;

/// 기본 설정 디렉터리 (`~/.config/health-consult` 등)
pub static CONFIG_DIR: Lazy<PathBuf> = Lazy::new(|| {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("health-consult")
});

pub const DEFAULT_DATABASE_FILE: &str = "consultation.sqlite";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub registry: RegistryConfig,
    pub consult: ConsultConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub database_path: PathBuf,
    pub open_browser: bool,
}

/// OpenAI 호환 chat/completions 설정
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LlmConfig {
    pub base_url: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub model: String,
    /// None 이면 타임아웃 없이 응답을 기다린다
    pub timeout_seconds: Option<u64>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: None,
            model: "gpt-4".to_string(),
            timeout_seconds: None,
        }
    }
}

/// 식품안전나라 오픈 API 설정
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub base_url: String,
    #[serde(skip_serializing, default)]
    pub api_key: String,
    pub service: String,
    pub format: String,
    pub start: u32,
    pub end: u32,
    pub timeout_seconds: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: "http://openapi.foodsafetykorea.go.kr/api".to_string(),
            api_key: "sample".to_string(),
            service: "C003".to_string(),
            format: "json".to_string(),
            start: 1,
            end: 100,
            timeout_seconds: 20,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConsultConfig {
    /// 성분 하나당 추천할 최대 제품 수
    pub max_products_per_keyword: usize,
    pub registry_failure_policy: RegistryFailurePolicy,
}

impl Default for ConsultConfig {
    fn default() -> Self {
        Self {
            max_products_per_keyword: 5,
            registry_failure_policy: RegistryFailurePolicy::SkipKeyword,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let registry_defaults = RegistryConfig::default();
        Self {
            server: ServerConfig {
                bind_address: args.bind_address,
                database_path: args
                    .database
                    .unwrap_or_else(|| CONFIG_DIR.join(DEFAULT_DATABASE_FILE)),
                open_browser: args.open_browser,
            },
            llm: LlmConfig {
                base_url: args.openai_base_url,
                api_key: args.openai_api_key.filter(|key| !key.trim().is_empty()),
                model: args.model,
                timeout_seconds: args.llm_timeout_seconds,
            },
            registry: RegistryConfig {
                base_url: args.registry_base_url,
                api_key: args.registry_api_key,
                ..registry_defaults
            },
            consult: ConsultConfig {
                max_products_per_keyword: args.max_products_per_keyword,
                registry_failure_policy: args.registry_failure_policy,
            },
        }
    }
}
