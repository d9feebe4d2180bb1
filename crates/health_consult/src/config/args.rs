use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::consult::RegistryFailurePolicy;

#[derive(Parser, Debug)]
#[command(name = "health-consult", version, about, long_about = None)]
pub struct Args {
    /// HTTP 서버 바인드 주소
    #[arg(long, env = "HEALTH_CONSULT_BIND", default_value = "0.0.0.0:8000")]
    pub bind_address: SocketAddr,

    #[arg(long, env = "HEALTH_CONSULT_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// SQLite 파일 경로 (기본값: 설정 디렉터리의 consultation.sqlite)
    #[arg(long, env = "HEALTH_CONSULT_DATABASE")]
    pub database: Option<PathBuf>,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub openai_base_url: String,

    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4")]
    pub model: String,

    /// LLM 요청 타임아웃(초), 지정하지 않으면 무제한
    #[arg(long, env = "OPENAI_TIMEOUT_SECONDS")]
    pub llm_timeout_seconds: Option<u64>,

    #[arg(
        long,
        env = "FOOD_SAFETY_BASE_URL",
        default_value = "http://openapi.foodsafetykorea.go.kr/api"
    )]
    pub registry_base_url: String,

    /// 식품안전나라 오픈 API 인증키
    #[arg(long, env = "FOOD_SAFETY_API_KEY", default_value = "sample", hide_env_values = true)]
    pub registry_api_key: String,

    /// 식약처 API 호출 실패 시 처리 방식
    #[arg(long, value_enum, default_value_t = RegistryFailurePolicy::SkipKeyword)]
    pub registry_failure_policy: RegistryFailurePolicy,

    #[arg(long, default_value_t = 5)]
    pub max_products_per_keyword: usize,

    /// 서버 기동 후 기본 브라우저로 접속
    #[arg(long)]
    pub open_browser: bool,
}
