use thiserror::Error;

/// 식약처 API 호출 실패. 표시 문자열은 그대로 사용자에게 보여 줄 안내 문구다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("⚠️ 식약처 서버 응답이 느립니다. 잠시 후 다시 시도해 주세요.")]
    Timeout,
    #[error("⚠️ API 호출 중 오류 발생: {0}")]
    Request(String),
}

// 요청 URL 에 인증키가 들어 있으므로 메시지에서 URL 을 뺀다
impl From<reqwest::Error> for RegistryError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RegistryError::Timeout
        } else {
            RegistryError::Request(e.without_url().to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_user_facing_warning() {
        assert_eq!(
            RegistryError::Timeout.to_string(),
            "⚠️ 식약처 서버 응답이 느립니다. 잠시 후 다시 시도해 주세요."
        );
        assert_eq!(
            RegistryError::Request("500 Internal Server Error".to_string()).to_string(),
            "⚠️ API 호출 중 오류 발생: 500 Internal Server Error"
        );
    }
}
