use crate::llm::{ChatModel, LlmError};

pub(crate) const EXTRACTION_SYSTEM_PROMPT: &str = "너는 약사야. 사용자 건강 고민에서 건강기능식품 성분만 콤마로 구분해서 추출해줘.\n\
없다면 추출하지 마.\n\
예시 입력: '요즘 눈이 침침해요' => '루테인, 아스타잔틴'";

const EXTRACTION_TEMPERATURE: f32 = 0.3;

/// 사용자 고민에서 건강기능식품 성분 키워드를 추출한다. 빈 목록이면 추천할 성분이 없다는 뜻.
pub async fn extract_keywords(model: &dyn ChatModel, user_input: &str) -> Result<Vec<String>, LlmError> {
    let reply = model
        .complete(EXTRACTION_SYSTEM_PROMPT, user_input, EXTRACTION_TEMPERATURE)
        .await?;
    Ok(parse_keywords(&reply))
}

/// 콤마로 나누고 공백 제거, 빈 조각은 버린다. 중복은 그대로 둔다.
fn parse_keywords(reply: &str) -> Vec<String> {
    reply
        .split(',')
        .map(str::trim)
        .filter(|kw| !kw.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_keywords("루테인, 아스타잔틴"), vec!["루테인", "아스타잔틴"]);
        assert_eq!(parse_keywords(" 오메가3 ,, 비타민D , "), vec!["오메가3", "비타민D"]);
        assert_eq!(parse_keywords("루테인,루테인"), vec!["루테인", "루테인"]);
    }

    #[test]
    fn test_parse_empty_reply() {
        assert!(parse_keywords("").is_empty());
        assert!(parse_keywords("  \n ").is_empty());
        assert!(parse_keywords(" , , ").is_empty());
    }
}
