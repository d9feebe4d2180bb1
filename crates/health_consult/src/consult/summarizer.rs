use crate::llm::{ChatModel, LlmError};

pub(crate) const SUMMARY_SYSTEM_PROMPT: &str =
    "아래 문장을 건강기능식품 약사 설명처럼 간결하게 요약해줘. 큰따옴표 없이.";

const SUMMARY_TEMPERATURE: f32 = 0.3;

pub async fn summarize_description(model: &dyn ChatModel, raw_text: &str) -> Result<String, LlmError> {
    let reply = model
        .complete(SUMMARY_SYSTEM_PROMPT, raw_text, SUMMARY_TEMPERATURE)
        .await?;
    Ok(reply.trim().replace('"', ""))
}
