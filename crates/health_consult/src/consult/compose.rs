use super::ConsultationResult;

/// 상담 기록에 저장할 사람이 읽는 응답 문장을 만든다.
///
/// 모델이 만든 요약은 손대지 않고 그대로 싣는다.
pub fn compose_message(result: &ConsultationResult) -> String {
    match result {
        ConsultationResult::Failure { result } => result.clone(),
        ConsultationResult::Success {
            prescription,
            products,
        } => {
            let product_text: String = products
                .iter()
                .map(|p| format!("● {}\n{}\n\n", p.name, p.short_description))
                .collect();
            format!("{}\n\n{}", prescription, product_text.trim())
        }
    }
}
