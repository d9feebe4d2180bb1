use thiserror::Error;

#[derive(Error, Debug)]
pub enum InnerApiError {
    #[error("해당 상담 기록을 찾을 수 없습니다.")]
    NotFound(i32),
    #[error("삭제 중 오류가 발생했습니다.")]
    DeleteFailed(i32),
}
