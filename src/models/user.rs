use serde::{Deserialize, Serialize};
use validator::Validate;

/// 계정 엔티티 — DB의 `users` 테이블 한 행에 대응합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// 쿠키로 들고 다니는 값이므로 응답 본문에는 싣지 않습니다.
    #[serde(skip_serializing)]
    pub session_id: String,
    pub created_at: String,
}

/// `POST /users/` 요청 본문
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
}
