//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! Rust에서는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 처리합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 HTTP 응답으로 자동 변환
//!
//! 생성(POST) 핸들러도 예외 없이 이 타입을 반환하므로,
//! 내부 에러 객체가 그대로 클라이언트에 노출되는 일이 없습니다.

use axum::{
    http::StatusCode,                   // HTTP 상태 코드 (200, 404, 500 등)
    response::{IntoResponse, Response}, // Axum의 응답 변환 트레이트
    Json,                               // JSON 응답 래퍼
};
use serde_json::json; // json! 매크로: JSON 객체를 간편하게 생성
use thiserror::Error;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 각 에러 variant는 적절한 HTTP 상태 코드와 메시지로 변환됩니다.
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 세션 쿠키가 없거나 어떤 계정과도 일치하지 않음 (HTTP 401)
    #[error("Unauthorized")]
    Unauthenticated,

    /// `GET /users/` 전용 인증 실패 (HTTP 400)
    /// 자기 정보 조회는 401 대신 400으로 응답합니다.
    #[error("Unidentified user!")]
    UnidentifiedUser,

    /// 요청 본문/경로 파라미터가 형식 검사를 통과하지 못함 (HTTP 400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// 요청한 리소스를 찾을 수 없음 (HTTP 404)
    #[error("Not Found!")]
    NotFound,

    /// 이미 같은 이메일로 가입한 계정이 있음 (HTTP 400)
    #[error("User already exists")]
    DuplicateEmail,

    /// 삭제 대상 행이 없음 (HTTP 400)
    /// 삭제는 "없음"과 "실패"를 구분하지 않고 영향받은 행 수로만 판단합니다.
    #[error("Could not delete the meal, please try again")]
    DeleteFailed,

    /// 서버 내부 오류 (HTTP 500)
    #[error("Internal error: {0}")]
    Internal(String),

    /// 데이터베이스 오류 (HTTP 500)
    /// #[from]: sqlx 함수에서 `?`를 쓰면 자동으로 AppError::Database로 변환됩니다.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// 이 에러에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::UnidentifiedUser
            | AppError::Validation(_)
            | AppError::DuplicateEmail
            | AppError::DeleteFailed => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 응답 본문의 `error.code` 값
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthenticated => "unauthorized",
            AppError::UnidentifiedUser => "unidentified_user",
            AppError::Validation(_) => "validation_error",
            AppError::NotFound => "not_found",
            AppError::DuplicateEmail => "duplicate_email",
            AppError::DeleteFailed => "delete_failed",
            AppError::Internal(_) => "internal_error",
            AppError::Database(_) => "database_error",
        }
    }
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 내부 에러(Database, Internal)는 실제 에러 내용을 로그에만 기록하고,
    /// 클라이언트에는 일반적인 메시지만 반환합니다.
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let message = match self {
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal Server Error!".to_string()
            }
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                "Internal Server Error!".to_string()
            }
            AppError::Validation(ref msg) => msg.clone(),
            ref other => other.to_string(),
        };

        // 결과: { "error": { "code": "not_found", "message": "Not Found!" } }
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

/// 특정 컬럼의 UNIQUE 제약 위반인지 확인합니다.
///
/// SQLite는 `UNIQUE constraint failed: users.email`처럼 `테이블.컬럼` 목록을 메시지에 싣습니다.
/// `users`에는 UNIQUE 컬럼이 둘(email, session_id)이라 어느 쪽인지 구분해야 합니다.
pub fn is_unique_violation_on(err: &sqlx::Error, column: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => db_err
            .message()
            .rsplit(": ")
            .next()
            .is_some_and(|columns| columns.split(", ").any(|c| c == column)),
        _ => false,
    }
}
