//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `health`: 서버/DB 상태 확인
//! - `meals`: 식사 CRUD 및 통계
//! - `schema`: DB 스키마 목록 (`GET /`)
//! - `users`: 가입과 내 정보 조회

pub mod health;
pub mod meals;
pub mod schema;
pub mod users;

pub use health::*;
pub use meals::*;
pub use schema::*;
pub use users::*;

use sqlx::SqlitePool;

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// `main`(또는 테스트)이 명시적으로 만들어 라우터에 주입합니다.
#[derive(Clone)]
pub struct AppState {
    /// SQLite 연결 풀 (내부적으로 Arc로 공유)
    pub pool: SqlitePool,
    /// 새로 발급하는 `sessionId` 쿠키의 유효 기간 (일)
    pub session_max_age_days: i64,
}
