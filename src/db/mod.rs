//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈의 함수를 호출하여 DB 작업을 수행합니다.
//! 연결 풀은 `main`에서 만들어 `AppState`로 주입되며, 전역 핸들은 없습니다.
//!
//! 각 하위 모듈:
//! - `meals`: 식사 CRUD 쿼리 (항상 소유자 ID로 범위를 제한)
//! - `schema`: `sqlite_schema` 조회
//! - `users`: 계정 생성 및 세션/이메일 조회

pub mod meals;
pub mod schema;
pub mod users;

pub use meals::*;
pub use schema::*;

use sqlx::{migrate::MigrateError, SqlitePool};

/// `./migrations`의 SQL 파일을 순서대로 적용합니다.
///
/// `sqlx::migrate!`는 컴파일 타임에 마이그레이션 파일을 바이너리에 포함시킵니다.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
