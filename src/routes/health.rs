//! # 헬스체크(Health Check) 핸들러
//!
//! ## 엔드포인트
//! - `GET /health` → `{ "status": "ok", "database": "ok" }`
//!
//! DB에 `SELECT 1`을 보내 연결 풀이 살아 있는지도 함께 확인합니다.
//! DB가 응답하지 않아도 프로세스 자체는 살아 있으므로 상태 코드는 503으로 구분합니다.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::{db, routes::AppState};

/// `GET /health` — 서버 상태를 확인합니다.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match db::ping(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "database": "ok" })),
        ),
        Err(e) => {
            tracing::warn!("Health check database ping failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "degraded", "database": "unavailable" })),
            )
        }
    }
}
