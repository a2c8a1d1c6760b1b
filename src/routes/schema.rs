//! # 스키마 목록 핸들러
//!
//! `GET /` → `[{ "type": "table", "name": "users", ... }, ...]`
//!
//! `sqlite_schema`의 행을 감싸지 않고 배열 그대로 돌려줍니다. 인증이 필요 없습니다.

use axum::{extract::State, Json};

use crate::{
    db::{self, SchemaEntry},
    error::AppError,
    routes::AppState,
};

pub async fn list_schema(
    State(state): State<AppState>,
) -> Result<Json<Vec<SchemaEntry>>, AppError> {
    let entries = db::list_schema(&state.pool).await?;
    Ok(Json(entries))
}
