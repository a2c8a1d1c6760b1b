//! # 식사(Meal) 라우트 핸들러
//!
//! ## 엔드포인트
//! | 메서드 | 경로 | 핸들러 | 성공 |
//! |--------|------|--------|------|
//! | POST | /meals/ | `create_meal` | 201 |
//! | GET | /meals/ | `list_meals` | 200 `{ meals }` |
//! | GET | /meals/metrics | `get_metrics` | 200 통계 |
//! | GET | /meals/:id | `get_meal` | 200 `{ meal }` |
//! | PATCH | /meals/:id | `update_meal` | 204 |
//! | DELETE | /meals/:id | `delete_meal` | 200 `{ message }` |
//!
//! 모든 핸들러는 `SessionUser` 추출기를 거치므로 세션이 없으면 401입니다.
//! 조회/수정/삭제는 소유자 범위로 제한되어, 남의 식사는 없는 것으로 취급됩니다.

use crate::{
    db,
    error::AppError,
    middleware::{SessionUser, ValidatedJson},
    models::*,
    routes::AppState,
    services::{self, MealMetrics},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

/// 경로의 `:id`가 UUID인지 확인하고 정규화된(소문자, 하이픈) 문자열로 돌려줍니다.
fn parse_meal_id(raw: &str) -> Result<String, AppError> {
    uuid::Uuid::parse_str(raw)
        .map(|id| id.to_string())
        .map_err(|_| AppError::Validation(format!("id must be a UUID, got {raw:?}")))
}

/// `POST /meals/` — 식사 기록
pub async fn create_meal(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    ValidatedJson(req): ValidatedJson<CreateMealRequest>,
) -> Result<StatusCode, AppError> {
    let meal = db::create_meal(&state.pool, &user.id, &req).await?;
    tracing::info!(meal_id = %meal.id, user_id = %user.id, "meal created");
    Ok(StatusCode::CREATED)
}

/// `GET /meals/` — 내 식사 목록 (최신 먼저)
pub async fn list_meals(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
) -> Result<Json<Value>, AppError> {
    let meals = db::list_meals_for_user(&state.pool, &user.id).await?;
    Ok(Json(json!({ "meals": meals })))
}

/// `GET /meals/:id`
pub async fn get_meal(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = parse_meal_id(&id)?;
    let meal = db::get_meal_for_user(&state.pool, &user.id, &id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(json!({ "meal": meal })))
}

/// `PATCH /meals/:id` — 부분 수정
///
/// 본문의 각 필드는 값이 있을 때만 반영되고, 누락/`null`이면 기존 값이 유지됩니다.
pub async fn update_meal(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateMealRequest>,
) -> Result<StatusCode, AppError> {
    let id = parse_meal_id(&id)?;
    let existing = db::get_meal_for_user(&state.pool, &user.id, &id)
        .await?
        .ok_or(AppError::NotFound)?;

    let merged = services::merge_meal(existing, req);
    // 조회와 갱신 사이에 삭제되었다면 0행이 갱신됩니다.
    if !db::update_meal(&state.pool, &merged).await? {
        return Err(AppError::NotFound);
    }

    tracing::info!(meal_id = %merged.id, user_id = %user.id, "meal updated");
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /meals/:id`
///
/// 삭제된 행이 없으면 404가 아니라 400(`DeleteFailed`)입니다.
pub async fn delete_meal(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = parse_meal_id(&id)?;
    if !db::delete_meal_for_user(&state.pool, &user.id, &id).await? {
        return Err(AppError::DeleteFailed);
    }

    tracing::info!(meal_id = %id, user_id = %user.id, "meal deleted");
    Ok(Json(json!({ "message": "Meal deleted successfully" })))
}

/// `GET /meals/metrics` — 총 식사 수, 식단 내/외 식사 수, 최장 연속 식단 유지 횟수
pub async fn get_metrics(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
) -> Result<Json<MealMetrics>, AppError> {
    // 네 수치 모두 같은 목록에서 계산하므로 서로 어긋나지 않습니다.
    let meals = db::list_meals_for_user(&state.pool, &user.id).await?;
    Ok(Json(services::aggregate(&meals)))
}
