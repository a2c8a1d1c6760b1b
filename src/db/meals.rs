//! # 식사 데이터베이스 쿼리 모듈
//!
//! `meals` 테이블에 대한 CRUD 쿼리 함수들입니다.
//! 생성 이외의 모든 쿼리는 `user_id`로 범위를 제한하므로,
//! 다른 사용자의 식사는 "존재하지 않는 것"처럼 보입니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

/// 새 식사를 저장하고 저장된 행을 반환합니다.
///
/// ID는 UUIDv7으로 생성합니다 (시간순 정렬 가능).
pub async fn create_meal(
    pool: &SqlitePool,
    user_id: &str,
    req: &CreateMealRequest,
) -> Result<Meal, AppError> {
    let id = uuid::Uuid::now_v7().to_string();

    sqlx::query(
        r#"
        INSERT INTO meals (id, user_id, name, description, is_on_diet, date)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(user_id)
    .bind(&req.name)
    .bind(&req.description)
    .bind(req.is_on_diet)
    .bind(req.date.0)
    .execute(pool)
    .await?;

    get_meal_for_user(pool, user_id, &id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created meal".to_string()))
}

/// 사용자의 모든 식사를 식사 시각 내림차순(최신 먼저)으로 조회합니다.
///
/// 통계 계산의 연속 기록은 이 정렬 순서를 그대로 사용합니다.
/// 같은 시각의 식사는 생성 순서(UUIDv7)로 순서를 고정합니다.
pub async fn list_meals_for_user(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<Meal>, AppError> {
    let meals = sqlx::query_as::<_, Meal>(
        r#"
        SELECT id, user_id, name, description, is_on_diet, date, created_at
        FROM meals
        WHERE user_id = ?
        ORDER BY date DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(meals)
}

/// 사용자가 소유한 식사 하나를 조회합니다.
///
/// - `Ok(Some(Meal))`: 찾음
/// - `Ok(None)`: 없거나 다른 사용자의 식사
pub async fn get_meal_for_user(
    pool: &SqlitePool,
    user_id: &str,
    id: &str,
) -> Result<Option<Meal>, AppError> {
    let meal = sqlx::query_as::<_, Meal>(
        r#"
        SELECT id, user_id, name, description, is_on_diet, date, created_at
        FROM meals
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(meal)
}

/// 병합이 끝난 식사 레코드로 변경 가능한 컬럼을 덮어씁니다.
///
/// `id`, `user_id`, `created_at`은 갱신하지 않습니다.
/// 반환값은 영향받은 행이 있었는지 여부입니다.
pub async fn update_meal(pool: &SqlitePool, meal: &Meal) -> Result<bool, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE meals
        SET name = ?, description = ?, is_on_diet = ?, date = ?
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(&meal.name)
    .bind(&meal.description)
    .bind(meal.is_on_diet)
    .bind(meal.date)
    .bind(&meal.id)
    .bind(&meal.user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// 사용자가 소유한 식사를 삭제합니다.
///
/// - `true`: 삭제됨
/// - `false`: 삭제된 행 없음 (없는 ID이거나 다른 사용자의 식사)
pub async fn delete_meal_for_user(
    pool: &SqlitePool,
    user_id: &str,
    id: &str,
) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM meals WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
