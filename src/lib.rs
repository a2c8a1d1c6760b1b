//! # 식단 기록 웹 서비스
//!
//! 사용자는 가입하면 `sessionId` 쿠키를 받고, 그 세션으로 식사를 기록합니다.
//! 각 식사에는 식단 준수 여부가 표시되며, 통계 엔드포인트는 총계와
//! 가장 긴 연속 식단 준수 횟수를 알려줍니다.
//!
//! 바이너리(`main.rs`)와 통합 테스트가 같은 라우터를 쓰도록 조립 로직을 여기에 둡니다.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use axum::{routing::get, Router};
use routes::*;

/// 모든 라우트를 등록하고 상태를 주입한 라우터를 만듭니다.
///
/// CORS/Trace 같은 공통 레이어는 호출하는 쪽(`main`)에서 씌웁니다.
pub fn build_router(state: AppState) -> Router {
    // 사용자(User) API. 끝의 슬래시 유무와 관계없이 같은 핸들러로 연결합니다.
    let user_routes = Router::new()
        .route("/users", get(get_me).post(register))
        .route("/users/", get(get_me).post(register));

    // 식사(Meal) API. 고정 경로(/metrics)가 {id}보다 우선 매칭됩니다.
    let meal_routes = Router::new()
        .route("/meals", get(list_meals).post(create_meal))
        .route("/meals/", get(list_meals).post(create_meal))
        .route("/meals/metrics", get(get_metrics))
        .route(
            "/meals/{id}",
            get(get_meal).patch(update_meal).delete(delete_meal),
        );

    Router::new()
        .route("/", get(list_schema))
        .route("/health", get(health_check))
        .merge(user_routes)
        .merge(meal_routes)
        .with_state(state)
}
