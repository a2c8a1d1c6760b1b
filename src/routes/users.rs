use crate::{
    db::{self, users as db_users},
    error::AppError,
    middleware::{
        auth::{authenticate, session_cookie, session_token, AuthFailure},
        ValidatedJson,
    },
    models::user::*,
    routes::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;
use serde_json::{json, Value};

/// `GET /users/` — 세션의 계정과 그 계정의 식사 목록
///
/// 이 엔드포인트만 인증 실패를 401이 아닌 400으로 응답합니다.
pub async fn get_me(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<Value>, AppError> {
    let token = session_token(&jar);
    let user = authenticate(&state.pool, token.as_deref())
        .await
        .map_err(|failure| match failure {
            AuthFailure::Store(e) => e,
            AuthFailure::MissingToken | AuthFailure::UnknownToken => AppError::UnidentifiedUser,
        })?;

    let meals = db::list_meals_for_user(&state.pool, &user.id).await?;

    Ok(Json(json!({ "user": user, "meals": meals })))
}

/// `POST /users/` — 가입
///
/// 요청에 아직 어떤 계정에도 묶이지 않은 `sessionId` 쿠키가 있으면 그 값을 쓰고,
/// 없거나 이미 다른 계정의 세션이면 새 토큰을 발급해 쿠키로 내려줍니다.
/// 따라서 하나의 세션 토큰은 항상 한 계정만 가리킵니다.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, CookieJar), AppError> {
    // 빠른 실패용 사전 확인. 동시 가입 경합은 email UNIQUE 제약이 막습니다.
    if db_users::find_by_email(&state.pool, &req.email).await?.is_some() {
        return Err(AppError::DuplicateEmail);
    }

    let reusable = match session_token(&jar) {
        Some(token) => {
            let taken = db_users::find_by_session(&state.pool, &token).await?.is_some();
            (!taken).then_some(token)
        }
        None => None,
    };

    let (session_id, jar) = match reusable {
        Some(token) => (token, jar),
        None => {
            let token = uuid::Uuid::new_v4().to_string();
            let cookie = session_cookie(&token, state.session_max_age_days)?;
            (token, jar.add(cookie))
        }
    };

    let user_id = uuid::Uuid::now_v7().to_string();
    let user =
        db_users::create_user(&state.pool, &user_id, &req.name, &req.email, &session_id).await?;
    tracing::info!(user_id = %user.id, "user registered");

    Ok((StatusCode::CREATED, jar))
}
