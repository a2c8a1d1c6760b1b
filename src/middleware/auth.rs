use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use sqlx::SqlitePool;
use std::future::Future;

use crate::{db::users as db_users, error::AppError, models::User, routes::AppState};

/// 세션 토큰을 담는 쿠키 이름
pub const SESSION_COOKIE: &str = "sessionId";

/// 세션 토큰 → 계정 조회
///
/// 인증 로직이 특정 저장소에 묶이지 않도록 분리한 경계입니다.
/// 서버에서는 `SqlitePool`이, 테스트에서는 메모리 가짜 저장소가 구현합니다.
pub trait SessionLookup {
    fn find_by_session(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Option<User>, AppError>> + Send;
}

impl SessionLookup for SqlitePool {
    async fn find_by_session(&self, token: &str) -> Result<Option<User>, AppError> {
        db_users::find_by_session(self, token).await
    }
}

#[derive(Debug)]
pub enum AuthFailure {
    MissingToken,
    UnknownToken,
    /// 저장소 자체가 실패한 경우. 인증 실패로 취급하지 않습니다.
    Store(AppError),
}

impl From<AuthFailure> for AppError {
    fn from(failure: AuthFailure) -> Self {
        match failure {
            AuthFailure::MissingToken | AuthFailure::UnknownToken => AppError::Unauthenticated,
            AuthFailure::Store(e) => e,
        }
    }
}

/// 쿠키에서 꺼낸 토큰으로 계정을 찾습니다. 부수 효과는 없습니다.
pub async fn authenticate<S>(store: &S, token: Option<&str>) -> Result<User, AuthFailure>
where
    S: SessionLookup + Sync,
{
    let token = token.ok_or(AuthFailure::MissingToken)?;

    store
        .find_by_session(token)
        .await
        .map_err(AuthFailure::Store)?
        .ok_or(AuthFailure::UnknownToken)
}

/// 요청 쿠키의 `sessionId` 값
pub fn session_token(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE).map(|cookie| cookie.value().to_string())
}

/// `sessionId` 쿠키를 만듭니다 (Path=/, HttpOnly, SameSite=Lax).
///
/// 유효 기간은 양수여야 하고, 초로 환산해 `i64`를 넘으면 에러입니다.
pub fn session_cookie(token: &str, max_age_days: i64) -> Result<Cookie<'static>, AppError> {
    let max_age_secs = max_age_days
        .checked_mul(24 * 60 * 60)
        .filter(|secs| *secs > 0)
        .ok_or_else(|| {
            AppError::Internal(format!("Invalid session max age: {} days", max_age_days))
        })?;
    let raw = format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        SESSION_COOKIE, token, max_age_secs
    );

    Cookie::parse(raw)
        .map_err(|e| AppError::Internal(format!("Session cookie build failed: {}", e)))
}

/// 인증된 사용자 추출기
///
/// 핸들러 매개변수에 `SessionUser(user)`를 두면, 유효한 세션이 없을 때
/// 핸들러가 실행되지 않고 401이 반환됩니다.
#[derive(Debug, Clone)]
pub struct SessionUser(pub User);

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = session_token(&jar);

        match authenticate(&state.pool, token.as_deref()).await {
            Ok(user) => Ok(SessionUser(user)),
            Err(failure) => {
                tracing::debug!(?failure, path = %parts.uri.path(), "session rejected");
                Err(failure.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeStore {
        by_token: HashMap<String, User>,
    }

    impl SessionLookup for FakeStore {
        async fn find_by_session(&self, token: &str) -> Result<Option<User>, AppError> {
            Ok(self.by_token.get(token).cloned())
        }
    }

    struct BrokenStore;

    impl SessionLookup for BrokenStore {
        async fn find_by_session(&self, _token: &str) -> Result<Option<User>, AppError> {
            Err(AppError::Internal("disk on fire".to_string()))
        }
    }

    fn alice() -> User {
        User {
            id: "user-1".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            session_id: "token-a".to_string(),
            created_at: "2024-08-13T00:00:00.000Z".to_string(),
        }
    }

    fn store() -> FakeStore {
        FakeStore {
            by_token: HashMap::from([("token-a".to_string(), alice())]),
        }
    }

    #[tokio::test]
    async fn absent_token_is_unauthenticated() {
        let result = authenticate(&store(), None).await;
        assert!(matches!(result, Err(AuthFailure::MissingToken)));
    }

    #[tokio::test]
    async fn unknown_token_is_unauthenticated() {
        let result = authenticate(&store(), Some("token-z")).await;
        assert!(matches!(result, Err(AuthFailure::UnknownToken)));
    }

    #[tokio::test]
    async fn matching_token_returns_the_account() {
        let user = authenticate(&store(), Some("token-a")).await.unwrap();
        assert_eq!(user, alice());
    }

    #[tokio::test]
    async fn store_failure_is_not_reported_as_auth_failure() {
        let failure = authenticate(&BrokenStore, Some("token-a")).await.unwrap_err();
        assert!(matches!(
            AppError::from(failure),
            AppError::Internal(_)
        ));
    }

    #[test]
    fn session_cookie_has_expected_attributes() {
        let cookie = session_cookie("abc", 7).unwrap();
        assert_eq!(cookie.name(), "sessionId");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.max_age().map(|d| d.whole_seconds()), Some(604_800));
    }

    #[test]
    fn session_cookie_rejects_overflowing_or_non_positive_age() {
        for days in [i64::MAX, i64::MAX / 86_400 + 1, 0, -1] {
            assert!(
                matches!(session_cookie("abc", days), Err(AppError::Internal(_))),
                "{days} accepted"
            );
        }
    }
}
