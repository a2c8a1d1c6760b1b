use crate::error::{is_unique_violation_on, AppError};
use crate::models::user::User;
use sqlx::SqlitePool;

/// 새 계정을 저장하고, DB 기본값이 채워진 행을 다시 읽어 반환합니다.
///
/// 이메일 UNIQUE 제약 위반만 `AppError::DuplicateEmail`로 변환됩니다.
/// 세션 토큰 충돌(동시 가입이 같은 쿠키를 재사용한 경우)은 내부 오류입니다.
pub async fn create_user(
    pool: &SqlitePool,
    id: &str,
    name: &str,
    email: &str,
    session_id: &str,
) -> Result<User, AppError> {
    sqlx::query(
        r#"
        INSERT INTO users (id, name, email, session_id)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(session_id)
    .execute(pool)
    .await
    .map_err(|e| {
        if is_unique_violation_on(&e, "users.email") {
            AppError::DuplicateEmail
        } else if is_unique_violation_on(&e, "users.session_id") {
            AppError::Internal("Session token is already bound to another account".to_string())
        } else {
            AppError::Database(e)
        }
    })?;

    find_by_id(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created user".to_string()))
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, session_id, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, session_id, created_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn find_by_session(
    pool: &SqlitePool,
    session_id: &str,
) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, session_id, created_at
        FROM users
        WHERE session_id = ?
        "#,
    )
    .bind(session_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use std::str::FromStr;

    async fn test_pool() -> SqlitePool {
        let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .unwrap();
        crate::db::run_migrations(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn same_email_is_a_duplicate() {
        let pool = test_pool().await;
        create_user(&pool, "u1", "Alice", "a@example.com", "tok-1").await.unwrap();

        let err = create_user(&pool, "u2", "Alice 2", "a@example.com", "tok-2")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateEmail));
    }

    #[tokio::test]
    async fn shared_session_token_is_not_a_duplicate_email() {
        let pool = test_pool().await;
        create_user(&pool, "u1", "Alice", "a@example.com", "tok").await.unwrap();

        let err = create_user(&pool, "u2", "Bob", "b@example.com", "tok")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)), "got {err:?}");
        assert!(find_by_email(&pool, "b@example.com").await.unwrap().is_none());
    }
}
