//! # 검증된 JSON 추출기
//!
//! `Json<T>`로 본문을 파싱한 뒤 `validator::Validate`까지 통과한 값만 핸들러에 넘깁니다.
//! 파싱 실패(잘못된 JSON, 필드 누락, 타입 불일치)와 검증 실패 모두
//! `AppError::Validation`(HTTP 400)이 되며, 예외처럼 흐름을 끊지 않고
//! `Result`로 표현됩니다.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::Validation(errors.to_string()))?;

        Ok(ValidatedJson(value))
    }
}
