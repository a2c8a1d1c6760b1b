//! # 식사(Meal) 모델 정의
//!
//! - `Meal`: DB의 `meals` 테이블 한 행
//! - `MealDate`: 요청으로 들어온 식사 시각 (epoch 밀리초로 정규화)
//! - `CreateMealRequest` / `UpdateMealRequest`: 요청 본문

use super::patch::Patch;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// 식사 엔티티
///
/// `date`는 사용자가 지정한 식사 시각(epoch 밀리초)이고,
/// `created_at`은 레코드가 만들어진 서버 시각입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Meal {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub is_on_diet: bool,
    pub date: i64,
    pub created_at: String,
}

/// 요청 본문의 `date` 필드
///
/// 다음 세 가지 표기를 받아들입니다:
/// - RFC 3339 타임스탬프: `"2024-08-13T12:30:00Z"`, `"2024-08-13T12:30:00-03:00"`
/// - 시간대 없는 날짜/시각 (UTC로 간주): `"2024-08-13T12:30:00"`, `"2024-08-13"`
/// - epoch 밀리초 정수: `1723552200000`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawMealDate")]
pub struct MealDate(pub i64);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMealDate {
    Millis(i64),
    Text(String),
}

impl TryFrom<RawMealDate> for MealDate {
    type Error = String;

    fn try_from(raw: RawMealDate) -> Result<Self, Self::Error> {
        match raw {
            RawMealDate::Millis(ms) => Ok(MealDate(ms)),
            RawMealDate::Text(text) => parse_meal_date(&text).map(MealDate),
        }
    }
}

/// 문자열 날짜를 epoch 밀리초로 변환합니다.
pub fn parse_meal_date(text: &str) -> Result<i64, String> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.timestamp_millis());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc().timestamp_millis());
    }
    if let Ok(day) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(midnight) = day.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc().timestamp_millis());
        }
    }

    Err(format!("invalid date: {text:?}"))
}

/// `POST /meals/` 요청 본문
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMealRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: String,
    pub is_on_diet: bool,
    pub date: MealDate,
}

/// `PATCH /meals/:id` 요청 본문
///
/// 모든 필드가 `Patch`이므로 누락(`Absent`)과 `null`(`Null`) 모두 "기존 값 유지"입니다.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMealRequest {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub is_on_diet: Patch<bool>,
    #[serde(default)]
    pub date: Patch<MealDate>,
}

// Patch<T>에는 validator의 derive 규칙을 붙일 수 없어 직접 구현합니다.
impl Validate for UpdateMealRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(name) = self.name.as_value() {
            if name.is_empty() {
                let mut error = ValidationError::new("length");
                error.message = Some("name must not be empty".into());
                errors.add("name", error);
            }
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_rfc3339_with_offset() {
        let ms = parse_meal_date("2024-08-13T12:30:00-03:00").unwrap();
        assert_eq!(ms, parse_meal_date("2024-08-13T15:30:00Z").unwrap());
    }

    #[test]
    fn plain_date_is_midnight_utc() {
        assert_eq!(parse_meal_date("1970-01-02").unwrap(), 86_400_000);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_meal_date("yesterday").is_err());
    }

    #[test]
    fn create_request_accepts_millis_or_text() {
        let from_millis: CreateMealRequest = serde_json::from_str(
            r#"{"name":"Salad","description":"greens","is_on_diet":true,"date":86400000}"#,
        )
        .unwrap();
        let from_text: CreateMealRequest = serde_json::from_str(
            r#"{"name":"Salad","description":"greens","is_on_diet":true,"date":"1970-01-02"}"#,
        )
        .unwrap();
        assert_eq!(from_millis.date, from_text.date);
    }

    #[test]
    fn create_request_requires_every_field() {
        let result =
            serde_json::from_str::<CreateMealRequest>(r#"{"name":"Salad","is_on_diet":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_request_rejects_empty_name_only_when_given() {
        let empty: UpdateMealRequest = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(empty.validate().is_err());

        let cleared: UpdateMealRequest = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert!(cleared.validate().is_ok());
    }
}
