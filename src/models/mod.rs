//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `user`: 계정(User)과 가입 요청
//! - `meal`: 식사(Meal)와 생성/수정 요청, 식사 시각 파싱
//! - `patch`: 부분 업데이트용 3-상태 필드 `Patch<T>`
//!
//! `pub use X::*;`로 재공개하여 `crate::models::Meal`처럼 짧게 접근합니다.

pub mod meal;
pub mod patch;
pub mod user;

pub use meal::*;
pub use patch::*;
pub use user::*;
