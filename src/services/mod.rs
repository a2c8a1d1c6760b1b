//! # 비즈니스 로직 모듈
//!
//! DB나 HTTP에 의존하지 않는 순수 함수들을 모아둔 모듈입니다.
//! - `metrics`: 식사 목록 → 통계(총계, 최장 연속 식단 유지 횟수)
//! - `merge`: 기존 식사 + PATCH 요청 → 수정된 식사

pub mod merge;
pub mod metrics;

pub use merge::*;
pub use metrics::*;
