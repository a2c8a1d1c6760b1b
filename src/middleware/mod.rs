//! # 요청 추출기(Extractor) 모듈
//!
//! - `auth`: 세션 쿠키 인증 (`SessionUser`)
//! - `validation`: 본문 파싱 + 검증 (`ValidatedJson`)

pub mod auth;
pub mod validation;

pub use auth::SessionUser;
pub use validation::ValidatedJson;
