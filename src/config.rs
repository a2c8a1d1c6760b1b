//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: SQLite 데이터베이스 경로 (필수)
//! - `HOST`: 서버 바인딩 주소 (기본값: "127.0.0.1")
//! - `PORT`: 서버 포트 번호 (기본값: 3333)
//! - `SESSION_MAX_AGE_DAYS`: 세션 쿠키 유효 기간 (기본값: 7일)
//! - `DB_MAX_CONNECTIONS`: 연결 풀 최대 크기 (기본값: 5)

use std::env;
use std::str::FromStr;
use thiserror::Error;

/// 설정 로딩 실패
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 필수 환경변수가 없음
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// 값은 있지만 해석할 수 없음 (예: PORT=abc)
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후,
/// 필요한 값만 `AppState`를 통해 핸들러에 전달됩니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 데이터베이스 URL (예: "sqlite:data/diet.db?mode=rwc")
    pub database_url: String,
    /// 서버가 바인딩할 호스트 주소
    pub host: String,
    /// 서버 포트 번호
    pub port: u16,
    /// `sessionId` 쿠키의 Max-Age (일 단위)
    pub session_max_age_days: i64,
    /// SQLite 연결 풀의 최대 연결 수
    pub db_max_connections: u32,
}

impl Config {
    /// 프로세스 환경변수에서 설정을 읽습니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로부터 설정을 만듭니다.
    ///
    /// 테스트에서 프로세스 전역 환경변수를 건드리지 않고
    /// 원하는 값을 주입할 수 있도록 분리했습니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        Ok(Self {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&lookup, "PORT", 3333)?,
            session_max_age_days: session_max_age_days(&lookup)?,
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?,
        })
    }
}

/// 세션 유효 기간은 1일 이상 10년 이하여야 합니다.
/// 초 단위로 바꿔 쿠키 Max-Age에 싣기 때문에 상한이 필요합니다.
const SESSION_MAX_AGE_DAYS_RANGE: std::ops::RangeInclusive<i64> = 1..=3650;

fn session_max_age_days<F>(lookup: &F) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let days = parse_or(lookup, "SESSION_MAX_AGE_DAYS", 7)?;
    if SESSION_MAX_AGE_DAYS_RANGE.contains(&days) {
        Ok(days)
    } else {
        Err(ConfigError::Invalid {
            key: "SESSION_MAX_AGE_DAYS",
            value: days.to_string(),
        })
    }
}

/// 값이 없으면 기본값, 있으면 파싱합니다. 파싱 실패는 에러입니다.
fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config =
            Config::from_lookup(lookup_from(&[("DATABASE_URL", "sqlite::memory:")])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3333);
        assert_eq!(config.session_max_age_days, 7);
        assert_eq!(config.db_max_connections, 5);
    }

    #[test]
    fn database_url_is_required() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn unparsable_port_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn session_max_age_must_be_in_range() {
        for raw in ["0", "-3", "3651", "9223372036854775807"] {
            let err = Config::from_lookup(lookup_from(&[
                ("DATABASE_URL", "sqlite::memory:"),
                ("SESSION_MAX_AGE_DAYS", raw),
            ]))
            .unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid { key: "SESSION_MAX_AGE_DAYS", .. }),
                "{raw} accepted"
            );
        }

        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("SESSION_MAX_AGE_DAYS", "30"),
        ]))
        .unwrap();
        assert_eq!(config.session_max_age_days, 30);
    }
}
