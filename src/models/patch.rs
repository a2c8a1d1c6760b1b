//! # PATCH 요청용 3-상태 필드
//!
//! JSON 부분 업데이트에서는 필드가 세 가지 상태를 가질 수 있습니다:
//!
//! | JSON | `Patch<T>` |
//! |------|------------|
//! | 필드 자체가 없음 | `Absent` |
//! | `"field": null` | `Null` |
//! | `"field": 값` | `Value(값)` |
//!
//! `Option<T>` 하나로는 앞의 두 경우를 구분할 수 없습니다.
//! 구조체 필드에 `#[serde(default)]`를 붙여야 누락된 필드가 `Absent`가 됩니다.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Absent,
    Null,
    Value(T),
}

// derive(Default)는 T: Default 바운드를 요구할 수 있으므로 직접 구현합니다.
impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    /// 값이 주어졌으면 그 값을, `Absent`/`Null`이면 기존 값을 유지합니다.
    pub fn or_keep(self, existing: T) -> T {
        match self {
            Patch::Value(value) => value,
            Patch::Absent | Patch::Null => existing,
        }
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Patch::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    // 필드가 존재할 때만 호출됩니다. 없는 경우는 #[serde(default)]가 처리합니다.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        })
    }
}
