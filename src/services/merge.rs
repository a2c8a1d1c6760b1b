//! # 식사 부분 업데이트 병합
//!
//! `PATCH /meals/:id`의 요청 본문을 기존 식사 레코드에 덮어씁니다.
//! 값이 주어진 필드만 바뀌고, 누락되었거나 `null`인 필드는 그대로 유지됩니다.
//! 식별자(`id`, `user_id`)와 `created_at`은 절대 바뀌지 않습니다.

use crate::models::{Meal, MealDate, UpdateMealRequest};

pub fn merge_meal(existing: Meal, patch: UpdateMealRequest) -> Meal {
    Meal {
        name: patch.name.or_keep(existing.name),
        description: patch.description.or_keep(existing.description),
        is_on_diet: patch.is_on_diet.or_keep(existing.is_on_diet),
        date: patch.date.or_keep(MealDate(existing.date)).0,
        ..existing
    }
}
