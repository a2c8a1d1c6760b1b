//! # 식사 통계 집계
//!
//! 한 사용자의 식사 목록을 한 번 훑어서 네 가지 수치를 계산합니다.
//!
//! ## 연속 기록(streak) 규칙
//! 입력 순서상 인접한 식사만 봅니다. 달력상 날짜나 시간 간격은 따지지 않으므로,
//! 사이에 식단 외 식사가 없다면 며칠이 떨어져 있어도 연속으로 셉니다.
//! 호출자는 `date` 내림차순(최신 먼저)으로 정렬된 목록을 넘겨야 합니다.

use crate::models::Meal;
use serde::Serialize;

/// `GET /meals/metrics` 응답 본문
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealMetrics {
    pub total_meals: u64,
    #[serde(rename = "totalMealsOnDiet")]
    pub total_on_diet: u64,
    #[serde(rename = "totalMealsOffDiet")]
    pub total_off_diet: u64,
    #[serde(rename = "bestOnDietSequence")]
    pub best_on_diet_streak: u64,
}

/// 식단 준수 여부 플래그 목록에서 통계를 계산합니다.
pub fn aggregate_flags<I>(flags: I) -> MealMetrics
where
    I: IntoIterator<Item = bool>,
{
    let mut metrics = MealMetrics::default();
    let mut current_streak = 0u64;

    for on_diet in flags {
        metrics.total_meals += 1;
        if on_diet {
            metrics.total_on_diet += 1;
            current_streak += 1;
        } else {
            metrics.total_off_diet += 1;
            current_streak = 0;
        }
        metrics.best_on_diet_streak = metrics.best_on_diet_streak.max(current_streak);
    }

    metrics
}

/// 최신순으로 정렬된 식사 목록에서 통계를 계산합니다.
pub fn aggregate(meals: &[Meal]) -> MealMetrics {
    aggregate_flags(meals.iter().map(|meal| meal.is_on_diet))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ON: bool = true;
    const OFF: bool = false;

    fn meal(is_on_diet: bool, date: i64) -> Meal {
        Meal {
            id: format!("meal-{date}"),
            user_id: "user-1".to_string(),
            name: "meal".to_string(),
            description: String::new(),
            is_on_diet,
            date,
            created_at: "2024-08-13T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn empty_list_is_all_zero() {
        assert_eq!(aggregate(&[]), MealMetrics::default());
    }

    #[test]
    fn streak_breaks_on_off_diet_meal() {
        let metrics = aggregate_flags([ON, ON, OFF, ON]);
        assert_eq!(metrics.best_on_diet_streak, 2);
        assert_eq!(metrics.total_meals, 4);
        assert_eq!(metrics.total_on_diet, 3);
        assert_eq!(metrics.total_off_diet, 1);
    }

    #[test]
    fn all_on_and_all_off() {
        assert_eq!(aggregate_flags([ON, ON, ON]).best_on_diet_streak, 3);
        assert_eq!(aggregate_flags([OFF, OFF]).best_on_diet_streak, 0);
    }

    #[test]
    fn trailing_run_counts() {
        assert_eq!(aggregate_flags([ON, OFF, ON, ON, ON, ON]).best_on_diet_streak, 4);
    }

    #[test]
    fn time_gaps_do_not_break_a_streak() {
        let day = 86_400_000;
        let meals = [meal(ON, 30 * day), meal(ON, 2 * day), meal(OFF, day), meal(ON, 0)];
        assert_eq!(aggregate(&meals).best_on_diet_streak, 2);
    }

    #[test]
    fn totals_and_streak_bounds_hold_for_every_small_sequence() {
        // 길이 0..=8 인 모든 on/off 조합
        for len in 0..=8u32 {
            for bits in 0..(1u32 << len) {
                let flags: Vec<bool> = (0..len).map(|i| bits & (1 << i) != 0).collect();
                let metrics = aggregate_flags(flags.iter().copied());

                assert_eq!(metrics.total_on_diet + metrics.total_off_diet, metrics.total_meals);
                assert!(metrics.best_on_diet_streak <= metrics.total_on_diet);
                assert!(metrics.best_on_diet_streak <= metrics.total_meals);

                let longest = flags
                    .split(|on| !on)
                    .map(|run| run.len() as u64)
                    .max()
                    .unwrap_or(0);
                assert_eq!(metrics.best_on_diet_streak, longest, "flags = {flags:?}");
            }
        }
    }

    #[test]
    fn serializes_with_public_field_names() {
        let json = serde_json::to_value(aggregate_flags([ON, OFF])).unwrap();
        assert_eq!(json["totalMeals"], 2);
        assert_eq!(json["totalMealsOnDiet"], 1);
        assert_eq!(json["totalMealsOffDiet"], 1);
        assert_eq!(json["bestOnDietSequence"], 1);
    }
}
