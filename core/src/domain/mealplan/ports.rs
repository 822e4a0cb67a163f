use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    mealplan::entities::{MealPlanRequest, PricedMealPlan},
};

/// Service trait for meal-plan generation.
pub trait MealPlanService: Send + Sync {
    fn generate_meal_plan(
        &self,
        request: MealPlanRequest,
    ) -> impl Future<Output = Result<PricedMealPlan, CoreError>> + Send;
}
