use axum::extract::State;

use crate::application::http::{
    mealplan::validators::GenerateMealPlanRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use cartwise_core::domain::mealplan::{
    entities::{MealPlanRequest, PricedMealPlan},
    ports::MealPlanService,
};

#[utoipa::path(
    post,
    path = "/meal-plan",
    tag = "meal-plan",
    summary = "Generate a meal plan",
    description = "Generates a meal plan from constraints via the LLM and prices its ingredients against the catalog",
    responses(
        (status = 200, body = PricedMealPlan),
        (status = 502, description = "LLM failure or unparseable plan")
    ),
    request_body = GenerateMealPlanRequest
)]
pub async fn generate_meal_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateMealPlanRequest>,
) -> Result<Response<PricedMealPlan>, ApiError> {
    let plan = state
        .service
        .generate_meal_plan(MealPlanRequest {
            diet: payload.diet,
            servings: payload.servings,
            budget: payload.budget,
            restrictions: payload.restrictions,
            time_limit: payload.time_limit,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(plan))
}
