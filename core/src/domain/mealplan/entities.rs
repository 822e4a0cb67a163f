use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Constraints for one meal-plan generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealPlanRequest {
    pub diet: String,
    pub servings: u32,
    pub budget: f64,
    pub restrictions: String,
    pub time_limit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealIngredient {
    pub name: String,
    pub quantity: String,
}

/// Shape the LLM is required to return (see [`super::schema`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealPlan {
    pub meal_name: String,
    pub ingredients: Vec<MealIngredient>,
    pub instructions: Vec<String>,
}

/// One ingredient priced against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PricedIngredient {
    pub name: String,
    pub quantity: String,
    pub price: f64,
}

/// Generated plan plus the priced portion of its ingredient list.
/// Ingredients that do not resolve against the catalog are absent from
/// `cart` and contribute nothing to `total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PricedMealPlan {
    pub meal_name: String,
    pub ingredients: Vec<MealIngredient>,
    pub instructions: Vec<String>,
    pub cart: Vec<PricedIngredient>,
    pub total: f64,
}
