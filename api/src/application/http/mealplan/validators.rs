use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct GenerateMealPlanRequest {
    #[validate(length(min = 1, max = 100, message = "diet must not be empty"))]
    pub diet: String,

    #[validate(range(min = 1, max = 50, message = "servings must be between 1 and 50"))]
    pub servings: u32,

    #[validate(range(min = 0.0, message = "budget must not be negative"))]
    pub budget: f64,

    /// Comma-separated restrictions to avoid, e.g. "peanuts, dairy".
    #[serde(default)]
    pub restrictions: String,

    #[validate(length(min = 1, max = 100, message = "time_limit must not be empty"))]
    pub time_limit: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_servings_fails_validation() {
        let request = GenerateMealPlanRequest {
            diet: "vegetarian".to_string(),
            servings: 0,
            budget: 10.0,
            restrictions: String::new(),
            time_limit: "30 minutes".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
