use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ParseProfileRequest {
    /// Free-form description of preferences, allergies, and habits.
    #[serde(rename = "userInput")]
    #[validate(length(
        min = 1,
        max = 5000,
        message = "userInput must be between 1 and 5000 characters"
    ))]
    pub user_input: String,
}
