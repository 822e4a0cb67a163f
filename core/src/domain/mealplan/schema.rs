use serde_json::json;

/// JSON response schema for meal-plan LLM calls.
pub fn get_meal_plan_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "meal_name": { "type": "string" },
            "ingredients": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "quantity": { "type": "string" }
                    },
                    "required": ["name", "quantity"]
                }
            },
            "instructions": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["meal_name", "ingredients", "instructions"]
    })
}
