pub mod detect_allergens;
pub mod get_latest_detection;
