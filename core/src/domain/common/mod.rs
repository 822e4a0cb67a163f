use chrono::{DateTime, Utc};
use rand::Rng;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct CartwiseConfig {
    pub llm: LLMConfig,
    pub retrieval: RetrievalConfig,
    pub data: DataConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub embedding_model: String,
}

/// Similarity-alternatives service. An empty endpoint disables enrichment.
#[derive(Clone, Debug)]
pub struct RetrievalConfig {
    pub endpoint: String,
    pub api_key: String,
}

#[derive(Clone, Debug)]
pub struct DataConfig {
    pub products_path: String,
    pub stores_path: String,
    pub synonyms_path: String,
    pub substitutions_path: String,
    pub profile_path: String,
    pub orders_path: String,
}

pub fn generate_timestamp() -> DateTime<Utc> {
    Utc::now()
}

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random uppercase-alphanumeric code. Collisions are not checked.
pub fn generate_random_code(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

pub fn generate_pickup_code() -> String {
    generate_random_code(8)
}

pub fn generate_order_id() -> String {
    generate_random_code(10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pickup_code_format() {
        let code = generate_pickup_code();
        assert_eq!(code.len(), 8);
        assert!(
            code.chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn test_order_id_format() {
        let id = generate_order_id();
        assert_eq!(id.len(), 10);
        assert!(
            id.chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }
}
