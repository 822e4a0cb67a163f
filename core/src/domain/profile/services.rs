use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::domain::{
    catalog::ports::CatalogRepository,
    common::{entities::app_errors::CoreError, services::Service},
    fulfillment::ports::StoreRepository,
    llm::ports::LLMClient,
    order::ports::OrderLogRepository,
    profile::ports::{ProfileRepository, ProfileService},
    retrieval::ports::AlternativesIndex,
    safety::ports::{SubstitutionRepository, SynonymRepository},
};

static JSON_BLOB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[\s\S]*\}").expect("valid literal regex"));

/// Extract a JSON document from raw model output.
///
/// Strips a surrounding markdown code fence, then tries the whole text,
/// then the outermost brace-delimited substring, then that substring
/// with single quotes swapped for double quotes. Empty or non-JSON
/// output is a [`CoreError::ParseFailure`], never silently defaulted.
pub fn clean_llm_json(raw: &str) -> Result<Value, CoreError> {
    let text = raw.trim();

    if text.starts_with("```") {
        let mut lines: Vec<&str> = text.lines().collect();
        lines.remove(0);
        if lines.last().is_some_and(|line| line.trim() == "```") {
            lines.pop();
        }
        return clean_fenceless(lines.join("\n"));
    }

    clean_fenceless(text)
}

fn clean_fenceless<S: AsRef<str>>(text: S) -> Result<Value, CoreError> {
    let text = text.as_ref().trim();
    if text.is_empty() {
        return Err(CoreError::ParseFailure(
            "language model returned an empty response".to_string(),
        ));
    }

    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }

    if let Some(found) = JSON_BLOB.find(text) {
        let blob = found.as_str();
        if let Ok(value) = serde_json::from_str::<Value>(blob) {
            return Ok(value);
        }
        let requoted = blob.replace('\'', "\"");
        if let Ok(value) = serde_json::from_str::<Value>(&requoted) {
            return Ok(value);
        }
    }

    Err(CoreError::ParseFailure(format!(
        "could not parse profile JSON from model output: {text}"
    )))
}

fn build_profile_prompt(user_input: &str, existing: Option<&Value>) -> String {
    let mut prompt = String::from(
        "You are an expert assistant for a grocery retailer. Convert the user's \
         free-form description of their food preferences, allergies, and shopping \
         habits into a structured JSON profile.\n\n\
         Return valid JSON. All property names and string values must use double \
         quotes. Do not use single quotes.\n\n\
         Example output:\n\
         {\n  \"diet\": [\"vegetarian\"],\n  \"allergies\": [\"peanuts\"],\n  \
         \"preferences\": [\"budget\", \"organic\"],\n  \"shoppingFrequency\": \"weekly\",\n  \
         \"household\": 2\n}\n\n",
    );

    if let Some(existing) = existing {
        prompt.push_str(&format!(
            "Current profile (merge the new information into it):\n{existing}\n\n"
        ));
    }

    prompt.push_str(&format!("User input: \"{user_input}\"\n\nJSON profile:\n"));
    prompt
}

impl<CA, ST, SY, SU, PF, OR, L, AX> ProfileService for Service<CA, ST, SY, SU, PF, OR, L, AX>
where
    CA: CatalogRepository,
    ST: StoreRepository,
    SY: SynonymRepository,
    SU: SubstitutionRepository,
    PF: ProfileRepository,
    OR: OrderLogRepository,
    L: LLMClient,
    AX: AlternativesIndex,
{
    async fn parse_profile(&self, user_input: String) -> Result<Value, CoreError> {
        if user_input.trim().is_empty() {
            return Err(CoreError::Validation("missing userInput".to_string()));
        }

        let existing = self.profile_repository.load().await?;
        let prompt = build_profile_prompt(&user_input, existing.as_ref());

        let raw = self.llm_client.generate_text(prompt).await?;
        tracing::debug!(raw = %raw, "raw profile response");

        let profile = clean_llm_json(&raw)?;
        self.profile_repository.save(profile.clone()).await?;
        Ok(profile)
    }

    async fn get_profile(&self) -> Result<Value, CoreError> {
        self.profile_repository
            .load()
            .await?
            .ok_or_else(|| CoreError::NotFound("profile".to_string()))
    }

    async fn clear_profile(&self) -> Result<(), CoreError> {
        self.profile_repository.clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_fixtures::test_service;
    use serde_json::json;

    #[test]
    fn test_plain_json_passes_through() {
        let value = clean_llm_json(r#"{"allergies": ["peanuts"]}"#).unwrap();
        assert_eq!(value, json!({"allergies": ["peanuts"]}));
    }

    #[test]
    fn test_fenced_json_is_unwrapped() {
        let raw = "```json\n{\"allergies\": [\"peanuts\"]}\n```";
        let value = clean_llm_json(raw).unwrap();
        assert_eq!(value, json!({"allergies": ["peanuts"]}));
    }

    #[test]
    fn test_json_substring_is_extracted() {
        let raw = "Here is your profile:\n{\"household\": 2}\nEnjoy!";
        let value = clean_llm_json(raw).unwrap();
        assert_eq!(value, json!({"household": 2}));
    }

    #[test]
    fn test_single_quoted_fallback() {
        let value = clean_llm_json("{'diet': ['vegan']}").unwrap();
        assert_eq!(value, json!({"diet": ["vegan"]}));
    }

    #[test]
    fn test_empty_output_is_a_parse_failure() {
        assert!(matches!(
            clean_llm_json("```\n```"),
            Err(CoreError::ParseFailure(_))
        ));
        assert!(matches!(
            clean_llm_json("   "),
            Err(CoreError::ParseFailure(_))
        ));
    }

    #[test]
    fn test_non_json_output_is_a_parse_failure() {
        assert!(matches!(
            clean_llm_json("I cannot help with that."),
            Err(CoreError::ParseFailure(_))
        ));
    }

    #[tokio::test]
    async fn test_parse_profile_persists_document() {
        let service = test_service();
        service
            .llm_client
            .push_response(Ok(r#"{"allergies": ["peanuts"]}"#.to_string()));

        let profile = service
            .parse_profile("I'm allergic to peanuts".to_string())
            .await
            .unwrap();
        assert_eq!(profile, json!({"allergies": ["peanuts"]}));

        let stored = service.get_profile().await.unwrap();
        assert_eq!(stored, profile);
    }

    #[tokio::test]
    async fn test_blank_input_is_rejected_without_llm_call() {
        let err = test_service()
            .parse_profile("   ".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_missing_profile_is_not_found() {
        let err = test_service().get_profile().await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_clear_then_get_is_not_found() {
        let service = test_service();
        service
            .llm_client
            .push_response(Ok(r#"{"allergies": []}"#.to_string()));
        service.parse_profile("no allergies".to_string()).await.unwrap();

        service.clear_profile().await.unwrap();
        assert!(matches!(
            service.get_profile().await,
            Err(CoreError::NotFound(_))
        ));
    }
}
