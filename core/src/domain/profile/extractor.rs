use std::collections::BTreeSet;

use serde_json::Value;

/// Allergy and preference tokens collected from a profile document.
///
/// Sets, so the result is independent of traversal order and of how
/// deeply the source keys are nested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestrictionSet {
    pub allergies: BTreeSet<String>,
    pub preferences: BTreeSet<String>,
}

impl RestrictionSet {
    pub fn is_empty(&self) -> bool {
        self.allergies.is_empty() && self.preferences.is_empty()
    }
}

/// Walk a profile document of unknown shape and collect every
/// "allergies"/"preferences" list, wherever it is nested.
///
/// Key match is case-insensitive and only applies when the value is a
/// sequence. Allergy tokens are lower-cased with the literal
/// `" allergy"` suffix stripped; preference tokens are lower-cased.
/// Malformed or missing fields yield empty sets, never an error.
pub fn extract_restrictions(document: &Value) -> RestrictionSet {
    let mut out = RestrictionSet::default();
    walk(document, &mut out);
    out
}

fn walk(value: &Value, out: &mut RestrictionSet) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if let Value::Array(items) = child {
                    if key.eq_ignore_ascii_case("allergies") {
                        out.allergies.extend(items.iter().filter_map(allergy_token));
                    }
                    if key.eq_ignore_ascii_case("preferences") {
                        out.preferences
                            .extend(items.iter().filter_map(preference_token));
                    }
                }
                walk(child, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, out);
            }
        }
        _ => {}
    }
}

fn allergy_token(value: &Value) -> Option<String> {
    let token = value.as_str()?.to_lowercase().replace(" allergy", "");
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

fn preference_token(value: &Value) -> Option<String> {
    let token = value.as_str()?.to_lowercase();
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_profile() {
        let profile = json!({
            "allergies": ["Peanuts", "Shellfish allergy"],
            "preferences": ["Organic"]
        });
        let set = extract_restrictions(&profile);
        assert_eq!(
            set.allergies,
            BTreeSet::from(["peanuts".to_string(), "shellfish".to_string()])
        );
        assert_eq!(set.preferences, BTreeSet::from(["organic".to_string()]));
    }

    #[test]
    fn test_deep_nesting_is_equivalent_to_flat() {
        let flat = json!({"allergies": ["peanuts"], "preferences": ["budget"]});
        let nested = json!({
            "household": [
                {"members": {"primary": {"Allergies": ["peanuts"]}}},
                {"shopping": [{"Preferences": ["budget"]}]}
            ]
        });
        assert_eq!(extract_restrictions(&flat), extract_restrictions(&nested));
    }

    #[test]
    fn test_missing_fields_yield_empty_sets() {
        let set = extract_restrictions(&json!({"diet": ["vegan"], "household": 2}));
        assert!(set.is_empty());
    }

    #[test]
    fn test_non_sequence_values_are_ignored() {
        let set = extract_restrictions(&json!({"allergies": "peanuts", "preferences": 3}));
        assert!(set.is_empty());
    }

    #[test]
    fn test_non_string_elements_are_skipped() {
        let set = extract_restrictions(&json!({"allergies": ["peanuts", 42, null]}));
        assert_eq!(set.allergies, BTreeSet::from(["peanuts".to_string()]));
    }

    #[test]
    fn test_allergy_suffix_strip_anywhere() {
        let set = extract_restrictions(&json!({"allergies": ["Milk Allergy"]}));
        assert_eq!(set.allergies, BTreeSet::from(["milk".to_string()]));
    }

    #[test]
    fn test_scalar_document_yields_empty_sets() {
        assert!(extract_restrictions(&json!("just text")).is_empty());
        assert!(extract_restrictions(&Value::Null).is_empty());
    }
}
