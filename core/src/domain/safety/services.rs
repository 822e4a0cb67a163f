use std::collections::{BTreeSet, HashMap};

use crate::domain::{
    catalog::{entities::Product, ports::CatalogRepository, services::resolve_product},
    common::{entities::app_errors::CoreError, services::Service},
    fulfillment::ports::StoreRepository,
    llm::ports::LLMClient,
    matching::{SIMILARITY_THRESHOLD, similarity_ratio},
    order::ports::OrderLogRepository,
    profile::{extractor::extract_restrictions, ports::ProfileRepository},
    retrieval::ports::AlternativesIndex,
    safety::{
        entities::{CartEntry, CartStatus},
        ports::{CartService, SubstitutionRepository, SynonymRepository},
        value_objects::ProcessCartInput,
    },
};

/// Classify one item against the profile's allergy and preference
/// tokens.
///
/// Priority order: allergy Risk (exact equality, synonym-table hit, or
/// fuzzy similarity above the shared threshold; first match wins), then
/// preference Warn (substring of any product allergen or of the item
/// name), then Safe. An unresolved item is Safe by default: this
/// fail-open policy is deliberate, documented behavior.
pub fn classify_item(
    item_name: &str,
    product: Option<&Product>,
    allergies: &BTreeSet<String>,
    preferences: &BTreeSet<String>,
    synonyms: &HashMap<String, Vec<String>>,
) -> (CartStatus, String) {
    let Some(product) = product else {
        return (CartStatus::Safe, String::new());
    };

    for allergy in allergies {
        for allergen in &product.allergens {
            let allergen_lc = allergen.to_lowercase();
            let synonym_hit = synonyms
                .get(allergy)
                .is_some_and(|terms| terms.iter().any(|t| t.to_lowercase() == allergen_lc));
            if *allergy == allergen_lc
                || synonym_hit
                || similarity_ratio(allergy, &allergen_lc) > SIMILARITY_THRESHOLD
            {
                return (
                    CartStatus::Risk,
                    format!(
                        "Contains {allergen}, which matches your allergy or restriction: {allergy}."
                    ),
                );
            }
        }
    }

    let item_lc = item_name.to_lowercase();
    for preference in preferences {
        let hits_allergen = product
            .allergens
            .iter()
            .any(|a| a.to_lowercase().contains(preference.as_str()));
        if hits_allergen || item_lc.contains(preference.as_str()) {
            return (
                CartStatus::Warn,
                format!("You said you dislike or want to avoid {item_name}."),
            );
        }
    }

    (CartStatus::Safe, String::new())
}

impl<CA, ST, SY, SU, PF, OR, L, AX> CartService for Service<CA, ST, SY, SU, PF, OR, L, AX>
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
    async fn process_cart(&self, input: ProcessCartInput) -> Result<Vec<CartEntry>, CoreError> {
        let restrictions = extract_restrictions(&input.profile);
        let synonyms = self.synonym_repository.table().await?;

        let mut cart = Vec::with_capacity(input.items.len());
        for item in &input.items {
            let product = resolve_product(&self.catalog_repository, item).await?;
            let (mut status, mut reason) = classify_item(
                item,
                product.as_ref(),
                &restrictions.allergies,
                &restrictions.preferences,
                &synonyms,
            );

            // Substitution applies only to flagged items and only on an
            // exact lower-cased key; the asymmetry against the fuzzy
            // matching above is intentional.
            let mut safe_alternative = None;
            if status == CartStatus::Risk {
                if let Some(substitution) = self
                    .substitution_repository
                    .get(&item.to_lowercase())
                    .await?
                {
                    status = CartStatus::Substituted;
                    safe_alternative = Some(substitution.safe_alt);
                    reason = substitution.reason;
                }
            }

            cart.push(CartEntry {
                original: item.clone(),
                status,
                safe_alternative,
                reason,
            });
        }

        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_fixtures::{product, test_service};
    use serde_json::json;

    fn allergies(tokens: &[&str]) -> BTreeSet<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_exact_allergen_match_is_risk() {
        let product = product("peanut butter", "P1", &["peanuts"]);
        let (status, reason) = classify_item(
            "peanut butter",
            Some(&product),
            &allergies(&["peanuts"]),
            &BTreeSet::new(),
            &HashMap::new(),
        );
        assert_eq!(status, CartStatus::Risk);
        assert!(reason.contains("peanuts"));
    }

    #[test]
    fn test_synonym_table_match_is_risk() {
        let product = product("bread", "P3", &["wheat"]);
        let synonyms = HashMap::from([("gluten".to_string(), vec!["wheat".to_string()])]);
        let (status, _) = classify_item(
            "bread",
            Some(&product),
            &allergies(&["gluten"]),
            &BTreeSet::new(),
            &synonyms,
        );
        assert_eq!(status, CartStatus::Risk);
    }

    #[test]
    fn test_fuzzy_allergen_match_is_risk() {
        let product = product("trail mix", "P4", &["peanuts"]);
        let (status, _) = classify_item(
            "trail mix",
            Some(&product),
            &allergies(&["peanut"]),
            &BTreeSet::new(),
            &HashMap::new(),
        );
        assert_eq!(status, CartStatus::Risk);
    }

    #[test]
    fn test_preference_substring_is_warn() {
        let product = product("whole milk", "P5", &["dairy"]);
        let preferences = allergies(&["milk"]);
        let (status, reason) = classify_item(
            "whole milk",
            Some(&product),
            &BTreeSet::new(),
            &preferences,
            &HashMap::new(),
        );
        assert_eq!(status, CartStatus::Warn);
        assert!(reason.contains("whole milk"));
    }

    #[test]
    fn test_allergy_wins_over_preference() {
        let product = product("whole milk", "P5", &["dairy"]);
        let (status, _) = classify_item(
            "whole milk",
            Some(&product),
            &allergies(&["dairy"]),
            &allergies(&["milk"]),
            &HashMap::new(),
        );
        assert_eq!(status, CartStatus::Risk);
    }

    #[test]
    fn test_unresolved_item_fails_open_to_safe() {
        let (status, reason) = classify_item(
            "mystery item",
            None,
            &allergies(&["peanuts"]),
            &allergies(&["organic"]),
            &HashMap::new(),
        );
        assert_eq!(status, CartStatus::Safe);
        assert!(reason.is_empty());
    }

    #[tokio::test]
    async fn test_process_cart_substitutes_flagged_item() {
        let mut service = test_service();
        service.catalog_repository.products = vec![product("peanut butter", "P1", &["peanuts"])];
        service.substitution_repository.table.insert(
            "peanut butter".to_string(),
            crate::domain::safety::entities::Substitution {
                safe_alt: "sunflower seed butter".to_string(),
                reason: "Free of peanuts.".to_string(),
            },
        );

        let cart = service
            .process_cart(ProcessCartInput {
                items: vec!["peanut butter".to_string()],
                profile: json!({"allergies": ["peanuts"]}),
            })
            .await
            .unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].status, CartStatus::Substituted);
        assert_eq!(
            cart[0].safe_alternative.as_deref(),
            Some("sunflower seed butter")
        );
    }

    #[tokio::test]
    async fn test_substitution_requires_exact_key() {
        let mut service = test_service();
        service.catalog_repository.products = vec![product("peanut butter", "P1", &["peanuts"])];
        // Near-miss key: fuzzy detection flags the item, but the
        // exact-only substitution lookup must not fire.
        service.substitution_repository.table.insert(
            "peanut buttr".to_string(),
            crate::domain::safety::entities::Substitution {
                safe_alt: "sunflower seed butter".to_string(),
                reason: "Free of peanuts.".to_string(),
            },
        );

        let cart = service
            .process_cart(ProcessCartInput {
                items: vec!["peanut butter".to_string()],
                profile: json!({"allergies": ["peanuts"]}),
            })
            .await
            .unwrap();

        assert_eq!(cart[0].status, CartStatus::Risk);
        assert!(cart[0].safe_alternative.is_none());
    }

    #[tokio::test]
    async fn test_one_unresolved_item_does_not_abort_the_rest() {
        let mut service = test_service();
        service.catalog_repository.products = vec![product("peanut butter", "P1", &["peanuts"])];

        let cart = service
            .process_cart(ProcessCartInput {
                items: vec!["space rock".to_string(), "peanut butter".to_string()],
                profile: json!({"allergies": ["peanuts"]}),
            })
            .await
            .unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart[0].status, CartStatus::Safe);
        assert_eq!(cart[1].status, CartStatus::Risk);
    }
}
