use std::collections::BTreeMap;

use crate::domain::{
    catalog::{entities::Product, ports::CatalogRepository},
    common::{entities::app_errors::CoreError, generate_pickup_code, services::Service},
    fulfillment::{
        entities::{Store, StoreRef, StoreSummary},
        ports::{PickupService, StoreRepository},
        value_objects::PickupSuggestion,
    },
    llm::ports::LLMClient,
    matching::{SIMILARITY_THRESHOLD, similarity_ratio},
    order::ports::OrderLogRepository,
    profile::ports::ProfileRepository,
    retrieval::ports::AlternativesIndex,
    safety::ports::{SubstitutionRepository, SynonymRepository},
};

/// Resolve raw cart entries to catalog SKUs: exact SKU, exact
/// lower-cased name, then fuzzy name above the shared threshold.
/// Unresolvable entries land in the second return value.
fn resolve_cart_skus(cart: &[String], products: &[Product]) -> (Vec<String>, Vec<String>) {
    let mut skus = Vec::new();
    let mut not_found = Vec::new();

    for item in cart {
        if products.iter().any(|p| p.sku == *item) {
            skus.push(item.clone());
            continue;
        }

        let item_lc = item.to_lowercase();
        if let Some(product) = products.iter().find(|p| p.name.to_lowercase() == item_lc) {
            skus.push(product.sku.clone());
            continue;
        }

        let mut best: Option<(usize, u32)> = None;
        for (index, product) in products.iter().enumerate() {
            let score = similarity_ratio(&item_lc, &product.name.to_lowercase());
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((index, score));
            }
        }
        match best {
            Some((index, score)) if score > SIMILARITY_THRESHOLD => {
                skus.push(products[index].sku.clone());
            }
            _ => not_found.push(item.clone()),
        }
    }

    (skus, not_found)
}

/// Choose the store with the strictly greatest in-stock count.
///
/// Stores arrive in lexicographic name order, so the first store wins
/// ties; a run over the same cart and roster always picks the same
/// store.
fn choose_store<'a>(stores: &'a [Store], cart_skus: &[String]) -> Option<&'a Store> {
    let mut best: Option<(&Store, i64)> = None;
    for store in stores {
        let packed_here = cart_skus
            .iter()
            .filter(|sku| store.available_skus.contains(*sku))
            .count() as i64;
        if best.is_none_or(|(_, count)| packed_here > count) {
            best = Some((store, packed_here));
        }
    }
    best.map(|(store, _)| store)
}

impl<CA, ST, SY, SU, PF, OR, L, AX> PickupService for Service<CA, ST, SY, SU, PF, OR, L, AX>
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
    async fn suggest_pickup(&self, items: Vec<String>) -> Result<PickupSuggestion, CoreError> {
        if items.is_empty() {
            return Err(CoreError::Validation("no cart provided".to_string()));
        }

        let products = self.catalog_repository.list().await?;
        let stores = self.store_repository.list().await?;

        let (cart_skus, not_found_items) = resolve_cart_skus(&items, &products);
        let chosen = choose_store(&stores, &cart_skus);

        let (packed, missing): (Vec<&String>, Vec<&String>) = match chosen {
            Some(store) => cart_skus
                .iter()
                .partition(|sku| store.available_skus.contains(*sku)),
            // No stores at all: everything is missing.
            None => (Vec::new(), cart_skus.iter().collect()),
        };

        let product_by_sku = |sku: &String| products.iter().find(|p| p.sku == *sku).cloned();
        let packed_items: Vec<Product> = packed.iter().filter_map(|s| product_by_sku(s)).collect();
        let missing_items: Vec<Product> = missing.iter().filter_map(|s| product_by_sku(s)).collect();

        // Best-effort: first other store stocking each missing item.
        // Coordinates are available but intentionally unused here.
        let mut nearest_stores_for_missing = BTreeMap::new();
        for item in &missing_items {
            let fallback = stores
                .iter()
                .filter(|store| Some(store.name.as_str()) != chosen.map(|s| s.name.as_str()))
                .find(|store| store.available_skus.contains(&item.sku));
            if let Some(store) = fallback {
                nearest_stores_for_missing.insert(
                    item.name.clone(),
                    StoreRef {
                        name: store.name.clone(),
                        address: store.address.clone(),
                    },
                );
            }
        }

        tracing::info!(
            store = chosen.map(|s| s.name.as_str()).unwrap_or("<none>"),
            packed = packed_items.len(),
            missing = missing_items.len(),
            not_found = not_found_items.len(),
            "pickup selection complete"
        );

        Ok(PickupSuggestion {
            store: chosen.map(StoreSummary::from),
            packed_items,
            missing_items,
            not_found_items,
            pickup_code: generate_pickup_code(),
            nearest_stores_for_missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_fixtures::{product, store, test_service};

    fn roster() -> Vec<Store> {
        vec![
            store("Store A", &["P1", "P2"]),
            store("Store B", &["P1", "P3"]),
        ]
    }

    fn stocked_service() -> crate::domain::test_fixtures::TestService {
        let mut service = test_service();
        service.catalog_repository.products = vec![
            product("peanut butter", "P1", &["peanuts"]),
            product("almond milk", "P2", &["tree nuts"]),
            product("bread", "P3", &[]),
        ];
        service.store_repository.stores = roster();
        service
    }

    #[tokio::test]
    async fn test_selects_store_with_greatest_coverage() {
        let suggestion = stocked_service()
            .suggest_pickup(vec!["P1".to_string(), "P2".to_string()])
            .await
            .unwrap();

        assert_eq!(suggestion.store.unwrap().name, "Store A");
        assert!(suggestion.missing_items.is_empty());
        assert_eq!(suggestion.packed_items.len(), 2);
    }

    #[tokio::test]
    async fn test_tie_breaks_to_lexicographically_first() {
        // Both stores stock P1 only; Store A must win the tie.
        let suggestion = stocked_service()
            .suggest_pickup(vec!["P1".to_string()])
            .await
            .unwrap();
        assert_eq!(suggestion.store.unwrap().name, "Store A");
    }

    #[tokio::test]
    async fn test_selection_is_idempotent() {
        let cart = vec!["P1".to_string(), "P3".to_string()];
        let first = stocked_service().suggest_pickup(cart.clone()).await.unwrap();
        let second = stocked_service().suggest_pickup(cart).await.unwrap();
        assert_eq!(first.store, second.store);
        assert_eq!(first.packed_items, second.packed_items);
        assert_eq!(first.missing_items, second.missing_items);
    }

    #[tokio::test]
    async fn test_packed_and_missing_partition_resolved_skus() {
        let suggestion = stocked_service()
            .suggest_pickup(vec![
                "P1".to_string(),
                "P2".to_string(),
                "bread".to_string(),
            ])
            .await
            .unwrap();

        let mut all: Vec<String> = suggestion
            .packed_items
            .iter()
            .chain(suggestion.missing_items.iter())
            .map(|p| p.sku.clone())
            .collect();
        all.sort();
        assert_eq!(all, vec!["P1", "P2", "P3"]);
        for packed in &suggestion.packed_items {
            assert!(!suggestion.missing_items.contains(packed));
        }
    }

    #[tokio::test]
    async fn test_missing_item_gets_fallback_store() {
        let suggestion = stocked_service()
            .suggest_pickup(vec!["P2".to_string(), "P3".to_string()])
            .await
            .unwrap();

        // Store A packs P2; P3 is missing and only Store B stocks it.
        assert_eq!(suggestion.store.unwrap().name, "Store A");
        let fallback = suggestion.nearest_stores_for_missing.get("bread").unwrap();
        assert_eq!(fallback.name, "Store B");
    }

    #[tokio::test]
    async fn test_fuzzy_and_exact_name_resolution() {
        let suggestion = stocked_service()
            .suggest_pickup(vec!["peanut buttr".to_string(), "gravel".to_string()])
            .await
            .unwrap();

        assert_eq!(suggestion.packed_items.len(), 1);
        assert_eq!(suggestion.packed_items[0].sku, "P1");
        assert_eq!(suggestion.not_found_items, vec!["gravel".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_cart_is_a_validation_error() {
        let err = stocked_service().suggest_pickup(Vec::new()).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_no_stores_leaves_everything_missing() {
        let mut service = stocked_service();
        service.store_repository.stores = Vec::new();

        let suggestion = service.suggest_pickup(vec!["P1".to_string()]).await.unwrap();
        assert!(suggestion.store.is_none());
        assert!(suggestion.packed_items.is_empty());
        assert_eq!(suggestion.missing_items.len(), 1);
    }

    #[tokio::test]
    async fn test_pickup_code_contract() {
        let suggestion = stocked_service()
            .suggest_pickup(vec!["P1".to_string()])
            .await
            .unwrap();
        assert_eq!(suggestion.pickup_code.len(), 8);
        assert!(
            suggestion
                .pickup_code
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }
}
