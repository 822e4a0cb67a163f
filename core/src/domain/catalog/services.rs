use crate::domain::{
    catalog::{entities::Product, ports::CatalogRepository},
    common::entities::app_errors::CoreError,
    matching::{SIMILARITY_THRESHOLD, similarity_ratio},
};

/// Resolve a free-text item name to a catalog product.
///
/// Exact match on the lower-cased name first; on miss, the best fuzzy
/// candidate is accepted only with a score strictly above the shared
/// threshold. Below threshold, no result is returned.
pub async fn resolve_product<C>(catalog: &C, name: &str) -> Result<Option<Product>, CoreError>
where
    C: CatalogRepository,
{
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() {
        return Ok(None);
    }

    if let Some(product) = catalog.get_by_name(&wanted).await? {
        return Ok(Some(product));
    }

    let products = catalog.list().await?;
    let mut best: Option<(usize, u32)> = None;
    for (index, product) in products.iter().enumerate() {
        let score = similarity_ratio(&wanted, &product.name.to_lowercase());
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((index, score));
        }
    }

    match best {
        Some((index, score)) if score > SIMILARITY_THRESHOLD => Ok(Some(products[index].clone())),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_fixtures::{InMemoryCatalog, product};

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![
            product("peanut butter", "P1", &["peanuts"]),
            product("almond milk", "P2", &["tree nuts"]),
            product("bread", "P3", &[]),
        ])
    }

    #[tokio::test]
    async fn test_exact_match_is_case_insensitive() {
        let found = resolve_product(&catalog(), "Peanut Butter").await.unwrap();
        assert_eq!(found.unwrap().sku, "P1");
    }

    #[tokio::test]
    async fn test_fuzzy_match_above_threshold() {
        let found = resolve_product(&catalog(), "peanut buttr").await.unwrap();
        assert_eq!(found.unwrap().sku, "P1");
    }

    #[tokio::test]
    async fn test_below_threshold_returns_none() {
        let found = resolve_product(&catalog(), "motor oil").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_empty_name_returns_none() {
        let found = resolve_product(&catalog(), "   ").await.unwrap();
        assert!(found.is_none());
    }
}
