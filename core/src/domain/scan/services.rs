use crate::domain::{
    catalog::ports::CatalogRepository,
    common::{entities::app_errors::CoreError, services::Service},
    fulfillment::ports::StoreRepository,
    llm::ports::LLMClient,
    order::ports::OrderLogRepository,
    profile::{extractor::extract_restrictions, ports::ProfileRepository},
    retrieval::ports::AlternativesIndex,
    safety::ports::{SubstitutionRepository, SynonymRepository},
    scan::{entities::ScanReport, ports::ScanService},
};

const MAX_ALTERNATIVES: usize = 2;

impl<CA, ST, SY, SU, PF, OR, L, AX> ScanService for Service<CA, ST, SY, SU, PF, OR, L, AX>
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
    async fn scan_product(&self, sku: &str) -> Result<ScanReport, CoreError> {
        let profile = self
            .profile_repository
            .load()
            .await?
            .ok_or_else(|| CoreError::NotFound("user profile".to_string()))?;
        let restrictions = extract_restrictions(&profile);

        let product = self
            .catalog_repository
            .get_by_sku(sku)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("product for SKU {sku}")))?;

        let flagged_allergens: Vec<String> = product
            .allergens
            .iter()
            .map(|a| a.to_lowercase())
            .filter(|a| restrictions.allergies.contains(a))
            .collect();
        let is_safe = flagged_allergens.is_empty();

        let mut alternatives = Vec::new();
        for candidate in self.catalog_repository.list().await? {
            if candidate.sku == product.sku {
                continue;
            }
            let clashes = candidate
                .allergens
                .iter()
                .any(|a| restrictions.allergies.contains(&a.to_lowercase()));
            if !clashes {
                alternatives.push(candidate);
            }
            if alternatives.len() >= MAX_ALTERNATIVES {
                break;
            }
        }

        Ok(ScanReport {
            product,
            is_safe,
            flagged_allergens,
            alternatives,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_fixtures::{product, test_service};
    use serde_json::json;

    fn scan_service() -> crate::domain::test_fixtures::TestService {
        let mut service = test_service();
        service.catalog_repository.products = vec![
            product("peanut butter", "P1", &["peanuts"]),
            product("sunflower seed butter", "P2", &[]),
            product("almond butter", "P3", &["tree nuts"]),
            product("jam", "P4", &[]),
        ];
        service
            .profile_repository
            .set(json!({"allergies": ["peanuts"], "preferences": []}));
        service
    }

    #[tokio::test]
    async fn test_flagged_product_is_unsafe() {
        let report = scan_service().scan_product("P1").await.unwrap();
        assert!(!report.is_safe);
        assert_eq!(report.flagged_allergens, vec!["peanuts"]);
    }

    #[tokio::test]
    async fn test_alternatives_skip_clashing_products_and_cap_at_two() {
        let mut service = scan_service();
        service
            .profile_repository
            .set(json!({"allergies": ["peanuts", "tree nuts"]}));

        let report = service.scan_product("P1").await.unwrap();
        let names: Vec<&str> = report.alternatives.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["sunflower seed butter", "jam"]);
    }

    #[tokio::test]
    async fn test_clean_product_is_safe() {
        let report = scan_service().scan_product("P2").await.unwrap();
        assert!(report.is_safe);
        assert!(report.flagged_allergens.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_sku_is_not_found() {
        let err = scan_service().scan_product("NOPE").await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_missing_profile_is_not_found() {
        let service = test_service();
        let err = service.scan_product("P1").await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }
}
