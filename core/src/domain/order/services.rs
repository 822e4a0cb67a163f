use crate::domain::{
    catalog::ports::CatalogRepository,
    common::{entities::app_errors::CoreError, services::Service},
    fulfillment::ports::StoreRepository,
    llm::ports::LLMClient,
    order::{
        entities::Order,
        ports::{OrderLogRepository, OrderService},
        value_objects::PlaceOrderInput,
    },
    profile::ports::ProfileRepository,
    retrieval::ports::AlternativesIndex,
    safety::ports::{SubstitutionRepository, SynonymRepository},
};

impl<CA, ST, SY, SU, PF, OR, L, AX> OrderService for Service<CA, ST, SY, SU, PF, OR, L, AX>
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
    async fn place_order(&self, input: PlaceOrderInput) -> Result<Order, CoreError> {
        let store = input
            .store
            .ok_or_else(|| CoreError::Validation("missing required order fields".to_string()))?;
        let pickup_code = input
            .pickup_code
            .filter(|code| !code.is_empty())
            .ok_or_else(|| CoreError::Validation("missing required order fields".to_string()))?;
        if input.cart.is_empty() {
            return Err(CoreError::Validation(
                "missing required order fields".to_string(),
            ));
        }

        let order = Order::new(
            input.cart,
            input.quantities,
            store,
            pickup_code,
            input.profile,
        );
        let order = self.order_log_repository.append(order).await?;

        tracing::info!(order_id = %order.order_id, "order placed");
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fulfillment::entities::StoreSummary;
    use crate::domain::test_fixtures::test_service;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn store_summary() -> StoreSummary {
        StoreSummary {
            name: "Store A".to_string(),
            address: "1 Main St".to_string(),
            lat: 0.0,
            lon: 0.0,
        }
    }

    fn valid_input() -> PlaceOrderInput {
        PlaceOrderInput {
            cart: vec![json!("peanut butter")],
            quantities: BTreeMap::from([("peanut butter".to_string(), 2)]),
            store: Some(store_summary()),
            pickup_code: Some("A1B2C3D4".to_string()),
            profile: json!({"allergies": ["peanuts"]}),
        }
    }

    #[tokio::test]
    async fn test_place_order_appends_to_log() {
        let service = test_service();
        let order = service.place_order(valid_input()).await.unwrap();

        assert_eq!(order.order_id.len(), 10);
        assert!(
            order
                .order_id
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
        let log = service.order_log_repository.orders.lock().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].order_id, order.order_id);
    }

    #[tokio::test]
    async fn test_missing_cart_is_rejected() {
        let mut input = valid_input();
        input.cart = Vec::new();
        let err = test_service().place_order(input).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_missing_store_is_rejected() {
        let mut input = valid_input();
        input.store = None;
        let err = test_service().place_order(input).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_missing_pickup_code_is_rejected() {
        let mut input = valid_input();
        input.pickup_code = Some(String::new());
        let err = test_service().place_order(input).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
