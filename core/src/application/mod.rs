use crate::{
    domain::common::{CartwiseConfig, services::Service},
    infrastructure::{
        catalog::JsonCatalogRepository,
        fulfillment::JsonStoreRepository,
        llm::GeminiLLMClient,
        order::JsonOrderLogRepository,
        profile::JsonProfileRepository,
        retrieval::HttpAlternativesIndex,
        safety::{JsonSubstitutionRepository, JsonSynonymRepository},
    },
};

/// The concrete service wired with the flat-file and HTTP adapters.
pub type CartwiseService = Service<
    JsonCatalogRepository,
    JsonStoreRepository,
    JsonSynonymRepository,
    JsonSubstitutionRepository,
    JsonProfileRepository,
    JsonOrderLogRepository,
    GeminiLLMClient,
    HttpAlternativesIndex,
>;

/// Load the static reference data and wire every adapter.
pub async fn create_service(config: CartwiseConfig) -> Result<CartwiseService, anyhow::Error> {
    let catalog_repository = JsonCatalogRepository::load(&config.data.products_path).await?;
    let store_repository = JsonStoreRepository::load(&config.data.stores_path).await?;
    let synonym_repository = JsonSynonymRepository::load(&config.data.synonyms_path).await?;
    let substitution_repository =
        JsonSubstitutionRepository::load(&config.data.substitutions_path).await?;
    let profile_repository = JsonProfileRepository::new(&config.data.profile_path);
    let order_log_repository = JsonOrderLogRepository::new(&config.data.orders_path);

    let llm_client = GeminiLLMClient::new(
        config.llm.gemini_api_key.clone(),
        config.llm.gemini_model.clone(),
    );
    let alternatives_index = HttpAlternativesIndex::new(config.retrieval, config.llm);

    Ok(Service::new(
        catalog_repository,
        store_repository,
        synonym_repository,
        substitution_repository,
        profile_repository,
        order_log_repository,
        llm_client,
        alternatives_index,
    ))
}
