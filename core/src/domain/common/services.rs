use crate::domain::{
    catalog::ports::CatalogRepository,
    fulfillment::ports::StoreRepository,
    llm::ports::LLMClient,
    order::ports::OrderLogRepository,
    profile::ports::ProfileRepository,
    retrieval::ports::AlternativesIndex,
    safety::ports::{SubstitutionRepository, SynonymRepository},
};

/// Aggregate service holding one adapter per port. Each domain module
/// implements its service trait for this struct in its own `services.rs`.
#[derive(Debug, Clone)]
pub struct Service<CA, ST, SY, SU, PF, OR, L, AX>
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
    pub catalog_repository: CA,
    pub store_repository: ST,
    pub synonym_repository: SY,
    pub substitution_repository: SU,
    pub profile_repository: PF,
    pub order_log_repository: OR,
    pub llm_client: L,
    pub alternatives_index: AX,
}

impl<CA, ST, SY, SU, PF, OR, L, AX> Service<CA, ST, SY, SU, PF, OR, L, AX>
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
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        catalog_repository: CA,
        store_repository: ST,
        synonym_repository: SY,
        substitution_repository: SU,
        profile_repository: PF,
        order_log_repository: OR,
        llm_client: L,
        alternatives_index: AX,
    ) -> Self {
        Self {
            catalog_repository,
            store_repository,
            synonym_repository,
            substitution_repository,
            profile_repository,
            order_log_repository,
            llm_client,
            alternatives_index,
        }
    }
}
