use crate::domain::{
    catalog::ports::CatalogRepository,
    common::{entities::app_errors::CoreError, services::Service},
    fulfillment::ports::StoreRepository,
    llm::ports::LLMClient,
    order::ports::OrderLogRepository,
    profile::ports::ProfileRepository,
    retrieval::ports::AlternativesIndex,
    safety::ports::{SubstitutionRepository, SynonymRepository},
    vision::{entities::VisionReport, ports::VisionService},
};

const DETECT_PROMPT: &str = "List out the potential allergens in the food shown in this image. \
     Be concise and list them clearly, separated by commas. \
     For example: 'gluten, dairy, nuts'.";

const ALTERNATIVES_TOP_K: usize = 5;

/// Split the model's comma-separated answer into lower-cased terms.
pub fn parse_allergen_terms(text: &str) -> Vec<String> {
    text.split(',')
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}

impl<CA, ST, SY, SU, PF, OR, L, AX> VisionService for Service<CA, ST, SY, SU, PF, OR, L, AX>
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
    async fn detect_allergens(
        &self,
        image_data: Vec<u8>,
        mime_type: String,
    ) -> Result<VisionReport, CoreError> {
        let allergens_text = self
            .llm_client
            .generate_text_with_image(
                DETECT_PROMPT.to_string(),
                image_data.clone(),
                mime_type.clone(),
            )
            .await?;

        let identified_allergens = parse_allergen_terms(&allergens_text);

        let mut alternatives_info = Vec::new();
        if identified_allergens.is_empty() {
            alternatives_info
                .push("No specific allergens identified in the image.".to_string());
        }
        for allergen in &identified_allergens {
            // Enrichment only: a lookup failure degrades to "no
            // alternatives" instead of failing the detection.
            let found = match self
                .alternatives_index
                .find_alternatives(
                    &format!("alternative to {allergen}"),
                    allergen,
                    ALTERNATIVES_TOP_K,
                )
                .await
            {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!("alternatives lookup failed for {allergen}: {e}");
                    Vec::new()
                }
            };

            if found.is_empty() {
                alternatives_info.push(format!("No in-stock alternatives found for '{allergen}'."));
            } else {
                let listing: Vec<String> = found
                    .iter()
                    .map(|item| {
                        let contains = if item.allergens.is_empty() {
                            "none".to_string()
                        } else {
                            item.allergens.join(", ")
                        };
                        format!("- {} ({}). Contains: {}.", item.name, item.description, contains)
                    })
                    .collect();
                alternatives_info.push(format!(
                    "For '{allergen}', consider these in-stock alternatives:\n{}",
                    listing.join("\n")
                ));
            }
        }

        let summary_prompt = format!(
            "Based on the image, the identified allergens are: {allergens_text}.\n\n\
             Here is information about potential in-stock alternatives from our store:\n\
             {}\n\n\
             Please provide a comprehensive response that lists the potential allergens \
             in the food shown in the image, and for each allergen, suggest alternative \
             ingredients or products from the provided in-stock list. If no suitable \
             in-stock alternative is found, suggest a general alternative. \
             Be clear, concise, and helpful.",
            alternatives_info.join("\n")
        );

        let summary = self
            .llm_client
            .generate_text_with_image(summary_prompt, image_data, mime_type)
            .await?;

        Ok(VisionReport {
            identified_allergens,
            summary,
        })
    }
}
