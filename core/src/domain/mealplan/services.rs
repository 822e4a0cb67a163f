use crate::domain::{
    catalog::{ports::CatalogRepository, services::resolve_product},
    common::{entities::app_errors::CoreError, services::Service},
    fulfillment::ports::StoreRepository,
    llm::ports::LLMClient,
    mealplan::{
        entities::{MealPlan, MealPlanRequest, PricedIngredient, PricedMealPlan},
        ports::MealPlanService,
        schema::get_meal_plan_schema,
    },
    order::ports::OrderLogRepository,
    profile::ports::ProfileRepository,
    retrieval::ports::AlternativesIndex,
    safety::ports::{SubstitutionRepository, SynonymRepository},
};

fn build_meal_prompt(request: &MealPlanRequest) -> String {
    format!(
        "Plan a {diet} dinner for {servings} under {budget} using only \
         ingredients commonly available at a grocery store. Avoid {restrictions}. \
         Must be cooked in under {time_limit}.\n\
         Respond ONLY with valid JSON:\n\
         {{\n  \"meal_name\": \"...\",\n  \"ingredients\": [{{\"name\":\"...\",\"quantity\":\"...\"}}],\n  \
         \"instructions\": [\"step1\",\"step2\"]\n}}\n",
        diet = request.diet,
        servings = request.servings,
        budget = request.budget,
        restrictions = request.restrictions,
        time_limit = request.time_limit,
    )
}

impl<CA, ST, SY, SU, PF, OR, L, AX> MealPlanService for Service<CA, ST, SY, SU, PF, OR, L, AX>
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
    async fn generate_meal_plan(
        &self,
        request: MealPlanRequest,
    ) -> Result<PricedMealPlan, CoreError> {
        let prompt = build_meal_prompt(&request);
        let raw = self
            .llm_client
            .generate_json(prompt, get_meal_plan_schema())
            .await?;

        let plan: MealPlan = serde_json::from_str(&raw).map_err(|e| {
            tracing::error!("invalid meal plan payload: {e}");
            CoreError::ParseFailure(format!("invalid meal plan payload: {e}"))
        })?;

        let mut cart = Vec::new();
        let mut total = 0.0;
        for ingredient in &plan.ingredients {
            // Unresolvable ingredients are skipped from pricing, not errors.
            let Some(product) = resolve_product(&self.catalog_repository, &ingredient.name).await?
            else {
                continue;
            };
            total += product.price;
            cart.push(PricedIngredient {
                name: ingredient.name.clone(),
                quantity: ingredient.quantity.clone(),
                price: product.price,
            });
        }

        Ok(PricedMealPlan {
            meal_name: plan.meal_name,
            ingredients: plan.ingredients,
            instructions: plan.instructions,
            cart,
            total,
        })
    }
}
