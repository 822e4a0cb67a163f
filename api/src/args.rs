use cartwise_core::domain::common::{CartwiseConfig, DataConfig, LLMConfig, RetrievalConfig};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "cartwise-api", about = "Smart shopping assistant API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,
    #[command(flatten)]
    pub llm: LlmArgs,
    #[command(flatten)]
    pub retrieval: RetrievalArgs,
    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "CARTWISE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "CARTWISE_PORT", default_value_t = 5050)]
    pub port: u16,

    /// Prefix for every route, e.g. "/api".
    #[arg(long, env = "CARTWISE_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "CARTWISE_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "CARTWISE_LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_EMBEDDING_MODEL", default_value = "embedding-001")]
    pub embedding_model: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RetrievalArgs {
    /// Vector index endpoint; empty disables alternatives enrichment.
    #[arg(long, env = "VECTOR_INDEX_ENDPOINT", default_value = "")]
    pub vector_index_endpoint: String,

    #[arg(long, env = "VECTOR_INDEX_API_KEY", default_value = "", hide_env_values = true)]
    pub vector_index_api_key: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DataArgs {
    #[arg(long, env = "CARTWISE_PRODUCTS_PATH", default_value = "data/products.json")]
    pub products_path: String,

    #[arg(long, env = "CARTWISE_STORES_PATH", default_value = "data/stores.json")]
    pub stores_path: String,

    #[arg(long, env = "CARTWISE_SYNONYMS_PATH", default_value = "data/allergens.json")]
    pub synonyms_path: String,

    #[arg(
        long,
        env = "CARTWISE_SUBSTITUTIONS_PATH",
        default_value = "data/substitutions.json"
    )]
    pub substitutions_path: String,

    #[arg(long, env = "CARTWISE_PROFILE_PATH", default_value = "data/profile.json")]
    pub profile_path: String,

    #[arg(long, env = "CARTWISE_ORDERS_PATH", default_value = "data/orders.json")]
    pub orders_path: String,
}

impl From<Args> for CartwiseConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                embedding_model: args.llm.embedding_model,
            },
            retrieval: RetrievalConfig {
                endpoint: args.retrieval.vector_index_endpoint,
                api_key: args.retrieval.vector_index_api_key,
            },
            data: DataConfig {
                products_path: args.data.products_path,
                stores_path: args.data.stores_path,
                synonyms_path: args.data.synonyms_path,
                substitutions_path: args.data.substitutions_path,
                profile_path: args.data.profile_path,
                orders_path: args.data.orders_path,
            },
        }
    }
}
