pub mod repository;

pub use repository::{JsonSubstitutionRepository, JsonSynonymRepository};
