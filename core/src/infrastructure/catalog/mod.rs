pub mod repository;

pub use repository::JsonCatalogRepository;
