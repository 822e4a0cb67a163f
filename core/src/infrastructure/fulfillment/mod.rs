pub mod repository;

pub use repository::JsonStoreRepository;
