pub mod repository;

pub use repository::JsonProfileRepository;
