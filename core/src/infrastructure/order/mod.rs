pub mod repository;

pub use repository::JsonOrderLogRepository;
