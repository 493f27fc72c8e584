#![forbid(unsafe_code)]

pub mod csv_file;
pub mod repository;

pub use csv_file::CsvRepository;
pub use repository::{InMemoryRepository, Storage, StorageError, StudyLogRepository};
