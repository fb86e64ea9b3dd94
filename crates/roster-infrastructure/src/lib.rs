pub mod config_service;
pub mod dto;
pub mod paths;
pub mod remote_source;
pub mod state_repository;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::paths::RosterPaths;
pub use crate::remote_source::HttpEmployeeSource;
pub use crate::state_repository::KeyValueStateRepository;
pub use crate::storage::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};
