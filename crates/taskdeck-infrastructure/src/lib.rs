//! Persistence adapters for taskdeck.
//!
//! This crate implements the [`taskdeck_core::TaskListRepository`] trait
//! over concrete backends: a JSON single-document file (the desktop
//! analogue of browser key-value storage) and an in-memory map for tests
//! and storage-unavailable fallback. It also owns the stored-record DTO
//! shapes, path resolution, and the optional storage configuration file.

pub mod config;
pub mod dto;
pub mod json_file_repository;
pub mod memory_repository;
pub mod paths;

pub use config::StorageConfig;
pub use json_file_repository::JsonFileTaskRepository;
pub use memory_repository::MemoryTaskRepository;
pub use paths::TaskdeckPaths;
