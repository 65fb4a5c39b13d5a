pub mod json_backend;

use crate::{domain::HotelRegister, errors::HotelError};

pub type Result<T> = std::result::Result<T, HotelError>;

/// Abstraction over persistence backends capable of storing hotel registers
/// and snapshots. The register travels as one document; backends only need
/// whole-document reads and writes.
pub trait StorageBackend: Send + Sync {
    fn save(&self, register: &HotelRegister, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<HotelRegister>;
    fn exists(&self, name: &str) -> bool;
    fn list_backups(&self, name: &str) -> Result<Vec<String>>;
    fn backup(&self, register: &HotelRegister, name: &str, note: Option<&str>) -> Result<()>;
    fn restore(&self, name: &str, backup_name: &str) -> Result<HotelRegister>;
}

pub use json_backend::JsonStorage;
