//! Employee storage adapters.

mod doc;
pub mod jsonfile;
pub mod memory;

pub use jsonfile::JsonFileEmployeeStore;
pub use memory::MemoryEmployeeStore;
