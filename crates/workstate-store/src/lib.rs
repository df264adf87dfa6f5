pub mod memory;

// Re-export commonly used types
pub use memory::MemoryStore;
