// Utility functions
// Helper functions for common operations

pub mod data_state;
pub mod request_generation;

pub use data_state::DataState;
pub use request_generation::RequestGeneration;
