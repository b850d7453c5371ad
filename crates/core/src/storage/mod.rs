pub mod store;

// Store implementations
pub mod fallback;
pub mod local;
pub mod remote;
