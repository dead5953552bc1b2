// Scoring requests, results and numeric helpers
pub mod scoring;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
