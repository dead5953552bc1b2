// Scoring models
pub mod models;

// Model registry and dispatch
pub mod engine;
