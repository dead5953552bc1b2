// Scoring value objects shared by every model
pub mod request;
pub mod result;
pub mod stats;

pub use request::ScoreRequest;
pub use result::{ModelKind, RiskLevel, ScoreOutcome, ScoreResult};
