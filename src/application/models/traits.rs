use crate::domain::errors::ScoreError;
use crate::domain::scoring::{ModelKind, ScoreRequest, ScoreResult};

/// A scoring heuristic callable through the engine.
///
/// Implementations hold no per-call state and convert every failure into a
/// [`ScoreError`] instead of panicking.
pub trait ScoringModel: Send + Sync {
    fn predict(&self, request: &ScoreRequest) -> Result<ScoreResult, ScoreError>;

    fn kind(&self) -> ModelKind;

    fn name(&self) -> &str {
        self.kind().as_str()
    }
}
