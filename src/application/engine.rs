use crate::application::models::{
    FraudDetectionModel, PricePredictionModel, RiskAnalysisModel, ScoringModel,
};
use crate::domain::errors::ScoreError;
use crate::domain::ports::NoiseSource;
use crate::domain::scoring::{ScoreRequest, ScoreResult};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Routes a named scoring request to the registered model.
///
/// The registry is fixed once built; the engine is shared across request
/// handlers behind an `Arc` without locking.
pub struct ScoringEngine {
    models: HashMap<String, Arc<dyn ScoringModel>>,
    order: Vec<String>,
}

impl ScoringEngine {
    /// Engine with the three built-in models.
    pub fn standard(noise: Arc<dyn NoiseSource>) -> Self {
        Self::builder()
            .register(Arc::new(PricePredictionModel::new()))
            .register(Arc::new(RiskAnalysisModel::new()))
            .register(Arc::new(FraudDetectionModel::new(noise)))
            .build()
    }

    pub fn builder() -> ScoringEngineBuilder {
        ScoringEngineBuilder::default()
    }

    /// Exact, case-sensitive lookup followed by delegation.
    pub fn predict(
        &self,
        model_name: &str,
        payload: &ScoreRequest,
    ) -> Result<ScoreResult, ScoreError> {
        let model = self.lookup(model_name)?;
        Self::run(model_name, model.as_ref(), payload)
    }

    /// Like [`ScoringEngine::predict`] for an untyped payload. The model is
    /// resolved before the payload is checked, so an unknown name always wins.
    pub fn predict_value(
        &self,
        model_name: &str,
        payload: Value,
    ) -> Result<ScoreResult, ScoreError> {
        let model = self.lookup(model_name)?;
        let request = ScoreRequest::try_from(payload)?;
        Self::run(model_name, model.as_ref(), &request)
    }

    fn lookup(&self, model_name: &str) -> Result<&Arc<dyn ScoringModel>, ScoreError> {
        self.models.get(model_name).ok_or_else(|| {
            warn!("Scoring request for unknown model '{}'", model_name);
            ScoreError::UnknownModel {
                name: model_name.to_string(),
            }
        })
    }

    fn run(
        model_name: &str,
        model: &dyn ScoringModel,
        payload: &ScoreRequest,
    ) -> Result<ScoreResult, ScoreError> {
        let result = model.predict(payload);
        match &result {
            Ok(score) => debug!(
                "Model {} scored {:.4} (confidence {})",
                model_name,
                score.primary_value(),
                score.confidence
            ),
            Err(e) => debug!("Model {} rejected request: {}", model_name, e),
        }
        result
    }

    /// Registered model names in registration order.
    pub fn model_names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    pub fn contains(&self, model_name: &str) -> bool {
        self.models.contains_key(model_name)
    }
}

#[derive(Default)]
pub struct ScoringEngineBuilder {
    models: HashMap<String, Arc<dyn ScoringModel>>,
    order: Vec<String>,
}

impl ScoringEngineBuilder {
    /// Registers a model under its own name. A later registration with the
    /// same name replaces the earlier one but keeps its position.
    pub fn register(mut self, model: Arc<dyn ScoringModel>) -> Self {
        let name = model.name().to_string();
        if self.models.insert(name.clone(), model).is_none() {
            self.order.push(name);
        }
        self
    }

    pub fn build(self) -> ScoringEngine {
        ScoringEngine {
            models: self.models,
            order: self.order,
        }
    }
}
