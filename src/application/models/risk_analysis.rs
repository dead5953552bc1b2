use super::traits::ScoringModel;
use crate::domain::errors::ScoreError;
use crate::domain::scoring::{ModelKind, RiskLevel, ScoreOutcome, ScoreRequest, ScoreResult};

const LARGE_AMOUNT: f64 = 10_000.0;
const MEDIUM_AMOUNT: f64 = 5_000.0;
const HISTORY_WEIGHT: f64 = 0.3;
const VOLATILITY_WEIGHT: f64 = 40.0;
const CONFIDENCE: u8 = 85;

/// Additive transaction risk score in [0, 100].
///
/// Three terms: a tier for the transaction amount, the shortfall of the
/// counterparty's history score from 100, and market volatility.
#[derive(Debug, Clone, Default)]
pub struct RiskAnalysisModel;

impl RiskAnalysisModel {
    pub fn new() -> Self {
        Self
    }

    fn amount_risk(amount: f64) -> f64 {
        if amount > LARGE_AMOUNT {
            30.0
        } else if amount > MEDIUM_AMOUNT {
            20.0
        } else {
            10.0
        }
    }
}

impl ScoringModel for RiskAnalysisModel {
    fn predict(&self, request: &ScoreRequest) -> Result<ScoreResult, ScoreError> {
        let amount = request.number("amount", 0.0)?;
        let history_score = request.number("history_score", 50.0)?;
        let volatility = request.number("volatility", 0.5)?;

        let raw = Self::amount_risk(amount)
            + (100.0 - history_score) * HISTORY_WEIGHT
            + volatility * VOLATILITY_WEIGHT;

        if raw.is_nan() {
            return Err(ScoreError::computation("risk score is not a number"));
        }

        let risk_score = raw.clamp(0.0, 100.0).trunc() as u8;
        let risk_level = RiskLevel::from_score(risk_score);

        tracing::debug!(
            "RiskAnalysis: amount={} history_score={} volatility={} -> raw={:.4} score={} level={}",
            amount,
            history_score,
            volatility,
            raw,
            risk_score,
            risk_level
        );

        Ok(ScoreResult::new(
            ModelKind::RiskAnalysis,
            ScoreOutcome::Risk {
                risk_score,
                risk_level,
            },
            CONFIDENCE,
        ))
    }

    fn kind(&self) -> ModelKind {
        ModelKind::RiskAnalysis
    }
}
