use super::traits::ScoringModel;
use crate::domain::errors::ScoreError;
use crate::domain::ports::NoiseSource;
use crate::domain::scoring::stats::mean;
use crate::domain::scoring::{ModelKind, ScoreOutcome, ScoreRequest, ScoreResult};
use std::sync::Arc;

const UNUSUAL_AMOUNT_MULTIPLIER: f64 = 3.0;
const UNUSUAL_AMOUNT_POINTS: u32 = 40;
const HIGH_SPEED: f64 = 10.0;
const HIGH_SPEED_POINTS: u32 = 30;
const NOISE_CEILING: u32 = 20;
const FRAUD_THRESHOLD: u8 = 60;

/// Rule-based fraud likelihood with a random jitter term.
///
/// Rules: an amount over three times the user's average (+40) and more than
/// ten transactions per hour (+30). The jitter comes from the injected
/// [`NoiseSource`] and lies in [0, 20).
#[derive(Clone)]
pub struct FraudDetectionModel {
    noise: Arc<dyn NoiseSource>,
}

impl FraudDetectionModel {
    pub fn new(noise: Arc<dyn NoiseSource>) -> Self {
        Self { noise }
    }

    fn confidence(fraud_score: u8) -> u8 {
        if fraud_score > 70 || fraud_score < 30 {
            80
        } else {
            65
        }
    }
}

impl ScoringModel for FraudDetectionModel {
    fn predict(&self, request: &ScoreRequest) -> Result<ScoreResult, ScoreError> {
        let amount = request.number("amount", 0.0)?;
        let user_history = request.numbers("user_history")?;
        let speed = request.number("speed", 1.0)?;

        let mut fraud_score: u32 = 0;

        if let Some(average) = mean(&user_history) {
            if amount > average * UNUSUAL_AMOUNT_MULTIPLIER {
                fraud_score += UNUSUAL_AMOUNT_POINTS;
            }
        }

        if speed > HIGH_SPEED {
            fraud_score += HIGH_SPEED_POINTS;
        }

        let jitter = self.noise.next_below(NOISE_CEILING);
        fraud_score += jitter;

        let fraud_score = fraud_score.min(100) as u8;
        let is_fraud = fraud_score > FRAUD_THRESHOLD;

        tracing::debug!(
            "FraudDetection: amount={} history_len={} speed={} jitter={} -> score={} is_fraud={}",
            amount,
            user_history.len(),
            speed,
            jitter,
            fraud_score,
            is_fraud
        );

        Ok(ScoreResult::new(
            ModelKind::FraudDetection,
            ScoreOutcome::Fraud {
                fraud_score,
                is_fraud,
            },
            Self::confidence(fraud_score),
        ))
    }

    fn kind(&self) -> ModelKind {
        ModelKind::FraudDetection
    }
}
