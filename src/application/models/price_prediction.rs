use super::traits::ScoringModel;
use crate::domain::errors::ScoreError;
use crate::domain::scoring::stats::{mean, population_std_dev};
use crate::domain::scoring::{ModelKind, ScoreOutcome, ScoreRequest, ScoreResult};

const MIN_PRICES: usize = 2;
const RECENT_WINDOW: usize = 5;
const TREND_WEIGHT: f64 = 2.0;
const MIN_CONFIDENCE: f64 = 50.0;
const MAX_CONFIDENCE: f64 = 95.0;

/// Short-horizon price estimate: recent moving average nudged by the overall trend.
///
/// Confidence falls by 10 points per unit of population standard deviation in
/// the recent window and is held within [50, 95].
#[derive(Debug, Clone, Default)]
pub struct PricePredictionModel;

impl PricePredictionModel {
    pub fn new() -> Self {
        Self
    }
}

impl ScoringModel for PricePredictionModel {
    fn predict(&self, request: &ScoreRequest) -> Result<ScoreResult, ScoreError> {
        let prices = request.numbers("prices")?;
        if prices.len() < MIN_PRICES {
            return Err(ScoreError::InsufficientData {
                required: MIN_PRICES,
                actual: prices.len(),
            });
        }

        let recent = &prices[prices.len().saturating_sub(RECENT_WINDOW)..];
        let average = mean(recent).ok_or_else(|| ScoreError::computation("empty price window"))?;

        let first = prices[0];
        let last = prices[prices.len() - 1];
        let trend = (last - first) / prices.len() as f64;
        let prediction = average + trend * TREND_WEIGHT;

        let volatility = population_std_dev(recent).unwrap_or(0.0);

        if !prediction.is_finite() || !volatility.is_finite() {
            return Err(ScoreError::computation(
                "price prediction overflowed: inputs are out of range",
            ));
        }

        // Integer conversion truncates toward zero before clamping.
        let confidence = (100.0 - volatility * 10.0)
            .trunc()
            .clamp(MIN_CONFIDENCE, MAX_CONFIDENCE) as u8;

        tracing::debug!(
            "PricePrediction: n={} mean={:.4} trend={:.4} volatility={:.4} -> prediction={:.4} confidence={}",
            prices.len(),
            average,
            trend,
            volatility,
            prediction,
            confidence
        );

        Ok(ScoreResult::new(
            ModelKind::PricePrediction,
            ScoreOutcome::Price { prediction },
            confidence,
        ))
    }

    fn kind(&self) -> ModelKind {
        ModelKind::PricePrediction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn prices(values: serde_json::Value) -> ScoreRequest {
        ScoreRequest::new().with("prices", values)
    }

    fn predicted(result: &ScoreResult) -> f64 {
        match result.outcome {
            ScoreOutcome::Price { prediction } => prediction,
            ref other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_five_price_example() {
        let model = PricePredictionModel::new();
        let result = model.predict(&prices(json!([10, 12, 11, 13, 14]))).unwrap();

        // mean 12 + trend (14 - 10) / 5 * 2
        assert!((predicted(&result) - 13.6).abs() < 1e-9);
        // std = sqrt(2), 100 - 14.14 truncates to 85
        assert_eq!(result.confidence, 85);
        assert_eq!(result.model, ModelKind::PricePrediction);
    }

    #[test]
    fn test_uses_last_five_for_average_and_full_series_for_trend() {
        let model = PricePredictionModel::new();
        let result = model
            .predict(&prices(json!([0, 100, 10, 10, 10, 10, 10])))
            .unwrap();

        // recent = [10, 10, 10, 10, 10], trend = (10 - 0) / 7
        let expected = 10.0 + (10.0 / 7.0) * 2.0;
        assert!((predicted(&result) - expected).abs() < 1e-9);
        assert_eq!(result.confidence, 95);
    }

    #[test]
    fn test_insufficient_data() {
        let model = PricePredictionModel::new();

        let one = model.predict(&prices(json!([10]))).unwrap_err();
        let none = model.predict(&ScoreRequest::new()).unwrap_err();

        assert_eq!(one.to_string(), "Insufficient data");
        assert_eq!(none.to_string(), "Insufficient data");
    }

    #[test]
    fn test_confidence_floor_for_volatile_prices() {
        let model = PricePredictionModel::new();
        let result = model.predict(&prices(json!([1, 1000, 1, 1000]))).unwrap();

        assert_eq!(result.confidence, 50);
    }

    #[test]
    fn test_confidence_always_within_bounds() {
        let model = PricePredictionModel::new();
        let series = [
            json!([1, 2]),
            json!([5.5, 5.5, 5.5]),
            json!([100, 90, 80, 70, 60, 50, 40]),
            json!([-3, 7, -11, 13]),
            json!([0.001, 0.002, 0.0015]),
        ];

        for values in series {
            let result = model.predict(&prices(values.clone())).unwrap();
            assert!(
                (50..=95).contains(&result.confidence),
                "confidence {} out of range for {}",
                result.confidence,
                values
            );
        }
    }

    #[test]
    fn test_malformed_prices_are_reported() {
        let model = PricePredictionModel::new();
        let err = model.predict(&prices(json!("10,12"))).unwrap_err();

        assert!(matches!(err, ScoreError::InvalidField { .. }));
    }

    #[test]
    fn test_overflow_is_a_computation_error() {
        let model = PricePredictionModel::new();
        let err = model
            .predict(&prices(json!([1.0e308, 1.7e308, 1.7e308])))
            .unwrap_err();

        assert!(matches!(err, ScoreError::ComputationError { .. }));
    }
}
