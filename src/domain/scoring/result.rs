use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a built-in scoring model, as used in dispatch requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    PricePrediction,
    RiskAnalysis,
    FraudDetection,
}

impl ModelKind {
    /// Registry order.
    pub const ALL: [ModelKind; 3] = [
        ModelKind::PricePrediction,
        ModelKind::RiskAnalysis,
        ModelKind::FraudDetection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::PricePrediction => "price_prediction",
            ModelKind::RiskAnalysis => "risk_analysis",
            ModelKind::FraudDetection => "fraud_detection",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Thresholds are exclusive: 70 is MEDIUM, 40 is LOW.
    pub fn from_score(score: u8) -> Self {
        if score > 70 {
            RiskLevel::High
        } else if score > 40 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::High => write!(f, "HIGH"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::Low => write!(f, "LOW"),
        }
    }
}

/// Model-specific part of a [`ScoreResult`], flattened into the same JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoreOutcome {
    Price { prediction: f64 },
    Risk { risk_score: u8, risk_level: RiskLevel },
    Fraud { fraud_score: u8, is_fraud: bool },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    #[serde(flatten)]
    pub outcome: ScoreOutcome,
    pub confidence: u8,
    pub timestamp: DateTime<Utc>,
    pub model: ModelKind,
}

impl ScoreResult {
    /// Stamps the outcome with the evaluation time. Confidence is capped at 100.
    pub fn new(model: ModelKind, outcome: ScoreOutcome, confidence: u8) -> Self {
        Self {
            outcome,
            confidence: confidence.min(100),
            timestamp: Utc::now(),
            model,
        }
    }

    /// Headline number of the result: predicted price, risk score or fraud score.
    pub fn primary_value(&self) -> f64 {
        match self.outcome {
            ScoreOutcome::Price { prediction } => prediction,
            ScoreOutcome::Risk { risk_score, .. } => f64::from(risk_score),
            ScoreOutcome::Fraud { fraud_score, .. } => f64::from(fraud_score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_thresholds_are_exclusive() {
        assert_eq!(RiskLevel::from_score(71), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(70), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(41), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(40), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
    }

    #[test]
    fn test_result_serializes_flat() {
        let result = ScoreResult::new(
            ModelKind::RiskAnalysis,
            ScoreOutcome::Risk {
                risk_score: 90,
                risk_level: RiskLevel::High,
            },
            85,
        );

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["risk_score"], 90);
        assert_eq!(json["risk_level"], "HIGH");
        assert_eq!(json["confidence"], 85);
        assert_eq!(json["model"], "risk_analysis");
        assert!(json["timestamp"].is_string());
        assert!(json.get("outcome").is_none());
    }

    #[test]
    fn test_confidence_is_capped() {
        let result = ScoreResult::new(
            ModelKind::PricePrediction,
            ScoreOutcome::Price { prediction: 1.0 },
            250,
        );

        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn test_primary_value() {
        let fraud = ScoreResult::new(
            ModelKind::FraudDetection,
            ScoreOutcome::Fraud {
                fraud_score: 42,
                is_fraud: false,
            },
            65,
        );

        assert_eq!(fraud.primary_value(), 42.0);
    }

    #[test]
    fn test_model_kind_names() {
        let names: Vec<&str> = ModelKind::ALL.iter().map(ModelKind::as_str).collect();
        assert_eq!(
            names,
            vec!["price_prediction", "risk_analysis", "fraud_detection"]
        );
        assert_eq!(
            serde_json::to_value(ModelKind::FraudDetection).unwrap(),
            "fraud_detection"
        );
    }
}
