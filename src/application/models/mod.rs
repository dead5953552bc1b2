mod fraud_detection;
mod price_prediction;
mod risk_analysis;
mod traits;

pub use fraud_detection::FraudDetectionModel;
pub use price_prediction::PricePredictionModel;
pub use risk_analysis::RiskAnalysisModel;
pub use traits::ScoringModel;
