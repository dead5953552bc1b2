use crate::domain::ports::NoiseSource;
use crate::infrastructure::noise::{SeededNoise, ThreadRngNoise, ZeroNoise};
use anyhow::{Context, Result};
use std::env;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub fraud_noise_enabled: bool,
    pub fraud_noise_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5001,
            fraud_noise_enabled: true,
            fraud_noise_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Failed to parse PORT: {}", raw))?,
            None => defaults.port,
        };

        let fraud_noise_enabled = match lookup("FRAUD_NOISE_ENABLED") {
            Some(raw) => raw
                .trim()
                .to_lowercase()
                .parse::<bool>()
                .with_context(|| format!("Failed to parse FRAUD_NOISE_ENABLED: {}", raw))?,
            None => defaults.fraud_noise_enabled,
        };

        let fraud_noise_seed = lookup("FRAUD_NOISE_SEED")
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("Failed to parse FRAUD_NOISE_SEED: {}", raw))
            })
            .transpose()?;

        Ok(Self {
            host,
            port,
            fraud_noise_enabled,
            fraud_noise_seed,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Noise source for the fraud model: disabled, seeded, or thread RNG.
    pub fn noise_source(&self) -> Arc<dyn NoiseSource> {
        match (self.fraud_noise_enabled, self.fraud_noise_seed) {
            (false, _) => Arc::new(ZeroNoise),
            (true, Some(seed)) => Arc::new(SeededNoise::new(seed)),
            (true, None) => Arc::new(ThreadRngNoise),
        }
    }
}
