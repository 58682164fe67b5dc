//! Scenario evaluation against the exact draw engine.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::ToPrimitive;
use serde::Serialize;
use thiserror::Error;

use mulligan_core::{DrawError, binomial, joint_count};

use crate::config::ScenarioConfig;

/// Evaluation artifact for a single scenario.
///
/// Hand counts are carried as decimal strings so arbitrary-precision values
/// survive JSON without truncation; the probability is the exact ratio
/// rendered as a float for display.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScenarioReport {
    pub name: String,
    pub deck_size: u32,
    pub hand_size: u32,
    pub favorable_hands: String,
    pub total_hands: String,
    pub probability: f64,
}

impl ScenarioReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("scenario '{name}' failed to evaluate: {source}")]
    Draw {
        name: String,
        #[source]
        source: DrawError,
    },
}

/// Evaluates one scenario: counts favorable hands, counts all hands, and
/// divides last.
pub fn evaluate(config: &ScenarioConfig) -> Result<ScenarioReport, ReportError> {
    let pool = config.pool();
    let bounds = config.bounds();

    let favorable =
        joint_count(&pool, config.hand_size, &bounds).map_err(|source| ReportError::Draw {
            name: config.name.clone(),
            source,
        })?;
    let total = binomial(i64::from(pool.deck_size()), i64::from(config.hand_size));

    let probability = BigRational::new(BigInt::from(favorable.clone()), BigInt::from(total.clone()))
        .to_f64()
        .unwrap_or(0.0);

    tracing::debug!(
        target: "mulligan_scenario::report",
        scenario = %config.name,
        deck_size = pool.deck_size(),
        hand_size = config.hand_size,
        probability,
        "scenario evaluated"
    );

    Ok(ScenarioReport {
        name: config.name.clone(),
        deck_size: pool.deck_size(),
        hand_size: config.hand_size,
        favorable_hands: favorable.to_string(),
        total_hands: total.to_string(),
        probability,
    })
}

/// Evaluates a batch of scenarios, failing on the first error.
pub fn evaluate_all(configs: &[ScenarioConfig]) -> Result<Vec<ScenarioReport>, ReportError> {
    configs.iter().map(evaluate).collect()
}
