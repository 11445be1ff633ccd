// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Every field has a default, and the defaults are the production tuning. A
//! config file only needs the keys it overrides:
//!
//! ```json
//! { "fuzzy_threshold": 0.75, "weights": { "executor": 5 } }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::fuzzy::DEFAULT_FUZZY_THRESHOLD;
use crate::scoring::{FieldWeights, PopularityBoost, RelevanceScorer, FUZZY_TOPIC_FACTOR};

/// How many related documents a lookup returns by default.
pub const DEFAULT_SIMILAR_LIMIT: usize = 5;

/// How many topic suggestions are offered by default.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum word similarity for a fuzzy hit, in `[0, 1]`.
    pub fuzzy_threshold: f64,
    /// Fraction of the topic weight a fuzzy topic hit earns.
    pub fuzzy_topic_factor: f64,
    pub similar_limit: usize,
    pub suggestion_limit: usize,
    pub weights: FieldWeights,
    pub popularity: PopularityBoost,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            fuzzy_topic_factor: FUZZY_TOPIC_FACTOR,
            similar_limit: DEFAULT_SIMILAR_LIMIT,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            weights: FieldWeights::default(),
            popularity: PopularityBoost::default(),
        }
    }
}

impl EngineConfig {
    /// Load and validate a JSON config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(ConfigError::Invalid(format!(
                "fuzzy_threshold must be within [0, 1], got {}",
                self.fuzzy_threshold
            )));
        }
        if !non_negative(self.fuzzy_topic_factor) {
            return Err(ConfigError::Invalid(format!(
                "fuzzy_topic_factor must be non-negative, got {}",
                self.fuzzy_topic_factor
            )));
        }
        if self.similar_limit == 0 {
            return Err(ConfigError::Invalid(
                "similar_limit must be at least 1".to_string(),
            ));
        }
        for (field, weight) in self.weights.all() {
            if !non_negative(weight) {
                return Err(ConfigError::Invalid(format!(
                    "weight for {} must be non-negative, got {}",
                    field, weight
                )));
            }
        }
        for tier in &self.popularity.tiers {
            if !non_negative(tier.bonus) {
                return Err(ConfigError::Invalid(format!(
                    "popularity bonus above {} views must be non-negative, got {}",
                    tier.views_above, tier.bonus
                )));
            }
        }
        Ok(())
    }

    /// The relevance scorer this configuration describes.
    pub fn scorer(&self) -> RelevanceScorer {
        RelevanceScorer::new(
            self.weights,
            self.popularity.clone(),
            self.fuzzy_threshold,
            self.fuzzy_topic_factor,
        )
    }
}

/// False for negatives and NaN.
fn non_negative(value: f64) -> bool {
    value >= 0.0
}
