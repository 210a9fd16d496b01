use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::scoring::clustering::{DEFAULT_ITERATIONS, MAX_ITERATIONS};
use crate::scoring::debias::{DEFAULT_DISCOUNT, DEFAULT_GAMMA};
use crate::scoring::similarity::{SimilarityMode, DEFAULT_TAU};

/// Effective tuning for one engine run. Always within range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TuningParams {
    /// IDF exponent, > 0.
    pub gamma: f64,
    /// Rank discount, in (0, 1).
    pub r: f64,
    /// Softmax temperature, > 0.
    pub tau: f64,
    pub similarity: SimilarityMode,
    /// Refinement rounds for the cluster step, at most `MAX_ITERATIONS`.
    pub iterations: usize,
}

impl Default for TuningParams {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            r: DEFAULT_DISCOUNT,
            tau: DEFAULT_TAU,
            similarity: SimilarityMode::default(),
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// Caller-supplied tuning, loosely typed. Each field is optional and
/// independently falls back when missing, non-numeric, non-finite or out
/// of range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TuningInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gamma: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tau: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<Value>,
}

pub fn valid_gamma(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

pub fn valid_discount(v: f64) -> bool {
    v.is_finite() && v > 0.0 && v < 1.0
}

pub fn valid_tau(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

pub fn valid_iterations(n: usize) -> bool {
    n <= MAX_ITERATIONS
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn pick(
    name: &'static str,
    input: Option<&Value>,
    valid: fn(f64) -> bool,
    fallback: f64,
) -> f64 {
    let Some(raw) = input else {
        return fallback;
    };
    match numeric(raw).filter(|v| valid(*v)) {
        Some(v) => v,
        None => {
            tracing::warn!(param = name, value = %raw, fallback, "Ignoring invalid tuning value");
            fallback
        }
    }
}

impl TuningParams {
    /// Applies per-request overrides on top of `self`.
    pub fn with_overrides(&self, input: &TuningInput) -> TuningParams {
        let similarity = match &input.similarity {
            None => self.similarity,
            Some(raw) => raw
                .as_str()
                .and_then(SimilarityMode::parse)
                .unwrap_or_else(|| {
                    tracing::warn!(param = "similarity", value = %raw, "Ignoring invalid tuning value");
                    self.similarity
                }),
        };

        TuningParams {
            gamma: pick("gamma", input.gamma.as_ref(), valid_gamma, self.gamma),
            r: pick("r", input.r.as_ref(), valid_discount, self.r),
            tau: pick("tau", input.tau.as_ref(), valid_tau, self.tau),
            similarity,
            iterations: self.iterations,
        }
    }

    /// Replaces any out-of-range field with the built-in default.
    pub fn sanitized(self) -> TuningParams {
        let defaults = TuningParams::default();
        TuningParams {
            gamma: if valid_gamma(self.gamma) { self.gamma } else { defaults.gamma },
            r: if valid_discount(self.r) { self.r } else { defaults.r },
            tau: if valid_tau(self.tau) { self.tau } else { defaults.tau },
            similarity: self.similarity,
            iterations: if valid_iterations(self.iterations) {
                self.iterations
            } else {
                defaults.iterations
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(value: Value) -> TuningInput {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_fields_keep_base() {
        let params = TuningParams::default().with_overrides(&TuningInput::default());
        assert_eq!(params, TuningParams::default());
    }

    #[test]
    fn test_valid_overrides_apply() {
        let params = TuningParams::default().with_overrides(&input(json!({
            "gamma": 1.2, "r": "0.5", "tau": 0.3, "similarity": "Euclidean"
        })));
        assert_eq!(params.gamma, 1.2);
        assert_eq!(params.r, 0.5);
        assert_eq!(params.tau, 0.3);
        assert_eq!(params.similarity, SimilarityMode::Euclidean);
    }

    #[test]
    fn test_each_invalid_field_falls_back_independently() {
        let params = TuningParams::default().with_overrides(&input(json!({
            "gamma": -1.0, "r": 1.0, "tau": "hot", "similarity": "manhattan"
        })));
        assert_eq!(params, TuningParams::default());

        let params = TuningParams::default().with_overrides(&input(json!({
            "gamma": 0.0, "r": 0.9, "tau": null, "similarity": 3
        })));
        assert_eq!(params.gamma, DEFAULT_GAMMA);
        assert_eq!(params.r, 0.9);
        assert_eq!(params.tau, DEFAULT_TAU);
        assert_eq!(params.similarity, SimilarityMode::Cosine);
    }

    #[test]
    fn test_fallback_is_the_base_not_the_builtin() {
        let base = TuningParams {
            gamma: 2.0,
            ..TuningParams::default()
        };
        let params = base.with_overrides(&input(json!({ "gamma": "NaN" })));
        assert_eq!(params.gamma, 2.0);
    }

    #[test]
    fn test_sanitized_replaces_out_of_range() {
        let params = TuningParams {
            gamma: f64::INFINITY,
            r: 0.0,
            tau: -0.1,
            similarity: SimilarityMode::Euclidean,
            iterations: 3,
        }
        .sanitized();
        assert_eq!(params.gamma, DEFAULT_GAMMA);
        assert_eq!(params.r, DEFAULT_DISCOUNT);
        assert_eq!(params.tau, DEFAULT_TAU);
        assert_eq!(params.similarity, SimilarityMode::Euclidean);
        assert_eq!(params.iterations, 3);
    }

    #[test]
    fn test_sanitized_rejects_unbounded_iterations() {
        let params = TuningParams {
            iterations: MAX_ITERATIONS + 1,
            ..TuningParams::default()
        }
        .sanitized();
        assert_eq!(params.iterations, DEFAULT_ITERATIONS);

        let params = TuningParams {
            iterations: MAX_ITERATIONS,
            ..TuningParams::default()
        }
        .sanitized();
        assert_eq!(params.iterations, MAX_ITERATIONS);
    }
}
