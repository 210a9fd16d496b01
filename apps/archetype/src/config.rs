use anyhow::{Context, Result};

use crate::scoring::{SimilarityMode, TuningParams};

/// Process configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    /// Tuning used when a request does not override it.
    pub tuning: TuningParams,
    /// Env keys whose value was parseable but out of range and was replaced
    /// by the built-in default. Logged once tracing is up.
    pub tuning_fallbacks: Vec<&'static str>,
}

impl Config {
    /// Reads the process environment. `.env` is loaded by the binary
    /// before argument parsing so both see the same variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unparseable values are errors;
    /// parseable but out-of-range tuning falls back to the built-in default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = TuningParams::default();

        let similarity = match lookup("ARCHETYPE_SIMILARITY") {
            Some(raw) => SimilarityMode::parse(&raw)
                .with_context(|| format!("ARCHETYPE_SIMILARITY must be 'cosine' or 'euclidean', got '{raw}'"))?,
            None => defaults.similarity,
        };

        let requested = TuningParams {
            gamma: parse_or(&lookup, "ARCHETYPE_GAMMA", defaults.gamma)?,
            r: parse_or(&lookup, "ARCHETYPE_DISCOUNT", defaults.r)?,
            tau: parse_or(&lookup, "ARCHETYPE_TAU", defaults.tau)?,
            similarity,
            iterations: parse_or(&lookup, "ARCHETYPE_ITERATIONS", defaults.iterations)?,
        };
        let tuning = requested.sanitized();

        let mut tuning_fallbacks = Vec::new();
        // NaN never equals its replacement, so it is reported too.
        if tuning.gamma != requested.gamma {
            tuning_fallbacks.push("ARCHETYPE_GAMMA");
        }
        if tuning.r != requested.r {
            tuning_fallbacks.push("ARCHETYPE_DISCOUNT");
        }
        if tuning.tau != requested.tau {
            tuning_fallbacks.push("ARCHETYPE_TAU");
        }
        if tuning.iterations != requested.iterations {
            tuning_fallbacks.push("ARCHETYPE_ITERATIONS");
        }

        Ok(Config {
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            tuning,
            tuning_fallbacks,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a number, got '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::clustering::MAX_ITERATIONS;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(move |key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.rust_log, "info");
        assert_eq!(cfg.tuning, TuningParams::default());
        assert!(cfg.tuning_fallbacks.is_empty());
    }

    #[test]
    fn test_reads_tuning() {
        let cfg = config(&[
            ("ARCHETYPE_GAMMA", "1.1"),
            ("ARCHETYPE_DISCOUNT", "0.6"),
            ("ARCHETYPE_TAU", "0.5"),
            ("ARCHETYPE_SIMILARITY", "euclidean"),
            ("ARCHETYPE_ITERATIONS", "8"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(cfg.tuning.gamma, 1.1);
        assert_eq!(cfg.tuning.r, 0.6);
        assert_eq!(cfg.tuning.tau, 0.5);
        assert_eq!(cfg.tuning.similarity, SimilarityMode::Euclidean);
        assert_eq!(cfg.tuning.iterations, 8);
        assert_eq!(cfg.rust_log, "debug");
        assert!(cfg.tuning_fallbacks.is_empty());
    }

    #[test]
    fn test_unparseable_value_fails_with_key_in_message() {
        let err = config(&[("ARCHETYPE_TAU", "warm")]).unwrap_err();
        assert!(err.to_string().contains("ARCHETYPE_TAU"));

        let err = config(&[("ARCHETYPE_SIMILARITY", "jaccard")]).unwrap_err();
        assert!(err.to_string().contains("ARCHETYPE_SIMILARITY"));

        let err = config(&[("ARCHETYPE_ITERATIONS", "-1")]).unwrap_err();
        assert!(err.to_string().contains("ARCHETYPE_ITERATIONS"));
    }

    #[test]
    fn test_out_of_range_tuning_falls_back_and_is_reported() {
        let cfg = config(&[("ARCHETYPE_DISCOUNT", "1.5"), ("ARCHETYPE_GAMMA", "-2")]).unwrap();
        assert_eq!(cfg.tuning.r, TuningParams::default().r);
        assert_eq!(cfg.tuning.gamma, TuningParams::default().gamma);
        assert_eq!(cfg.tuning_fallbacks, vec!["ARCHETYPE_GAMMA", "ARCHETYPE_DISCOUNT"]);
    }

    #[test]
    fn test_nan_tuning_is_reported() {
        let cfg = config(&[("ARCHETYPE_TAU", "NaN")]).unwrap();
        assert_eq!(cfg.tuning.tau, TuningParams::default().tau);
        assert_eq!(cfg.tuning_fallbacks, vec!["ARCHETYPE_TAU"]);
    }

    #[test]
    fn test_iterations_above_cap_fall_back() {
        let too_many = (MAX_ITERATIONS + 1).to_string();
        let cfg = config(&[("ARCHETYPE_ITERATIONS", too_many.as_str())]).unwrap();
        assert_eq!(cfg.tuning.iterations, TuningParams::default().iterations);
        assert_eq!(cfg.tuning_fallbacks, vec!["ARCHETYPE_ITERATIONS"]);

        let at_cap = MAX_ITERATIONS.to_string();
        let cfg = config(&[("ARCHETYPE_ITERATIONS", at_cap.as_str())]).unwrap();
        assert_eq!(cfg.tuning.iterations, MAX_ITERATIONS);
    }
}
