//! Engine configuration.
//!
//! Every field has a default, so `{}` is a valid configuration file.

use std::path::Path;

use kundali_vedic_base::{AscendantMethod, AyanamshaModel};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Longest period sequence horizon accepted, in years.
pub const MAX_DASHA_HORIZON_YEARS: f64 = 240.0;

/// Bounded boundary search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Coarse step in minutes.
    pub step_minutes: f64,
    /// Step cap; exceeding it reports the boundary as undetermined.
    pub max_steps: u32,
    /// Bisect the final step down to one second. Off by default: reported
    /// times are the first coarse step past the boundary.
    pub refine: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            step_minutes: 5.0,
            max_steps: 400,
            refine: false,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.step_minutes.is_finite() || self.step_minutes <= 0.0 {
            return Err("search.step_minutes must be positive");
        }
        if self.max_steps == 0 {
            return Err("search.max_steps must be at least 1");
        }
        Ok(())
    }

    /// Step length in days.
    pub fn step_days(&self) -> f64 {
        self.step_minutes / kundali_time::MINUTES_PER_DAY
    }
}

/// Strategy selection and limits for a [`crate::KundaliEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub ayanamsha: AyanamshaModel,
    pub ascendant: AscendantMethod,
    /// Years after birth the period sequence must reach.
    pub dasha_horizon_years: f64,
    /// Also split each mahadasha into antardashas.
    pub antardasha: bool,
    pub search: SearchConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ayanamsha: AyanamshaModel::default(),
            ascendant: AscendantMethod::default(),
            dasha_horizon_years: 120.0,
            antardasha: true,
            search: SearchConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.dasha_horizon_years.is_finite()
            || self.dasha_horizon_years <= 0.0
            || self.dasha_horizon_years > MAX_DASHA_HORIZON_YEARS
        {
            return Err("dasha_horizon_years must be in (0, 240]");
        }
        self.search.validate()
    }

    /// Parse and validate JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, SearchError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SearchError::ConfigParse(e.to_string()))?;
        config.validate().map_err(SearchError::InvalidConfig)?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SearchError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| SearchError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let c = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(c, EngineConfig::default());
        assert_eq!(c.ayanamsha, AyanamshaModel::LahiriPolynomial);
        assert_eq!(c.ascendant, AscendantMethod::HourAngleProxy);
        assert_eq!(c.search.max_steps, 400);
    }

    #[test]
    fn partial_override() {
        let c = EngineConfig::from_json_str(
            r#"{"ayanamsha": "linear_per_year", "search": {"step_minutes": 2.5}}"#,
        )
        .unwrap();
        assert_eq!(c.ayanamsha, AyanamshaModel::LinearPerYear);
        assert_eq!(c.search.step_minutes, 2.5);
        assert_eq!(c.search.max_steps, 400);
        assert!(!c.search.refine);
    }

    #[test]
    fn refinement_is_opt_in() {
        assert!(!SearchConfig::default().refine);
        let c = EngineConfig::from_json_str(r#"{"search": {"refine": true}}"#).unwrap();
        assert!(c.search.refine);
        assert_eq!(c.search.step_minutes, 5.0);
    }

    #[test]
    fn rejects_bad_values() {
        for json in [
            r#"{"dasha_horizon_years": 0}"#,
            r#"{"dasha_horizon_years": 500}"#,
            r#"{"search": {"step_minutes": -1}}"#,
            r#"{"search": {"max_steps": 0}}"#,
        ] {
            assert!(
                matches!(
                    EngineConfig::from_json_str(json),
                    Err(SearchError::InvalidConfig(_))
                ),
                "{json}"
            );
        }
    }

    #[test]
    fn rejects_unknown_fields_and_models() {
        assert!(matches!(
            EngineConfig::from_json_str(r#"{"ayanamsa": "lahiri"}"#),
            Err(SearchError::ConfigParse(_))
        ));
        assert!(matches!(
            EngineConfig::from_json_str(r#"{"ascendant": "placidus"}"#),
            Err(SearchError::ConfigParse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            EngineConfig::load("/nonexistent/kundali.json"),
            Err(SearchError::Io(_))
        ));
    }

    #[test]
    fn step_days_from_minutes() {
        let s = SearchConfig::default();
        assert!((s.step_days() - 5.0 / 1440.0).abs() < 1e-15);
    }
}
