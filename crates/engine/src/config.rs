use drill_cards::Symmetry;
use drill_core::CANDIDATE_LIMIT;
use drill_spots::Rubric;

/// Process-wide engine settings, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// which suit relabelings generate variants
    pub symmetry: Symmetry,
    pub rubric: Rubric,
    /// cap on candidate hands per solver fetch
    pub candidates: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symmetry: Symmetry::default(),
            rubric: Rubric::default(),
            candidates: CANDIDATE_LIMIT,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config = serde_json::from_str::<Self>(json)?;
        config.rubric.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override() {
        let config = Config::from_json(r#"{"symmetry": "cyclic", "rubric": {"tolerance": 0.1}}"#).unwrap();
        assert!(config.symmetry == Symmetry::Cyclic);
        assert!(config.rubric.tolerance == 0.1);
        assert!(config.rubric.frequency == drill_core::INDIFFERENCE_FREQUENCY);
        assert!(config.candidates == CANDIDATE_LIMIT);
        assert!(Config::from_json("{}").unwrap() == Config::default());
    }

    #[test]
    fn untenable_rubric_is_rejected() {
        assert!(Config::from_json(r#"{"rubric": {"min": 30}}"#).is_err());
        assert!(Config::from_json(r#"{"rubric": {"base": 30}}"#).is_err());
        assert!(Config::from_json(r#"{"rubric": {"severe": -1.0}}"#).is_err());
    }
}
