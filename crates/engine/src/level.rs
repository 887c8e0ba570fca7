use drill_core::LEVEL_MAX;

/// Difficulty level, 1 through 10. Out-of-range input is clamped.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Level(u8);

impl Default for Level {
    fn default() -> Self {
        Self(1)
    }
}

/// u8 isomorphism, saturating at both ends
impl From<u8> for Level {
    fn from(n: u8) -> Self {
        Self(n.clamp(1, LEVEL_MAX))
    }
}
impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "L{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps() {
        assert!(u8::from(Level::from(0)) == 1);
        assert!(u8::from(Level::from(7)) == 7);
        assert!(u8::from(Level::from(99)) == LEVEL_MAX);
        assert!(serde_json::from_str::<Level>("12").unwrap() == Level::from(10));
    }
}
