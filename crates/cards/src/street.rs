/// The four betting rounds in Texas Hold'em.
///
/// Solved spots are catalogued by the street on which the hero acts, and
/// game configurations may restrict a drill to a single street.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    #[default]
    #[serde(rename = "preflop", alias = "pref")]
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    #[serde(rename = "river", alias = "rive")]
    Rive = 3isize,
}

impl Street {
    /// All four streets in order.
    pub const fn all() -> [Self; 4] {
        [Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pref => "Preflop",
            Self::Flop => "Flop",
            Self::Turn => "Turn",
            Self::Rive => "River",
        }
    }
    /// Number of board cards visible on this street.
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
}

impl TryFrom<&str> for Street {
    type Error = super::error::CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "preflop" | "pref" | "p" => Ok(Self::Pref),
            "flop" | "f" => Ok(Self::Flop),
            "turn" | "t" => Ok(Self::Turn),
            "river" | "rive" | "r" => Ok(Self::Rive),
            _ => Err(super::error::CardError::MalformedStreet(s.to_string())),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
