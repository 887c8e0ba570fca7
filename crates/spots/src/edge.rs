use super::error::SpotError;
use drill_core::Percent;

/// The shape of a decision, without its sizing.
///
/// This is what a player submits a choice as, and what the grader
/// matches against before comparing sizings.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Kind {
    Fold,
    Check,
    Call,
    #[serde(rename = "ALLIN", alias = "SHOVE")]
    Shove,
    Bet,
    Raise,
}

impl Kind {
    /// True if this kind carries a pot-relative sizing.
    pub fn is_sized(&self) -> bool {
        matches!(self, Kind::Bet | Kind::Raise)
    }
    pub fn label(&self) -> &'static str {
        match self {
            Kind::Fold => "FOLD",
            Kind::Check => "CHECK",
            Kind::Call => "CALL",
            Kind::Shove => "ALLIN",
            Kind::Bet => "BET",
            Kind::Raise => "RAISE",
        }
    }
}

impl TryFrom<&str> for Kind {
    type Error = SpotError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "fold" => Ok(Kind::Fold),
            "check" => Ok(Kind::Check),
            "call" => Ok(Kind::Call),
            "allin" | "shove" => Ok(Kind::Shove),
            "bet" => Ok(Kind::Bet),
            "raise" => Ok(Kind::Raise),
            _ => Err(SpotError::UnknownAction(s.to_string())),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A branch out of a solved decision node.
///
/// Parsed once from solver action keys and never re-read as text.
///
/// # Variants
///
/// - `Fold`, `Check`, `Call`: unsized decisions
/// - `Shove`: all-in, keyed `allin`
/// - `Bet(Percent)`, `Raise(Percent)`: pot-relative sizes, keyed `bet_50`, `raise_150`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Edge {
    Fold,
    Check,
    Call,
    Shove,
    Bet(Percent),
    Raise(Percent),
}

impl Edge {
    pub fn kind(&self) -> Kind {
        match self {
            Edge::Fold => Kind::Fold,
            Edge::Check => Kind::Check,
            Edge::Call => Kind::Call,
            Edge::Shove => Kind::Shove,
            Edge::Bet(_) => Kind::Bet,
            Edge::Raise(_) => Kind::Raise,
        }
    }
    /// Pot-relative sizing, if this edge has one.
    pub fn sizing(&self) -> Option<Percent> {
        match self {
            Edge::Bet(x) | Edge::Raise(x) => Some(*x),
            _ => None,
        }
    }
    /// True if this is a fold.
    pub fn is_folded(&self) -> bool {
        matches!(self, Edge::Fold)
    }
    /// True if this is aggressive (bet, raise, or shove).
    pub fn is_aggro(&self) -> bool {
        matches!(self, Edge::Bet(_) | Edge::Raise(_) | Edge::Shove)
    }
    /// Button text, `BET 50%` or `CHECK`.
    pub fn label(&self) -> String {
        match self.sizing() {
            Some(x) => format!("{} {}%", self.kind(), x),
            None => self.kind().to_string(),
        }
    }
}

/// str isomorphism
/// keys are case-insensitive on the way in and lowercase on the way out
impl TryFrom<&str> for Edge {
    type Error = SpotError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let key = s.trim().to_lowercase();
        let sizing = |x: &str| {
            x.parse::<Percent>()
                .ok()
                .filter(|x| x.is_finite() && *x >= 0.)
                .ok_or_else(|| SpotError::MalformedSizing(s.to_string()))
        };
        match key.split_once('_') {
            None => match Kind::try_from(key.as_str())? {
                Kind::Fold => Ok(Edge::Fold),
                Kind::Check => Ok(Edge::Check),
                Kind::Call => Ok(Edge::Call),
                Kind::Shove => Ok(Edge::Shove),
                Kind::Bet | Kind::Raise => Err(SpotError::MalformedSizing(s.to_string())),
            },
            Some(("bet", x)) => Ok(Edge::Bet(sizing(x)?)),
            Some(("raise", x)) => Ok(Edge::Raise(sizing(x)?)),
            Some(("all", "in")) => Ok(Edge::Shove),
            Some(_) => Err(SpotError::UnknownAction(s.to_string())),
        }
    }
}
impl TryFrom<String> for Edge {
    type Error = SpotError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Edge> for String {
    fn from(edge: Edge) -> Self {
        edge.to_string()
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Edge::Fold => write!(f, "fold"),
            Edge::Check => write!(f, "check"),
            Edge::Call => write!(f, "call"),
            Edge::Shove => write!(f, "allin"),
            Edge::Bet(x) => write!(f, "bet_{}", x),
            Edge::Raise(x) => write!(f, "raise_{}", x),
        }
    }
}
