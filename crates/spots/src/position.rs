use drill_core::Chips;
use drill_core::STACK_DEEP_MIN;
use drill_core::STACK_SHORT_MAX;

/// Seat relative to the button at a full ring table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    Utg,
    Mp,
    Lj,
    Hj,
    Co,
    Btn,
    Sb,
    Bb,
}

impl Position {
    /// seats that static charts are drawn for
    pub const fn charted() -> [Self; 6] {
        [
            Self::Btn,
            Self::Co,
            Self::Hj,
            Self::Lj,
            Self::Sb,
            Self::Bb,
        ]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Utg => "UTG",
            Self::Mp => "MP",
            Self::Lj => "LJ",
            Self::Hj => "HJ",
            Self::Co => "CO",
            Self::Btn => "BTN",
            Self::Sb => "SB",
            Self::Bb => "BB",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Stack depth bucket that solved spots are catalogued under.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    Short,
    #[default]
    Standard,
    Deep,
}

/// bucket a stack given in big blinds
impl From<Chips> for Depth {
    fn from(stack: Chips) -> Self {
        match stack {
            s if s <= STACK_SHORT_MAX => Self::Short,
            s if s >= STACK_DEEP_MIN => Self::Deep,
            _ => Self::Standard,
        }
    }
}

impl std::fmt::Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Short => write!(f, "short"),
            Self::Standard => write!(f, "standard"),
            Self::Deep => write!(f, "deep"),
        }
    }
}
