use super::level::Level;
use drill_core::*;
use drill_library::Settings;
use drill_spots::Position;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Which static chart the client should render.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartKind {
    PushFold,
    IcmRanges,
    BubblePressure,
    ThreeBet,
    Squeeze,
    Resteal,
    /// any chart the registry names that this crate has no rules for
    Other(String),
}

impl ChartKind {
    /// charts that are drawn against a specific opponent seat
    pub fn is_versus(&self) -> bool {
        matches!(self, Self::ThreeBet | Self::Squeeze | Self::Resteal)
    }
}

impl From<&str> for ChartKind {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "push_fold" => Self::PushFold,
            "icm_ranges" => Self::IcmRanges,
            "bubble_pressure" => Self::BubblePressure,
            "3bet_range" => Self::ThreeBet,
            "squeeze" => Self::Squeeze,
            "resteal" => Self::Resteal,
            other => Self::Other(other.to_string()),
        }
    }
}
impl From<String> for ChartKind {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}
impl From<ChartKind> for String {
    fn from(kind: ChartKind) -> Self {
        kind.to_string()
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::PushFold => write!(f, "push_fold"),
            Self::IcmRanges => write!(f, "icm_ranges"),
            Self::BubblePressure => write!(f, "bubble_pressure"),
            Self::ThreeBet => write!(f, "3bet_range"),
            Self::Squeeze => write!(f, "squeeze"),
            Self::Resteal => write!(f, "resteal"),
            Self::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Instruction for a static-chart drill.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Chart {
    kind: ChartKind,
    hero: Position,
    stack: Chips,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    villain: Option<Position>,
    level: Level,
    ante: bool,
    players: u8,
}

impl Chart {
    /// Roll a chart drill from game settings.
    ///
    /// Unconfigured hero seats are drawn from the charted positions. The
    /// stack is jittered around its configured base and kept in range.
    /// Games that mention ICM or the bubble anywhere get those charts.
    pub fn build<R: Rng>(settings: &Settings, level: Level, rng: &mut R) -> Self {
        let seats = Position::charted();
        let hero = settings
            .position
            .or_else(|| seats.choose(rng).copied())
            .unwrap_or(Position::Btn);
        let jitter = rng.random_range(-CHART_STACK_JITTER..=CHART_STACK_JITTER);
        let stack = settings
            .stack
            .unwrap_or(CHART_STACK_DEFAULT)
            .saturating_add(jitter)
            .clamp(CHART_STACK_MIN, CHART_STACK_MAX);
        let kind = if settings.mentions("icm") {
            ChartKind::IcmRanges
        } else if settings.mentions("bubble") {
            ChartKind::BubblePressure
        } else {
            settings
                .chart
                .as_deref()
                .map(ChartKind::from)
                .unwrap_or(ChartKind::PushFold)
        };
        let villain = match kind.is_versus() {
            true => seats
                .iter()
                .filter(|p| **p != hero)
                .copied()
                .collect::<Vec<_>>()
                .choose(rng)
                .copied(),
            false => None,
        };
        Self {
            kind,
            hero,
            stack,
            villain,
            level,
            ante: settings.ante.unwrap_or(true),
            players: settings.players.unwrap_or(CHART_PLAYERS_DEFAULT),
        }
    }
    pub fn kind(&self) -> &ChartKind {
        &self.kind
    }
    pub fn hero(&self) -> Position {
        self.hero
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn villain(&self) -> Option<Position> {
        self.villain
    }
    pub fn level(&self) -> Level {
        self.level
    }
    pub fn ante(&self) -> bool {
        self.ante
    }
    pub fn players(&self) -> u8 {
        self.players
    }
}
