use drill_cards::Street;
use drill_core::Chips;
use drill_core::ID;
use drill_core::Unique;
use drill_spots::Position;
use serde_json::Map;
use serde_json::Value;

/// Which content producer serves a game.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Mode {
    /// solved postflop spots from the corpus
    #[serde(rename = "PIO")]
    Solver,
    /// static preflop and ICM charts
    #[serde(rename = "CHART")]
    Chart,
    /// scripted mental-game drills
    #[serde(rename = "SCENARIO")]
    Scenario,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Solver => write!(f, "PIO"),
            Self::Chart => write!(f, "CHART"),
            Self::Scenario => write!(f, "SCENARIO"),
        }
    }
}

/// Per-game knobs from the registry. Everything is optional; absent
/// fields fall back to the producer's defaults.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Settings {
    /// stack in big blinds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<Chips>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<Street>,
    #[serde(default, rename = "spot_type", skip_serializing_if = "Option::is_none")]
    pub spot: Option<String>,
    #[serde(default, rename = "chart_type", skip_serializing_if = "Option::is_none")]
    pub chart: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ante: Option<bool>,
    /// players remaining at the table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extras: Map<String, Value>,
}

impl Settings {
    /// case-insensitive search through every textual setting
    pub fn mentions(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        let ref mut texts = self
            .chart
            .iter()
            .chain(self.spot.iter())
            .chain(self.description.iter())
            .map(String::as_str)
            .chain(self.extras.values().filter_map(Value::as_str));
        texts.any(|text| text.to_lowercase().contains(&needle))
    }
}

/// A game registry record.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GameConfig {
    id: ID<GameConfig>,
    slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(rename = "engine_type", alias = "mode")]
    mode: Mode,
    #[serde(default, rename = "config")]
    settings: Settings,
}

impl Unique for GameConfig {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl GameConfig {
    pub fn new(slug: &str, mode: Mode, settings: Settings) -> Self {
        Self {
            id: ID::default(),
            slug: slug.to_string(),
            title: None,
            mode,
            settings,
        }
    }
    pub fn slug(&self) -> &str {
        &self.slug
    }
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.slug)
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
