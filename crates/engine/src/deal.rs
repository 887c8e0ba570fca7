use super::chart::Chart;
use super::scenario::Scenario;
use drill_cards::VariantKey;
use drill_core::ID;
use drill_library::GameConfig;
use drill_library::Selection;
use drill_spots::Choice;
use drill_spots::SolvedHand;

/// A solved hand served for play.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SolvedDeal {
    game: ID<GameConfig>,
    #[serde(flatten)]
    selection: Selection,
}

impl SolvedDeal {
    pub fn new(game: ID<GameConfig>, selection: Selection) -> Self {
        Self { game, selection }
    }
    pub fn game(&self) -> ID<GameConfig> {
        self.game
    }
    pub fn hand(&self) -> &SolvedHand {
        self.selection.hand()
    }
    pub fn base(&self) -> ID<SolvedHand> {
        self.selection.base()
    }
    pub fn variant(&self) -> &VariantKey {
        self.selection.variant()
    }
    pub fn exhausted(&self) -> bool {
        self.selection.exhausted()
    }
    /// the buttons for the hero's first decision
    pub fn menu(&self) -> Vec<Choice> {
        self.hand().root().menu()
    }
}

/// What a fetch produces, one shape per game mode.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "engine_type")]
pub enum Deal {
    #[serde(rename = "PIO")]
    Solver(SolvedDeal),
    #[serde(rename = "CHART")]
    Chart(Chart),
    #[serde(rename = "SCENARIO")]
    Scenario(Scenario),
}
