use super::level::Level;
use drill_core::RIGGING_MILD_LEVEL;
use drill_core::RIGGING_SEVERE_LEVEL;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// script for any scenario game without a dedicated one
const GENERIC: &str = "generic_mental_drill";

const SCRIPTS: [(&str, &str); 8] = [
    ("tilt-control", "bad_beats_sequence"),
    ("cooler-cage", "cooler_hell"),
    ("variance-zen", "variance_torture"),
    ("patience-master", "card_dead_marathon"),
    ("winners-tilt", "heater_discipline"),
    ("pressure-chamber", "high_stakes_bubble"),
    ("ego-killer", "humble_pie_sequence"),
    ("fear-eraser", "scary_spots_drill"),
];

/// An outcome the scenario deck is stacked to produce.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rig {
    Cooler,
    BadBeat,
    SetupHand,
    CardDead,
}

impl Rig {
    /// what may be rigged at a level, harsher as it climbs
    pub fn pool(level: Level) -> &'static [Self] {
        match u8::from(level) {
            l if l >= RIGGING_SEVERE_LEVEL => &[Self::Cooler, Self::BadBeat, Self::SetupHand],
            l if l >= RIGGING_MILD_LEVEL => &[Self::BadBeat, Self::CardDead],
            _ => &[],
        }
    }
}

/// Instruction for a scripted mental-game drill.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scenario {
    id: String,
    script: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rig: Option<Rig>,
}

impl Scenario {
    pub fn build<R: Rng>(slug: &str, level: Level, rng: &mut R) -> Self {
        Self {
            id: slug.to_string(),
            script: Self::script(slug).to_string(),
            rig: Rig::pool(level).choose(rng).copied(),
        }
    }
    /// the script a scenario slug plays
    pub fn script(slug: &str) -> &'static str {
        SCRIPTS
            .iter()
            .find(|(s, _)| *s == slug)
            .map(|(_, script)| *script)
            .unwrap_or(GENERIC)
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn script_name(&self) -> &str {
        &self.script
    }
    pub fn rig(&self) -> Option<Rig> {
        self.rig
    }
}
