use super::filter::Filter;
use super::game::GameConfig;
use super::store::Catalog;
use super::store::Games;
use super::store::Ledger;
use super::store::User;
use drill_cards::VariantKey;
use drill_core::ID;
use drill_core::Unique;
use drill_spots::SolvedHand;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::collections::HashSet;
use tokio::sync::RwLock;

/// One row of the seen ledger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Sighting {
    pub user: ID<User>,
    #[serde(rename = "file_id")]
    pub hand: ID<SolvedHand>,
    #[serde(rename = "variant_hash")]
    pub variant: VariantKey,
}

/// A process-local store backing every collaborator seam.
///
/// Corpus and registry are fixed at construction. The ledger grows as
/// variants are recorded and can be exported with [`Memory::snapshot`].
#[derive(Default)]
pub struct Memory {
    hands: Vec<SolvedHand>,
    games: Vec<GameConfig>,
    history: RwLock<HashMap<(ID<User>, ID<SolvedHand>), BTreeSet<VariantKey>>>,
}

impl Memory {
    pub fn new(hands: Vec<SolvedHand>, games: Vec<GameConfig>) -> Self {
        Self {
            hands,
            games,
            history: RwLock::default(),
        }
    }
    /// load a corpus and a registry, each a json array of records
    pub fn from_json(hands: &str, games: &str) -> anyhow::Result<Self> {
        let hands = serde_json::from_str::<Vec<SolvedHand>>(hands)?;
        let games = serde_json::from_str::<Vec<GameConfig>>(games)?;
        log::info!("loaded {} hands and {} games", hands.len(), games.len());
        Ok(Self::new(hands, games))
    }
    /// seed the ledger with previously exported rows
    pub fn with_history(self, sightings: Vec<Sighting>) -> Self {
        let mut history = self.history.into_inner();
        for Sighting { user, hand, variant } in sightings {
            history.entry((user, hand)).or_default().insert(variant);
        }
        Self {
            history: RwLock::new(history),
            ..self
        }
    }
    /// every recorded row, sorted
    pub async fn snapshot(&self) -> Vec<Sighting> {
        let mut rows = self
            .history
            .read()
            .await
            .iter()
            .flat_map(|((user, hand), variants)| {
                variants.iter().map(|variant| Sighting {
                    user: *user,
                    hand: *hand,
                    variant: variant.clone(),
                })
            })
            .collect::<Vec<_>>();
        rows.sort();
        rows
    }
    pub fn hands(&self) -> &[SolvedHand] {
        &self.hands
    }
    pub fn games(&self) -> &[GameConfig] {
        &self.games
    }
}

#[async_trait::async_trait]
impl Catalog for Memory {
    async fn candidates(&self, filter: &Filter) -> anyhow::Result<Vec<SolvedHand>> {
        Ok(self
            .hands
            .iter()
            .filter(|hand| filter.admits(hand))
            .take(filter.limit)
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl Ledger for Memory {
    async fn seen(
        &self,
        user: ID<User>,
        hand: ID<SolvedHand>,
    ) -> anyhow::Result<HashSet<VariantKey>> {
        Ok(self
            .history
            .read()
            .await
            .get(&(user, hand))
            .map(|variants| variants.iter().cloned().collect())
            .unwrap_or_default())
    }
    async fn record(
        &self,
        user: ID<User>,
        hand: ID<SolvedHand>,
        variant: &VariantKey,
    ) -> anyhow::Result<()> {
        self.history
            .write()
            .await
            .entry((user, hand))
            .or_default()
            .insert(variant.clone());
        Ok(())
    }
}

#[async_trait::async_trait]
impl Games for Memory {
    async fn by_slug(&self, slug: &str) -> anyhow::Result<Option<GameConfig>> {
        Ok(self.games.iter().find(|g| g.slug() == slug).cloned())
    }
    async fn by_id(&self, id: ID<GameConfig>) -> anyhow::Result<Option<GameConfig>> {
        Ok(self.games.iter().find(|g| g.id() == id).cloned())
    }
}
