use super::filter::Filter;
use super::game::GameConfig;
use drill_cards::VariantKey;
use drill_core::ID;
use drill_spots::SolvedHand;
use std::collections::HashSet;

/// Marker for user identifiers. Accounts live outside this workspace.
#[derive(Debug, Clone, Copy)]
pub struct User;

/// Read-only access to the solved corpus.
#[async_trait::async_trait]
pub trait Catalog: Send + Sync {
    /// hands matching every predicate of the filter, at most `filter.limit`
    async fn candidates(&self, filter: &Filter) -> anyhow::Result<Vec<SolvedHand>>;
}

/// Per-user record of which variants of which hands have been shown.
#[async_trait::async_trait]
pub trait Ledger: Send + Sync {
    async fn seen(
        &self,
        user: ID<User>,
        hand: ID<SolvedHand>,
    ) -> anyhow::Result<HashSet<VariantKey>>;
    async fn record(
        &self,
        user: ID<User>,
        hand: ID<SolvedHand>,
        variant: &VariantKey,
    ) -> anyhow::Result<()>;
}

/// The game registry.
#[async_trait::async_trait]
pub trait Games: Send + Sync {
    async fn by_slug(&self, slug: &str) -> anyhow::Result<Option<GameConfig>>;
    async fn by_id(&self, id: ID<GameConfig>) -> anyhow::Result<Option<GameConfig>>;
}
