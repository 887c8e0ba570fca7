use super::chart::Chart;
use super::config::Config;
use super::deal::Deal;
use super::deal::SolvedDeal;
use super::error::EngineError;
use super::level::Level;
use super::registry::Registry;
use super::scenario::Scenario;
use drill_core::ID;
use drill_core::Unique;
use drill_library::*;
use drill_spots::Grade;
use drill_spots::Kind;
use drill_spots::Reply;
use drill_spots::Submission;
use drill_spots::Villain;
use rand::Rng;

/// The result of answering a solver deal.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Outcome {
    grade: Grade,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    villain: Option<Reply>,
}

impl Outcome {
    pub fn grade(&self) -> &Grade {
        &self.grade
    }
    /// the opponent's reply, if the hand continues
    pub fn villain(&self) -> Option<&Reply> {
        self.villain.as_ref()
    }
}

/// Routes games to their content producer and runs the answer loop.
///
/// Owns the registry cache. Every other piece of state lives behind the
/// store, so one engine can serve any number of concurrent requests.
pub struct Engine<S> {
    store: S,
    config: Config,
    registry: Registry,
}

impl<S> Engine<S>
where
    S: Catalog + Ledger + Games,
{
    pub fn new(store: S, config: Config) -> Self {
        Self {
            store,
            config,
            registry: Registry::default(),
        }
    }
    pub fn store(&self) -> &S {
        &self.store
    }
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Produce the next piece of content for a user in a game.
    ///
    /// `game` is a registry slug or id. Solver games query the catalog with
    /// filters from the game settings and serve an unseen variant; chart and
    /// scenario games return an instruction for the client.
    pub async fn fetch<R: Rng>(
        &self,
        user: ID<User>,
        game: &str,
        level: Level,
        rng: &mut R,
    ) -> Result<Deal, EngineError> {
        let config = self.registry.resolve(&self.store, game).await?;
        log::info!("fetch {} for {} at {} ({})", config.slug(), user, level, config.mode());
        match config.mode() {
            Mode::Solver => self.solver(user, &config, rng).await.map(Deal::Solver),
            Mode::Chart => Ok(Deal::Chart(Chart::build(config.settings(), level, rng))),
            Mode::Scenario => Ok(Deal::Scenario(Scenario::build(config.slug(), level, rng))),
        }
    }

    async fn solver<R: Rng>(
        &self,
        user: ID<User>,
        game: &GameConfig,
        rng: &mut R,
    ) -> Result<SolvedDeal, EngineError> {
        let filter = Filter::from(game.settings()).limit(self.config.candidates);
        let pool = self.store.candidates(&filter).await?;
        log::debug!("{} candidates for {}", pool.len(), filter);
        let exposure = Exposure::new(&self.store, self.config.symmetry);
        let selection = Selector::new(exposure).select(pool, user, rng).await?;
        Ok(SolvedDeal::new(game.id(), selection))
    }

    /// Grade a submission on a served deal and play the opponent's reply.
    ///
    /// The shown variant is recorded as seen. A failed write is logged and
    /// does not affect the outcome. The villain replies from the node the
    /// hero's matched action leads to, unless the hero folded or the tree
    /// ends there.
    pub async fn answer<R: Rng>(
        &self,
        user: ID<User>,
        deal: &SolvedDeal,
        submission: &Submission,
        rng: &mut R,
    ) -> Outcome {
        let hand = deal.hand();
        let grade = self.config.rubric.grade(submission, hand.root(), hand.pot());
        if let Err(e) = self.store.record(user, deal.base(), deal.variant()).await {
            log::warn!("failed to record {} of {} for {}: {}", deal.variant(), deal.base(), user, e);
        }
        let villain = match submission.kind() {
            Kind::Fold => None,
            _ => grade
                .chosen()
                .and_then(|edge| hand.root().follow(&edge))
                .map(|node| Villain::resolve(node, rng)),
        };
        log::info!(
            "answer {} by {}: {} damage {}",
            deal.base(),
            user,
            grade.verdict(),
            grade.damage()
        );
        Outcome { grade, villain }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drill_cards::Permutation;
    use drill_cards::Permute;
    use drill_cards::Symmetry;
    use drill_cards::VariantKey;
    use drill_spots::Edge;
    use drill_spots::Verdict;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const HANDS: &str = r#"[
        {
            "id": "01890a5d-ac96-774b-bcce-b302099a8057",
            "street": "flop",
            "hero_position": "BTN",
            "stack_category": "standard",
            "spot_type": "cbet",
            "hero_hand": "AsKd",
            "board": "Ah7c2s",
            "pot": 50.0,
            "tree": {"actions": {
                "fold": {"frequency": 0.0, "ev": 0.0},
                "call": {"frequency": 0.55, "ev": 12.5, "next_node": {
                    "new_card": "Td",
                    "actions": {"check": {"frequency": 0.7, "ev": 13.0}, "bet_75": {"frequency": 0.3, "ev": 13.1}}
                }},
                "raise_150": {"frequency": 0.45, "ev": 12.3}
            }}
        },
        {
            "id": "01890a5d-ac96-774b-bcce-b302099a8058",
            "street": "river",
            "hero_position": "BB",
            "stack_category": "deep",
            "hero_hand": "9s8s",
            "board": "Ts7d2cJh3h"
        }
    ]"#;

    const GAMES: &str = r#"[
        {"id": "01890a5d-ac96-774b-bcce-b302099a8000", "slug": "cbet-academy", "engine_type": "PIO",
         "config": {"street": "flop", "position": "BTN", "stack": 100}},
        {"id": "01890a5d-ac96-774b-bcce-b302099a8001", "slug": "empty-shelf", "engine_type": "PIO",
         "config": {"street": "turn"}},
        {"id": "01890a5d-ac96-774b-bcce-b302099a8002", "slug": "shove-or-die", "engine_type": "CHART",
         "config": {"stack": 10, "chart_type": "push_fold"}},
        {"id": "01890a5d-ac96-774b-bcce-b302099a8003", "slug": "cooler-cage", "engine_type": "SCENARIO"}
    ]"#;

    fn engine(symmetry: Symmetry) -> Engine<Memory> {
        let config = Config {
            symmetry,
            ..Config::default()
        };
        Engine::new(Memory::from_json(HANDS, GAMES).unwrap(), config)
    }

    async fn deal(engine: &Engine<Memory>, user: ID<User>, rng: &mut SmallRng) -> SolvedDeal {
        match engine.fetch(user, "cbet-academy", Level::from(1), rng).await.unwrap() {
            Deal::Solver(deal) => deal,
            other => panic!("expected a solver deal, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn solver_deal_is_a_relabeled_corpus_hand() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let engine = engine(Symmetry::Symmetric);
        let deal = deal(&engine, ID::default(), rng).await;
        let base = engine.store().hands()[0].clone();
        let permutation = Permutation::try_from(deal.variant()).unwrap();
        assert!(deal.base() == base.id());
        assert!(deal.hand() == &base.permute(&permutation));
        assert!(deal.menu().len() == 3);
        assert!(!deal.exhausted());
    }

    #[tokio::test]
    async fn no_candidates_is_an_error() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let engine = engine(Symmetry::Symmetric);
        let result = engine.fetch(ID::default(), "empty-shelf", Level::from(1), rng).await;
        assert!(matches!(result, Err(EngineError::Selection(SelectionError::NoCandidates))));
    }

    #[tokio::test]
    async fn unknown_game_is_an_error() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let engine = engine(Symmetry::Symmetric);
        let result = engine.fetch(ID::default(), "no-such-game", Level::from(1), rng).await;
        assert!(matches!(result, Err(EngineError::UnknownGame(_))));
    }

    #[tokio::test]
    async fn chart_and_scenario_dispatch() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let engine = engine(Symmetry::Symmetric);
        match engine.fetch(ID::default(), "shove-or-die", Level::from(2), rng).await.unwrap() {
            Deal::Chart(chart) => assert!((5..=13).contains(&chart.stack())),
            other => panic!("expected a chart, got {:?}", other),
        }
        let id = "01890a5d-ac96-774b-bcce-b302099a8003";
        match engine.fetch(ID::default(), id, Level::from(8), rng).await.unwrap() {
            Deal::Scenario(scenario) => {
                assert!(scenario.id() == "cooler-cage");
                assert!(scenario.script_name() == "cooler_hell");
                assert!(scenario.rig().is_some());
            }
            other => panic!("expected a scenario, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn answer_records_and_replies() {
        let ref mut rng = SmallRng::seed_from_u64(9);
        let engine = engine(Symmetry::Cyclic);
        let user = ID::<User>::default();
        let deal = deal(&engine, user, rng).await;
        let outcome = engine
            .answer(user, &deal, &Submission::new(Kind::Call, None), rng)
            .await;
        assert!(outcome.grade().verdict() == Verdict::Optimal);
        let reply = outcome.villain().unwrap();
        assert!(matches!(reply.edge(), Edge::Check | Edge::Bet(_)));
        let seen = engine.store().seen(user, deal.base()).await.unwrap();
        assert!(seen.contains(deal.variant()));
    }

    #[tokio::test]
    async fn folding_ends_the_hand() {
        let ref mut rng = SmallRng::seed_from_u64(9);
        let engine = engine(Symmetry::Symmetric);
        let user = ID::<User>::default();
        let deal = deal(&engine, user, rng).await;
        let outcome = engine
            .answer(user, &deal, &Submission::new(Kind::Fold, None), rng)
            .await;
        assert!(outcome.grade().damage() == 15);
        assert!(outcome.villain().is_none());
    }

    #[tokio::test]
    async fn leaf_branches_get_no_reply() {
        let ref mut rng = SmallRng::seed_from_u64(9);
        let engine = engine(Symmetry::Symmetric);
        let user = ID::<User>::default();
        let deal = deal(&engine, user, rng).await;
        let raise = Submission::new(Kind::Raise, Some(150.));
        let outcome = engine.answer(user, &deal, &raise, rng).await;
        assert!(outcome.grade().is_indifferent());
        assert!(outcome.villain().is_none());
    }

    #[tokio::test]
    async fn cycles_through_every_variant_then_falls_back() {
        let ref mut rng = SmallRng::seed_from_u64(4);
        let engine = engine(Symmetry::Cyclic);
        let user = ID::<User>::default();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..4 {
            let deal = deal(&engine, user, rng).await;
            assert!(!deal.exhausted());
            assert!(seen.insert(deal.variant().clone()));
            engine
                .answer(user, &deal, &Submission::new(Kind::Call, None), rng)
                .await;
        }
        let deal = deal(&engine, user, rng).await;
        assert!(deal.exhausted());
        assert!(deal.variant() == &VariantKey::identity());
    }
}
