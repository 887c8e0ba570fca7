use super::error::SelectionError;
use super::exposure::Availability;
use super::exposure::Exposure;
use super::store::Ledger;
use super::store::User;
use drill_cards::Permutation;
use drill_cards::Permute;
use drill_cards::VariantKey;
use drill_core::ID;
use drill_core::Unique;
use drill_spots::SolvedHand;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rand::seq::SliceRandom;

/// A hand ready to be shown: relabeled, with the variant that produced it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Selection {
    hand: SolvedHand,
    variant: VariantKey,
    exhausted: bool,
}

impl Selection {
    /// the hand with every card relabeled
    pub fn hand(&self) -> &SolvedHand {
        &self.hand
    }
    /// identifier of the corpus hand this variant was made from
    pub fn base(&self) -> ID<SolvedHand> {
        self.hand.id()
    }
    pub fn variant(&self) -> &VariantKey {
        &self.variant
    }
    /// true when every variant of every candidate had been seen and
    /// the identity was served as a fallback
    pub fn exhausted(&self) -> bool {
        self.exhausted
    }
}

/// Picks a hand and an unseen suit variant of it for one user.
pub struct Selector<'a, L: Ledger> {
    exposure: Exposure<'a, L>,
}

impl<'a, L: Ledger> Selector<'a, L> {
    pub fn new(exposure: Exposure<'a, L>) -> Self {
        Self { exposure }
    }

    /// Shuffle the pool and serve the first candidate that still has an
    /// unseen variant, relabeled by a uniformly chosen one of them.
    ///
    /// If the user has seen everything, the first shuffled candidate is
    /// served as-is with `exhausted` set. Only an empty pool fails, and it
    /// fails before the ledger is consulted.
    pub async fn select<R: Rng>(
        &self,
        mut pool: Vec<SolvedHand>,
        user: ID<User>,
        rng: &mut R,
    ) -> Result<Selection, SelectionError> {
        if pool.is_empty() {
            return Err(SelectionError::NoCandidates);
        }
        pool.shuffle(rng);
        for candidate in pool.iter() {
            if let Availability::Unseen(unseen) = self.exposure.unseen(user, candidate.id()).await? {
                if let Some((permutation, variant)) = unseen.choose(rng) {
                    log::debug!(
                        "selected {} as {} ({} unseen)",
                        candidate.id(),
                        variant,
                        unseen.len()
                    );
                    return Ok(Selection {
                        hand: candidate.permute(permutation),
                        variant: variant.clone(),
                        exhausted: false,
                    });
                }
            }
        }
        let fallback = pool.swap_remove(0);
        log::warn!(
            "variant exhaustion fallback: user {} has seen all {} variants of {} candidates, serving {}",
            user,
            self.exposure.symmetry().multiplier(),
            pool.len() + 1,
            fallback.id()
        );
        Ok(Selection {
            hand: fallback,
            variant: VariantKey::from(Permutation::identity()),
            exhausted: true,
        })
    }
}
