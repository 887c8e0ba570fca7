use super::store::Ledger;
use super::store::User;
use drill_cards::Permutation;
use drill_cards::Symmetry;
use drill_cards::VariantKey;
use drill_core::ID;
use drill_spots::SolvedHand;
use std::collections::HashSet;

/// What is left to show of one hand.
#[derive(Debug, Clone, PartialEq)]
pub enum Availability {
    /// variants not yet shown, in variant-space order
    Unseen(Vec<(Permutation, VariantKey)>),
    /// every variant has been shown
    Exhausted,
}

impl Availability {
    /// compare a variant space against a known seen set
    pub fn of(space: &[Permutation], seen: &HashSet<VariantKey>) -> Self {
        let unseen = space
            .iter()
            .map(|p| (*p, VariantKey::from(p)))
            .filter(|(_, key)| !seen.contains(key))
            .collect::<Vec<_>>();
        match unseen.is_empty() {
            true => Self::Exhausted,
            false => Self::Unseen(unseen),
        }
    }
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

/// Answers "which variants of this hand has this user not seen yet".
/// It never picks one; that is the selector's job.
pub struct Exposure<'a, L: Ledger> {
    ledger: &'a L,
    symmetry: Symmetry,
}

impl<'a, L: Ledger> Exposure<'a, L> {
    pub fn new(ledger: &'a L, symmetry: Symmetry) -> Self {
        Self { ledger, symmetry }
    }
    pub fn symmetry(&self) -> Symmetry {
        self.symmetry
    }
    pub async fn unseen(
        &self,
        user: ID<User>,
        hand: ID<SolvedHand>,
    ) -> anyhow::Result<Availability> {
        let seen = self.ledger.seen(user, hand).await?;
        Ok(Availability::of(self.symmetry.space(), &seen))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Memory;

    fn keys(n: usize) -> HashSet<VariantKey> {
        Symmetry::Symmetric
            .space()
            .iter()
            .take(n)
            .map(VariantKey::from)
            .collect()
    }

    #[test]
    fn nothing_seen_everything_available() {
        match Availability::of(Symmetry::Symmetric.space(), &HashSet::new()) {
            Availability::Unseen(unseen) => assert!(unseen.len() == 24),
            Availability::Exhausted => panic!("fresh hand reported exhausted"),
        }
    }

    #[test]
    fn one_left_is_the_missing_key() {
        let space = Symmetry::Symmetric.space();
        let last = VariantKey::from(space[23]);
        match Availability::of(space, &keys(23)) {
            Availability::Unseen(unseen) => {
                assert!(unseen.len() == 1);
                assert!(unseen[0].1 == last);
                assert!(unseen[0].0 == space[23]);
            }
            Availability::Exhausted => panic!("one variant should remain"),
        }
    }

    #[test]
    fn all_seen_is_exhausted() {
        assert!(Availability::of(Symmetry::Symmetric.space(), &keys(24)).is_exhausted());
        assert!(Availability::of(Symmetry::Cyclic.space(), &keys(24)).is_exhausted());
    }

    #[test]
    fn keys_outside_the_space_do_not_count() {
        let seen = keys(24)
            .into_iter()
            .filter(|k| !Symmetry::Cyclic.space().iter().any(|p| VariantKey::from(p) == *k))
            .collect::<HashSet<_>>();
        match Availability::of(Symmetry::Cyclic.space(), &seen) {
            Availability::Unseen(unseen) => assert!(unseen.len() == 4),
            Availability::Exhausted => panic!("cyclic space untouched"),
        }
    }

    #[tokio::test]
    async fn reads_through_the_ledger() {
        let memory = Memory::default();
        let user = ID::<User>::default();
        let hand = ID::<SolvedHand>::default();
        let other = ID::<SolvedHand>::default();
        for p in Symmetry::Cyclic.space().iter().take(3) {
            memory.record(user, hand, &VariantKey::from(p)).await.unwrap();
        }
        let exposure = Exposure::new(&memory, Symmetry::Cyclic);
        match exposure.unseen(user, hand).await.unwrap() {
            Availability::Unseen(unseen) => {
                assert!(unseen.len() == 1);
                assert!(unseen[0].0 == Symmetry::Cyclic.space()[3]);
            }
            Availability::Exhausted => panic!("one rotation should remain"),
        }
        memory
            .record(user, hand, &VariantKey::from(Symmetry::Cyclic.space()[3]))
            .await
            .unwrap();
        assert!(exposure.unseen(user, hand).await.unwrap().is_exhausted());
        assert!(!exposure.unseen(user, other).await.unwrap().is_exhausted());
    }
}
