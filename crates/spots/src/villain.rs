use super::edge::Edge;
use super::node::Branch;
use super::node::DecisionNode;
use drill_core::Probability;
use rand::Rng;

/// The opponent's move out of a node.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Reply {
    edge: Edge,
    frequency: Probability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    next: Option<DecisionNode>,
}

impl Reply {
    /// nothing to decide, so check through
    pub fn forced() -> Self {
        Self {
            edge: Edge::Check,
            frequency: 1.,
            next: None,
        }
    }
    pub fn edge(&self) -> Edge {
        self.edge
    }
    /// solver frequency of the chosen branch, as written in the corpus
    pub fn frequency(&self) -> Probability {
        self.frequency
    }
    pub fn next(&self) -> Option<&DecisionNode> {
        self.next.as_ref()
    }
}

impl From<(Edge, &Branch)> for Reply {
    fn from((edge, branch): (Edge, &Branch)) -> Self {
        Self {
            edge,
            frequency: branch.frequency(),
            next: branch.next().cloned(),
        }
    }
}

/// Plays the solver's mixed strategy on the other side of the table.
pub struct Villain;

impl Villain {
    /// Sample a branch proportionally to its solver frequency.
    ///
    /// Weights are normalized by their total, so they need not sum to one.
    /// Negative weights count as zero. Empty and all-zero nodes check.
    pub fn resolve<R: Rng>(node: &DecisionNode, rng: &mut R) -> Reply {
        let weights = node
            .actions()
            .iter()
            .map(|(_, b)| b.frequency().max(0.))
            .collect::<Vec<Probability>>();
        let total = weights.iter().sum::<Probability>();
        if !(total > 0.) {
            log::debug!("villain checks through a node with no weight");
            return Reply::forced();
        }
        let roll = rng.random::<Probability>();
        let mut cumulative = 0.;
        for ((edge, branch), weight) in node.actions().iter().zip(weights.iter()) {
            if *weight > 0. {
                cumulative += weight / total;
                if roll <= cumulative {
                    return Reply::from((*edge, branch));
                }
            }
        }
        // rounding left the top of the table just short of one
        node.actions()
            .iter()
            .zip(weights.iter())
            .rev()
            .find(|(_, w)| **w > 0.)
            .map(|((edge, branch), _)| Reply::from((*edge, branch)))
            .unwrap_or_else(Reply::forced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn node(weights: &[(Edge, Probability)]) -> DecisionNode {
        DecisionNode::new(
            weights
                .iter()
                .map(|(e, w)| (*e, Branch::new(*w, 0.)))
                .collect(),
        )
    }

    fn histogram(node: &DecisionNode, draws: usize) -> Vec<Probability> {
        let ref mut rng = SmallRng::seed_from_u64(0xDEC1DE);
        let mut counts = vec![0usize; node.actions().len()];
        for _ in 0..draws {
            let reply = Villain::resolve(node, rng);
            let i = node
                .actions()
                .iter()
                .position(|(e, _)| *e == reply.edge())
                .unwrap();
            counts[i] += 1;
        }
        counts
            .into_iter()
            .map(|n| n as Probability / draws as Probability)
            .collect()
    }

    #[test]
    fn empirical_frequencies_match() {
        let node = node(&[(Edge::Check, 0.6), (Edge::Bet(50.), 0.25), (Edge::Bet(100.), 0.15)]);
        let observed = histogram(&node, 100_000);
        for (expected, observed) in [0.6, 0.25, 0.15].iter().zip(observed) {
            assert!((expected - observed).abs() < 0.02, "{} vs {}", expected, observed);
        }
    }

    #[test]
    fn unnormalized_weights_are_normalized() {
        let node = node(&[(Edge::Fold, 3.), (Edge::Call, 1.)]);
        let observed = histogram(&node, 100_000);
        assert!((observed[0] - 0.75).abs() < 0.02);
        assert!((observed[1] - 0.25).abs() < 0.02);
    }

    #[test]
    fn zero_weight_is_never_drawn() {
        let node = node(&[(Edge::Fold, 0.), (Edge::Call, 0.5), (Edge::Raise(150.), 0.5)]);
        let observed = histogram(&node, 10_000);
        assert!(observed[0] == 0.);
    }

    #[test]
    fn empty_node_checks() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let reply = Villain::resolve(&DecisionNode::default(), rng);
        assert!(reply.edge() == Edge::Check);
        assert!(reply.frequency() == 1.);
        assert!(reply.edge().sizing().is_none());
        assert!(reply.next().is_none());
    }

    #[test]
    fn zero_sum_node_checks() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let node = node(&[(Edge::Fold, 0.), (Edge::Bet(50.), 0.)]);
        assert!(Villain::resolve(&node, rng) == Reply::forced());
    }

    #[test]
    fn reply_carries_sizing_and_continuation() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let river = DecisionNode::new(vec![(Edge::Call, Branch::new(1., 2.))]);
        let node = DecisionNode::new(vec![(Edge::Bet(75.), Branch::new(0.3, 1.).then(river.clone()))]);
        let reply = Villain::resolve(&node, rng);
        assert!(reply.edge() == Edge::Bet(75.));
        assert!(reply.edge().sizing() == Some(75.));
        assert!(reply.frequency() == 0.3);
        assert!(reply.next() == Some(&river));
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let node = node(&[(Edge::Check, 0.5), (Edge::Bet(50.), 0.5)]);
        let a = SmallRng::seed_from_u64(42);
        let b = SmallRng::seed_from_u64(42);
        let draw = |mut rng: SmallRng| {
            (0..32)
                .map(|_| Villain::resolve(&node, &mut rng).edge())
                .collect::<Vec<_>>()
        };
        assert!(draw(a) == draw(b));
    }
}
