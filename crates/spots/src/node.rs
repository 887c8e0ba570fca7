use super::edge::Edge;
use super::edge::Kind;
use drill_cards::Card;
use drill_cards::Permutation;
use drill_cards::Permute;
use drill_core::Percent;
use drill_core::Probability;
use drill_core::Utility;

/// What the solver says about one action out of a node.
#[derive(Debug, Clone, Default, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Branch {
    #[serde(default, alias = "freq")]
    frequency: Probability,
    #[serde(default, rename = "ev", alias = "expected_value", alias = "expectedValue")]
    ev: Utility,
    #[serde(
        default,
        rename = "next_node",
        alias = "nextNode",
        skip_serializing_if = "Option::is_none"
    )]
    next: Option<Box<DecisionNode>>,
}

/// the implicit branch of a node with nothing to decide
static FORCED: Branch = Branch {
    frequency: 1.,
    ev: 0.,
    next: None,
};

impl Branch {
    pub fn new(frequency: Probability, ev: Utility) -> Self {
        Self {
            frequency,
            ev,
            next: None,
        }
    }
    pub fn then(mut self, node: DecisionNode) -> Self {
        self.next = Some(Box::new(node));
        self
    }
    pub fn frequency(&self) -> Probability {
        self.frequency
    }
    pub fn ev(&self) -> Utility {
        self.ev
    }
    pub fn next(&self) -> Option<&DecisionNode> {
        self.next.as_deref()
    }
}

impl Permute for Branch {
    fn permute(&self, permutation: &Permutation) -> Self {
        Self {
            frequency: self.frequency,
            ev: self.ev,
            next: self.next.permute(permutation),
        }
    }
}

/// A solved decision point: ordered branches plus the card, if any,
/// that was dealt on the way in.
///
/// Branch order is the order of the solver document and survives
/// a serde round trip. A node with no branches is a forced check.
#[derive(Debug, Clone, Default, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct DecisionNode {
    #[serde(default, with = "ordered")]
    actions: Vec<(Edge, Branch)>,
    #[serde(default, alias = "new_card", skip_serializing_if = "Option::is_none")]
    card: Option<Card>,
}

impl DecisionNode {
    pub fn new(actions: Vec<(Edge, Branch)>) -> Self {
        Self {
            actions,
            card: None,
        }
    }
    pub fn dealt(mut self, card: Card) -> Self {
        self.card = Some(card);
        self
    }
    pub fn card(&self) -> Option<Card> {
        self.card
    }
    pub fn actions(&self) -> &[(Edge, Branch)] {
        &self.actions
    }
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
    /// branches to decide between. an empty node offers a single
    /// check with frequency 1 and EV 0.
    pub fn choices(&self) -> Vec<(Edge, &Branch)> {
        match self.actions.is_empty() {
            true => vec![(Edge::Check, &FORCED)],
            false => self.actions.iter().map(|(e, b)| (*e, b)).collect(),
        }
    }
    pub fn branch(&self, edge: &Edge) -> Option<&Branch> {
        self.actions.iter().find(|(e, _)| e == edge).map(|(_, b)| b)
    }
    /// where play continues after taking this edge
    pub fn follow(&self, edge: &Edge) -> Option<&DecisionNode> {
        self.branch(edge).and_then(Branch::next)
    }
    /// buttons to show the player, in solver order
    pub fn menu(&self) -> Vec<Choice> {
        self.choices()
            .into_iter()
            .map(|(edge, branch)| Choice {
                kind: edge.kind(),
                sizing: edge.sizing(),
                label: edge.label(),
                frequency: branch.frequency(),
                ev: branch.ev(),
            })
            .collect()
    }
    /// number of decision points in this subtree, this one included
    pub fn size(&self) -> usize {
        1 + self
            .actions
            .iter()
            .filter_map(|(_, b)| b.next())
            .map(DecisionNode::size)
            .sum::<usize>()
    }
}

impl Permute for DecisionNode {
    fn permute(&self, permutation: &Permutation) -> Self {
        Self {
            actions: self
                .actions
                .iter()
                .map(|(e, b)| (*e, b.permute(permutation)))
                .collect(),
            card: self.card.permute(permutation),
        }
    }
}

/// One entry of the action menu.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Choice {
    pub kind: Kind,
    pub sizing: Option<Percent>,
    pub label: String,
    pub frequency: Probability,
    pub ev: Utility,
}

/// (de)serializes branches as a json object while keeping key order
mod ordered {
    use super::Branch;
    use super::Edge;
    use serde::de::MapAccess;
    use serde::de::Visitor;
    use serde::Deserializer;
    use serde::Serializer;

    pub fn serialize<S>(actions: &[(Edge, Branch)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(actions.iter().map(|(e, b)| (e, b)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(Edge, Branch)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Ordered;
        impl<'de> Visitor<'de> for Ordered {
            type Value = Vec<(Edge, Branch)>;
            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "a map from action keys to branches")
            }
            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut actions = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<Edge, Branch>()? {
                    actions.push(entry);
                }
                Ok(actions)
            }
        }
        deserializer.deserialize_map(Ordered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TREE: &str = r#"{
        "actions": {
            "raise_150": {"frequency": 0.25, "ev": 1.5},
            "check": {"frequency": 0.5, "ev": 1.25, "next_node": {
                "new_card": "Td",
                "actions": {"bet_50": {"freq": 1.0, "expected_value": 2.0}}
            }},
            "bet_33.3": {"frequency": 0.25, "ev": 1.0}
        }
    }"#;

    #[test]
    fn keeps_document_order() {
        let node = serde_json::from_str::<DecisionNode>(TREE).unwrap();
        let edges = node.actions().iter().map(|(e, _)| *e).collect::<Vec<_>>();
        assert!(edges == vec![Edge::Raise(150.), Edge::Check, Edge::Bet(33.3)]);
        let json = serde_json::to_string(&node).unwrap();
        let raise = json.find("raise_150").unwrap();
        let check = json.find("check").unwrap();
        let bet = json.find("bet_33.3").unwrap();
        assert!(raise < check && check < bet);
        assert!(serde_json::from_str::<DecisionNode>(&json).unwrap() == node);
    }

    #[test]
    fn reads_nested_nodes_and_aliases() {
        let node = serde_json::from_str::<DecisionNode>(TREE).unwrap();
        let next = node.follow(&Edge::Check).unwrap();
        assert!(next.card() == Some(Card::try_from("Td").unwrap()));
        assert!(next.branch(&Edge::Bet(50.)).unwrap().ev() == 2.0);
        assert!(next.branch(&Edge::Bet(50.)).unwrap().frequency() == 1.0);
        assert!(node.size() == 2);
    }

    #[test]
    fn rejects_unknown_action_keys() {
        let json = r#"{"actions": {"limp": {"frequency": 1.0, "ev": 0.0}}}"#;
        assert!(serde_json::from_str::<DecisionNode>(json).is_err());
    }

    #[test]
    fn empty_node_is_a_forced_check() {
        let node = serde_json::from_str::<DecisionNode>("{}").unwrap();
        let choices = node.choices();
        assert!(choices.len() == 1);
        assert!(choices[0].0 == Edge::Check);
        assert!(choices[0].1.frequency() == 1.0);
        assert!(choices[0].1.ev() == 0.0);
    }

    #[test]
    fn menu_lists_labels_in_order() {
        let node = serde_json::from_str::<DecisionNode>(TREE).unwrap();
        let labels = node.menu().into_iter().map(|c| c.label).collect::<Vec<_>>();
        assert!(labels == vec!["RAISE 150%", "CHECK", "BET 33.3%"]);
    }

    #[test]
    fn permute_reaches_nested_cards() {
        let node = serde_json::from_str::<DecisionNode>(TREE).unwrap();
        let rotated = node.permute(&Permutation::rotation(1).unwrap());
        let card = rotated.follow(&Edge::Check).and_then(DecisionNode::card);
        assert!(card == Some(Card::try_from("Tc").unwrap()));
        assert!(rotated.permute(&Permutation::rotation(3).unwrap()) == node);
    }
}
