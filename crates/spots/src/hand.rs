use super::node::DecisionNode;
use super::position::Depth;
use super::position::Position;
use drill_cards::Board;
use drill_cards::Hole;
use drill_cards::Permutation;
use drill_cards::Permute;
use drill_cards::Street;
use drill_core::ID;
use drill_core::Unique;
use drill_core::Utility;
use serde_json::Map;
use serde_json::Value;

/// pass-through fields that carry cards. every other extra is opaque.
const CARD_FIELDS: [&str; 9] = [
    "flop",
    "turn",
    "river",
    "hero_range",
    "villain_range",
    "hand",
    "cards",
    "actions",
    "tree",
];

fn pot() -> Utility {
    100.
}

/// A spot from the solved corpus.
///
/// Read-only once ingested. Every card-bearing field, including cards
/// buried in the decision tree or in the pass-through `extras`, moves
/// together under [`Permute`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SolvedHand {
    id: ID<SolvedHand>,
    street: Street,
    #[serde(rename = "hero_position")]
    position: Position,
    #[serde(default, rename = "villain_position", skip_serializing_if = "Option::is_none")]
    opponent: Option<Position>,
    #[serde(default, rename = "stack_category")]
    depth: Depth,
    #[serde(default, rename = "spot_type", skip_serializing_if = "Option::is_none")]
    spot: Option<String>,
    #[serde(rename = "hero_hand")]
    hero: Hole,
    #[serde(default, rename = "villain_hand", skip_serializing_if = "Option::is_none")]
    villain: Option<Hole>,
    #[serde(default)]
    board: Board,
    #[serde(default = "pot")]
    pot: Utility,
    #[serde(default)]
    hero_stack: Utility,
    #[serde(default)]
    villain_stack: Utility,
    #[serde(default, rename = "tree", alias = "solver_node")]
    root: DecisionNode,
    #[serde(flatten)]
    extras: Map<String, Value>,
}

impl Unique for SolvedHand {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl SolvedHand {
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn position(&self) -> Position {
        self.position
    }
    pub fn opponent(&self) -> Option<Position> {
        self.opponent
    }
    pub fn depth(&self) -> Depth {
        self.depth
    }
    pub fn spot(&self) -> Option<&str> {
        self.spot.as_deref()
    }
    pub fn hero(&self) -> Hole {
        self.hero
    }
    pub fn villain(&self) -> Option<Hole> {
        self.villain
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn pot(&self) -> Utility {
        self.pot
    }
    pub fn stacks(&self) -> (Utility, Utility) {
        (self.hero_stack, self.villain_stack)
    }
    pub fn root(&self) -> &DecisionNode {
        &self.root
    }
    /// corpus fields this model does not name, carried through untouched
    pub fn extras(&self) -> &Map<String, Value> {
        &self.extras
    }
}

impl Permute for SolvedHand {
    fn permute(&self, permutation: &Permutation) -> Self {
        Self {
            id: self.id,
            street: self.street,
            position: self.position,
            opponent: self.opponent,
            depth: self.depth,
            spot: self.spot.clone(),
            hero: self.hero.permute(permutation),
            villain: self.villain.permute(permutation),
            board: self.board.permute(permutation),
            pot: self.pot,
            hero_stack: self.hero_stack,
            villain_stack: self.villain_stack,
            root: self.root.permute(permutation),
            extras: self
                .extras
                .iter()
                .map(|(k, v)| match CARD_FIELDS.contains(&k.as_str()) {
                    true => (k.clone(), v.permute(permutation)),
                    false => (k.clone(), v.clone()),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Edge;

    const HAND: &str = r#"{
        "id": "01890a5d-ac96-774b-bcce-b302099a8057",
        "street": "flop",
        "hero_position": "BTN",
        "villain_position": "BB",
        "stack_category": "standard",
        "spot_type": "cbet",
        "hero_hand": "AsKd",
        "villain_hand": "QhQc",
        "board": "Ah7c2s",
        "pot": 50.0,
        "hero_stack": 97.5,
        "villain_stack": 97.5,
        "tree": {
            "actions": {
                "check": {"frequency": 0.4, "ev": 10.0, "next_node": {
                    "new_card": "Ts",
                    "actions": {"bet_75": {"frequency": 1.0, "ev": 11.0}}
                }},
                "bet_33": {"frequency": 0.6, "ev": 10.4}
            }
        },
        "action_history": ["BTN raise_250", "BB call"],
        "narrative": "flop Ah7c2s, villain holds QhQc",
        "hero_range": "AKs,QQ+,AhKh",
        "flop": ["Ah", "7c", "2s"],
        "solver_file_id": "0189c1f0-2d4c-7000-8000-000000000001"
    }"#;

    fn hand() -> SolvedHand {
        serde_json::from_str(HAND).unwrap()
    }

    #[test]
    fn reads_corpus_record() {
        let hand = hand();
        assert!(hand.street() == Street::Flop);
        assert!(hand.position() == Position::Btn);
        assert!(hand.opponent() == Some(Position::Bb));
        assert!(hand.spot() == Some("cbet"));
        assert!(hand.pot() == 50.0);
        assert!(hand.root().actions().len() == 2);
        assert!(hand.extras().contains_key("narrative"));
        assert!(!hand.extras().contains_key("board"));
    }

    #[test]
    fn permute_moves_every_card() {
        let swap = Permutation::try_from("c=c,d=d,h=s,s=h").unwrap();
        let hand = hand().permute(&swap);
        assert!(hand.hero().to_string() == "AhKd");
        assert!(hand.villain().unwrap().to_string() == "QsQc");
        assert!(hand.board().to_string() == "As7c2h");
        let turn = hand.root().follow(&Edge::Check).and_then(DecisionNode::card);
        assert!(turn.unwrap().to_string() == "Th");
        assert!(hand.extras()["hero_range"] == "AKs,QQ+,AsKs");
        assert!(hand.extras()["flop"] == serde_json::json!(["As", "7c", "2h"]));
        assert!(hand.extras()["action_history"][0] == "BTN raise_250");
    }

    #[test]
    fn permute_leaves_opaque_extras() {
        let swap = Permutation::try_from("c=h,d=s,h=c,s=d").unwrap();
        let hand = hand().permute(&swap);
        assert!(hand.extras()["solver_file_id"] == "0189c1f0-2d4c-7000-8000-000000000001");
        assert!(hand.extras()["narrative"] == "flop Ah7c2s, villain holds QhQc");
        assert!(hand.extras()["action_history"][0] == "BTN raise_250");
    }

    #[test]
    fn permute_keeps_strategy() {
        let original = hand();
        let rotated = original.permute(&Permutation::rotation(2).unwrap());
        assert!(rotated.id() == original.id());
        assert!(rotated.pot() == original.pot());
        assert!(rotated.root().menu() == original.root().menu());
        assert!(rotated.permute(&Permutation::rotation(2).unwrap()) == original);
    }

    #[test]
    fn serde_roundtrip_keeps_extras() {
        let original = hand();
        let json = serde_json::to_string(&original).unwrap();
        let back = serde_json::from_str::<SolvedHand>(&json).unwrap();
        assert!(back == original);
    }
}
