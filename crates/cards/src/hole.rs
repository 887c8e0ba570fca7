use super::card::Card;
use super::error::CardError;
use super::permutation::Permutation;
use super::permute::Permute;

/// A player's two private hole cards.
///
/// Cards keep the order they were dealt in so that display and
/// serialization reproduce the corpus text exactly.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hole([Card; 2]);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        self.0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
}

/// a permutation is a bijection, so distinct cards stay distinct
impl Permute for Hole {
    fn permute(&self, permutation: &Permutation) -> Self {
        Self(self.0.map(|card| card.permute(permutation)))
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

impl TryFrom<(Card, Card)> for Hole {
    type Error = CardError;
    fn try_from((a, b): (Card, Card)) -> Result<Self, Self::Error> {
        match a == b {
            true => Err(CardError::Duplicate(a.to_string())),
            false => Ok(Self([a, b])),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Hole {
    type Error = CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match Card::parse(s)?.as_slice() {
            [a, b] => Self::try_from((*a, *b)),
            cards => Err(CardError::WrongCount {
                expected: "2",
                found: cards.len(),
                text: s.to_string(),
            }),
        }
    }
}
impl TryFrom<String> for Hole {
    type Error = CardError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Hole> for String {
    fn from(hole: Hole) -> Self {
        hole.to_string()
    }
}
