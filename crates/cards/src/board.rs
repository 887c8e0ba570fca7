use super::card::Card;
use super::error::CardError;
use super::permutation::Permutation;
use super::permute::Permute;
use super::street::Street;

/// The community cards visible to all players.
///
/// A board contains 0, 3, 4, or 5 cards corresponding to preflop, flop, turn,
/// and river respectively. Text form is the concatenation `"Ah7c2s"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board(Vec<Card>);

impl Board {
    /// Creates an empty board (preflop state).
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    /// Infers the current street from board size.
    pub fn street(&self) -> Street {
        match self.0.len() {
            0 => Street::Pref,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::Rive,
        }
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<Card>> for Board {
    type Error = CardError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        if let Some(dupe) = cards
            .iter()
            .enumerate()
            .find(|(i, c)| cards[..*i].contains(c))
            .map(|(_, c)| c)
        {
            return Err(CardError::Duplicate(dupe.to_string()));
        }
        match cards.len() {
            0 | 3 | 4 | 5 => Ok(Self(cards)),
            n => Err(CardError::WrongCount {
                expected: "0, 3, 4 or 5",
                found: n,
                text: cards.iter().map(Card::to_string).collect(),
            }),
        }
    }
}

impl Permute for Board {
    fn permute(&self, permutation: &Permutation) -> Self {
        Self(self.0.permute(permutation))
    }
}

/// str isomorphism
impl TryFrom<&str> for Board {
    type Error = CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?)
    }
}
impl TryFrom<String> for Board {
    type Error = CardError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{}", c))
    }
}
