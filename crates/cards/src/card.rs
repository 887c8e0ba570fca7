use super::error::CardError;
use super::rank::Rank;
use super::suit::Suit;
use drill_core::Arbitrary;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This yields a natural ordering where cards are sorted
/// first by rank, then by suit within each rank.
///
/// # Parsing
///
/// Cards parse from two-character strings like `"As"` (ace of spades) or
/// `"Tc"` (ten of clubs). Parsing is strict: anything else is a
/// [`CardError::MalformedCard`]. Use [`Card::parse`] for concatenated cards.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// All 52 cards in encoding order.
    pub fn deck() -> impl Iterator<Item = Self> {
        (0..52u8).map(Self)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self(n % 52)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => match (Rank::try_from(r), Suit::try_from(s)) {
                (Ok(rank), Ok(suit)) => Ok(Card::from((rank, suit))),
                _ => Err(CardError::MalformedCard(format!("{}{}", r, s))),
            },
            _ => Err(CardError::MalformedCard(s.to_string())),
        }
    }
}
impl TryFrom<String> for Card {
    type Error = CardError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl Card {
    /// Parses a string of concatenated card notations into a vector of cards.
    ///
    /// Whitespace and commas are ignored. Each card is two characters: rank
    /// then suit. Returns an error if any card fails to parse.
    pub fn parse(s: &str) -> Result<Vec<Self>, CardError> {
        s.replace(|c: char| c.is_whitespace() || c == ',', "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        Self(rand::random_range(0..52))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        let card = Card::random();
        assert!(card == Card::from((card.rank(), card.suit())));
    }

    #[test]
    fn bijective_u8() {
        for card in Card::deck() {
            assert!(card == Card::from(u8::from(card)));
        }
    }

    #[test]
    fn bijective_str() {
        for card in Card::deck() {
            assert!(card == Card::try_from(card.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn malformed_suit_is_rejected() {
        assert!(Card::try_from("Ax") == Err(CardError::MalformedCard("Ax".into())));
        assert!(Card::try_from("A").is_err());
        assert!(Card::try_from("AsK").is_err());
    }

    #[test]
    fn parse_concatenated() {
        let cards = Card::parse("Ah7c 2s").unwrap();
        assert!(cards.len() == 3);
        assert!(cards[0] == Card::from((Rank::Ace, Suit::H)));
        assert!(cards[2] == Card::from((Rank::Two, Suit::S)));
        assert!(Card::parse("Ah7x").is_err());
    }

    #[test]
    fn serde_as_text() {
        let card = Card::try_from("Td").unwrap();
        assert!(serde_json::to_string(&card).unwrap() == "\"Td\"");
        assert!(serde_json::from_str::<Card>("\"Td\"").unwrap() == card);
        assert!(serde_json::from_str::<Card>("\"Tx\"").is_err());
    }
}
