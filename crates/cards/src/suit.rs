use super::error::CardError;

/// Card suit: clubs, diamonds, hearts, spades.
///
/// Suits are strategically interchangeable in poker: only the pattern of
/// suit matches matters, not which specific suits are involved. This symmetry
/// is exploited by [`Permutation`] to multiply visual content.
///
/// The ordering (C < D < H < S) coincides with the alphabetical order of the
/// text symbols, which is what makes variant keys canonical.
///
/// [`Permutation`]: super::permutation::Permutation
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    /// All four suits in canonical order.
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
    /// Unicode suit symbol for display.
    pub fn ascii(&self) -> char {
        match self {
            Suit::C => '♣',
            Suit::D => '♦',
            Suit::H => '♥',
            Suit::S => '♠',
        }
    }
    /// Lowercase text symbol.
    pub const fn symbol(&self) -> char {
        match self {
            Suit::C => 'c',
            Suit::D => 'd',
            Suit::H => 'h',
            Suit::S => 's',
        }
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n % 4 {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            _ => Suit::S,
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// char isomorphism. strict: only the lowercase text symbols are suits.
impl TryFrom<char> for Suit {
    type Error = CardError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'c' => Ok(Suit::C),
            'd' => Ok(Suit::D),
            'h' => Ok(Suit::H),
            's' => Ok(Suit::S),
            _ => Err(CardError::MalformedSuit(c.to_string())),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "c" | "♣" => Ok(Suit::C),
            "d" | "♦" => Ok(Suit::D),
            "h" | "♥" => Ok(Suit::H),
            "s" | "♠" => Ok(Suit::S),
            _ => Err(CardError::MalformedSuit(s.to_string())),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
