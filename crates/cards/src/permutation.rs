use super::error::CardError;
use super::suit::Suit;
use drill_core::Arbitrary;

/// an array of 4 unique Suits represents
/// any of the 4! = 24 elements in the Suit permutation group.
/// by assuming a "canonical" order of suits (C < D < H < S),
/// we use [Suit; 4] to map C -> P[0], D -> P[1], H -> P[2], S -> P[3].
///
/// the only way to build one is through a bijective source: the constant
/// tables below, [`Permutation::rotation`], or a validated key/array.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Permutation([Suit; 4]);

impl Permutation {
    /// get the image of a Suit under a Permutation
    pub fn map(&self, suit: &Suit) -> Suit {
        self.0[*suit as usize]
    }
    /// the permutation that undoes this one.
    pub fn inverse(&self) -> Self {
        let mut inverse = Suit::all();
        Suit::all()
            .into_iter()
            .for_each(|suit| inverse[self.map(&suit) as usize] = suit);
        Self(inverse)
    }
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
    /// images in canonical source order
    pub fn images(&self) -> [Suit; 4] {
        self.0
    }
}

impl Permutation {
    pub const fn identity() -> Self {
        Self(Suit::all())
    }
    /// cyclic shift of the suit wheel s -> h -> d -> c -> s, applied k times.
    /// keys outside 0..4 are rejected rather than wrapped.
    pub fn rotation(k: usize) -> Result<Self, CardError> {
        Self::rotations()
            .get(k)
            .copied()
            .ok_or(CardError::InvalidRotation(k))
    }
    pub const fn rotations() -> [Self; 4] {
        [
            Self([Suit::C, Suit::D, Suit::H, Suit::S]),
            Self([Suit::S, Suit::C, Suit::D, Suit::H]),
            Self([Suit::H, Suit::S, Suit::C, Suit::D]),
            Self([Suit::D, Suit::H, Suit::S, Suit::C]),
        ]
    }
    pub const fn exhaust() -> [Self; 24] {
        [
            Self([Suit::C, Suit::D, Suit::H, Suit::S]),
            Self([Suit::C, Suit::D, Suit::S, Suit::H]),
            Self([Suit::C, Suit::H, Suit::D, Suit::S]),
            Self([Suit::C, Suit::H, Suit::S, Suit::D]),
            Self([Suit::C, Suit::S, Suit::D, Suit::H]),
            Self([Suit::C, Suit::S, Suit::H, Suit::D]),
            Self([Suit::D, Suit::C, Suit::H, Suit::S]),
            Self([Suit::D, Suit::C, Suit::S, Suit::H]),
            Self([Suit::D, Suit::H, Suit::C, Suit::S]),
            Self([Suit::D, Suit::H, Suit::S, Suit::C]),
            Self([Suit::D, Suit::S, Suit::C, Suit::H]),
            Self([Suit::D, Suit::S, Suit::H, Suit::C]),
            Self([Suit::H, Suit::C, Suit::D, Suit::S]),
            Self([Suit::H, Suit::C, Suit::S, Suit::D]),
            Self([Suit::H, Suit::D, Suit::C, Suit::S]),
            Self([Suit::H, Suit::D, Suit::S, Suit::C]),
            Self([Suit::H, Suit::S, Suit::C, Suit::D]),
            Self([Suit::H, Suit::S, Suit::D, Suit::C]),
            Self([Suit::S, Suit::C, Suit::D, Suit::H]),
            Self([Suit::S, Suit::C, Suit::H, Suit::D]),
            Self([Suit::S, Suit::D, Suit::C, Suit::H]),
            Self([Suit::S, Suit::D, Suit::H, Suit::C]),
            Self([Suit::S, Suit::H, Suit::C, Suit::D]),
            Self([Suit::S, Suit::H, Suit::D, Suit::C]),
        ]
    }
}

/// images must cover all four suits, otherwise the map is not a bijection
impl TryFrom<[Suit; 4]> for Permutation {
    type Error = CardError;
    fn try_from(images: [Suit; 4]) -> Result<Self, Self::Error> {
        let mut sorted = images;
        sorted.sort();
        match sorted == Suit::all() {
            true => Ok(Self(images)),
            false => Err(CardError::MalformedPermutation(
                images.iter().map(Suit::to_string).collect(),
            )),
        }
    }
}

/// parses `source=image` pairs, comma separated, in any order.
/// every suit must appear exactly once on each side.
impl TryFrom<&str> for Permutation {
    type Error = CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let malformed = || CardError::MalformedPermutation(s.to_string());
        let mut images: [Option<Suit>; 4] = [None; 4];
        for pair in s.trim().split(',') {
            let (old, new) = pair.split_once('=').ok_or_else(malformed)?;
            let old = Suit::try_from(old.trim()).map_err(|_| malformed())?;
            let new = Suit::try_from(new.trim()).map_err(|_| malformed())?;
            match images[old as usize] {
                Some(_) => return Err(malformed()),
                None => images[old as usize] = Some(new),
            }
        }
        match images {
            [Some(c), Some(d), Some(h), Some(s)] => {
                Self::try_from([c, d, h, s]).map_err(|_| malformed())
            }
            _ => Err(malformed()),
        }
    }
}

impl Arbitrary for Permutation {
    fn random() -> Self {
        use rand::prelude::IndexedRandom;
        let ref mut rng = rand::rng();
        Self::exhaust()
            .choose(rng)
            .copied()
            .unwrap_or(Self::identity())
    }
}

/// canonical text form: pairs sorted by source suit, `c=h,d=s,h=d,s=c`
impl std::fmt::Display for Permutation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let pairs = Suit::all()
            .iter()
            .map(|s| format!("{}={}", s, self.map(s)))
            .collect::<Vec<_>>();
        write!(f, "{}", pairs.join(","))
    }
}
