use super::card::Card;
use super::permutation::Permutation;
use super::rank::Rank;
use super::suit::Suit;

/// anything whose cards can be relabeled by a suit [`Permutation`].
///
/// the result is structurally identical to the input: same shape, same ranks,
/// same non-card content, only suits replaced by their images. the input is
/// never mutated, and applying `p.inverse()` afterwards recovers it.
pub trait Permute: Sized {
    fn permute(&self, permutation: &Permutation) -> Self;
}

impl Permute for Suit {
    fn permute(&self, permutation: &Permutation) -> Self {
        permutation.map(self)
    }
}

impl Permute for Card {
    fn permute(&self, permutation: &Permutation) -> Self {
        Card::from((self.rank(), self.suit().permute(permutation)))
    }
}

impl<T: Permute> Permute for Vec<T> {
    fn permute(&self, permutation: &Permutation) -> Self {
        self.iter().map(|x| x.permute(permutation)).collect()
    }
}

impl<T: Permute> Permute for Option<T> {
    fn permute(&self, permutation: &Permutation) -> Self {
        self.as_ref().map(|x| x.permute(permutation))
    }
}

impl<T: Permute> Permute for Box<T> {
    fn permute(&self, permutation: &Permutation) -> Self {
        Box::new(self.as_ref().permute(permutation))
    }
}

/// free text. each maximal run of ascii alphanumerics is rewritten only if
/// it is a whole number of rank-then-suit pairs, so "AhKd7c" moves while
/// "AKs", "QQ", "bet_50" and "Tsunami" stay put. never fails.
impl Permute for String {
    fn permute(&self, permutation: &Permutation) -> Self {
        let mut text = String::with_capacity(self.len());
        let mut word = String::new();
        for c in self.chars() {
            match c.is_ascii_alphanumeric() {
                true => word.push(c),
                false => {
                    text.push_str(&rewrite(&word, permutation));
                    text.push(c);
                    word.clear();
                }
            }
        }
        text.push_str(&rewrite(&word, permutation));
        text
    }
}

fn rewrite(word: &str, permutation: &Permutation) -> String {
    let chars = word.chars().collect::<Vec<_>>();
    if chars.is_empty() || chars.len() % 2 == 1 {
        return word.to_string();
    }
    chars
        .chunks(2)
        .map(|pair| match (Rank::try_from(pair[0]), Suit::try_from(pair[1])) {
            (Ok(_), Ok(suit)) => Some([pair[0], suit.permute(permutation).symbol()]),
            _ => None,
        })
        .collect::<Option<Vec<[char; 2]>>>()
        .map(|pairs| pairs.into_iter().flatten().collect())
        .unwrap_or_else(|| word.to_string())
}

/// nested json: strings are rewritten as free text, containers recurse,
/// object keys and scalars are left alone.
impl Permute for serde_json::Value {
    fn permute(&self, permutation: &Permutation) -> Self {
        use serde_json::Value;
        match self {
            Value::String(s) => Value::String(s.permute(permutation)),
            Value::Array(xs) => Value::Array(xs.permute(permutation)),
            Value::Object(map) => Value::Object(map.permute(permutation)),
            scalar => scalar.clone(),
        }
    }
}

impl Permute for serde_json::Map<String, serde_json::Value> {
    fn permute(&self, permutation: &Permutation) -> Self {
        self.iter()
            .map(|(k, v)| (k.clone(), v.permute(permutation)))
            .collect()
    }
}
